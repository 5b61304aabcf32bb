//! Cell-gradient normal approximation and color mapping.
//!
//! The normal is the gradient of the sampled grid across the cell's 8
//! corners (face-sum stencil). It is always computed from the grid
//! before any vertex consumes it, with no extra field evaluations per
//! edge crossing.

use glam::Vec3A;

/// Compute a unit gradient normal from 8 corner samples.
///
/// Corner layout matches [`crate::tables::CORNER_OFFSETS`]:
/// ```text
/// 0: (0,0,0)  1: (1,0,0)  2: (1,1,0)  3: (0,1,0)
/// 4: (0,0,1)  5: (1,0,1)  6: (1,1,1)  7: (0,1,1)
/// ```
///
/// Density increases outward, so the gradient points out of the surface.
/// Degenerate (flat) cells fall back to +Y.
#[inline]
pub fn cell_gradient(samples: &[f32; 8]) -> [f32; 3] {
  // X gradient: sum of +X face - sum of -X face
  let gx = (samples[1] + samples[2] + samples[5] + samples[6])
    - (samples[0] + samples[3] + samples[4] + samples[7]);

  // Y gradient: sum of +Y face - sum of -Y face
  let gy = (samples[2] + samples[3] + samples[6] + samples[7])
    - (samples[0] + samples[1] + samples[4] + samples[5]);

  // Z gradient: sum of +Z face - sum of -Z face
  let gz = (samples[4] + samples[5] + samples[6] + samples[7])
    - (samples[0] + samples[1] + samples[2] + samples[3]);

  let gradient = Vec3A::new(gx, gy, gz);
  let len_sq = gradient.length_squared();

  if len_sq < 1e-8 {
    return [0.0, 1.0, 0.0]; // Fallback to up
  }

  let normalized = gradient * len_sq.sqrt().recip();
  [normalized.x, normalized.y, normalized.z]
}

/// Map a unit normal to an RGBA8 color (`n * 0.5 + 0.5` per channel,
/// opaque alpha).
#[inline]
pub fn normal_color(normal: [f32; 3]) -> [u8; 4] {
  let channel = |n: f32| ((n * 0.5 + 0.5) * 255.0).clamp(0.0, 255.0) as u8;
  [channel(normal[0]), channel(normal[1]), channel(normal[2]), 255]
}

#[cfg(test)]
#[path = "normals_test.rs"]
mod normals_test;
