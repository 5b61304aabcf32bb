//! Scalar density fields: signed distance primitives and CSG combinators.
//!
//! A field maps a world-space point to a signed scalar. Negative values
//! are inside the implicit surface, positive outside, zero on it. Fields
//! are pure and deterministic; nothing here caches or fails.

use glam::{Quat, Vec3};

/// A scalar density field evaluated at world-space points.
///
/// The seam between scene composition and sampling: chunks are filled by
/// evaluating a `DensityField` at every lattice corner.
pub trait DensityField {
  fn density(&self, p: Vec3) -> f32;
}

impl<F: Fn(Vec3) -> f32> DensityField for F {
  #[inline]
  fn density(&self, p: Vec3) -> f32 {
    self(p)
  }
}

// =============================================================================
// Primitives
// =============================================================================

/// Signed distance from `p` to a sphere. Negative inside, positive
/// outside, zero at the surface; `sphere_sdf(center, center, r) == -r`.
#[inline]
pub fn sphere_sdf(p: Vec3, center: Vec3, radius: f32) -> f32 {
  (p - center).length() - radius
}

/// Signed distance from `p` to a torus.
///
/// The torus lies in the local XZ plane; `rotation` and `center` place it
/// in world space. `major_radius` is the ring radius, `minor_radius` the
/// tube radius.
#[inline]
pub fn torus_sdf(p: Vec3, center: Vec3, rotation: Quat, major_radius: f32, minor_radius: f32) -> f32 {
  let local = rotation.inverse() * (p - center);
  let ring = (local.x * local.x + local.z * local.z).sqrt() - major_radius;
  (ring * ring + local.y * local.y).sqrt() - minor_radius
}

/// Signed distance from `p` to an origin-centered axis-aligned box.
#[inline]
pub fn box_sdf(p: Vec3, half_extents: Vec3) -> f32 {
  let q = p.abs() - half_extents;
  q.max(Vec3::ZERO).length() + q.max_element().min(0.0)
}

// =============================================================================
// CSG combinators
// =============================================================================

/// Hard union: `min(d1, d2)`.
#[inline]
pub fn union(d1: f32, d2: f32) -> f32 {
  d1.min(d2)
}

/// Intersection: `max(d1, d2)`.
#[inline]
pub fn intersection(d1: f32, d2: f32) -> f32 {
  d1.max(d2)
}

/// Subtraction: removes `d1`'s volume from `d2`.
#[inline]
pub fn subtract(d1: f32, d2: f32) -> f32 {
  (-d1).max(d2)
}

/// Polynomial smooth union with blend factor `k` (world units).
///
/// Continuous in both operands; approaches the hard union as `k -> 0`.
/// Non-positive `k` degrades to the hard union.
#[inline]
pub fn smooth_union(d1: f32, d2: f32, k: f32) -> f32 {
  if k <= 0.0 {
    return union(d1, d2);
  }
  let h = (0.5 + 0.5 * (d2 - d1) / k).clamp(0.0, 1.0);
  // lerp(d2, d1, h) with a blending fillet subtracted
  d2 + (d1 - d2) * h - k * h * (1.0 - h)
}

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;
