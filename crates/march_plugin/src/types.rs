//! Core data types for Marching Cubes meshing.

use glam::Vec3;

/// Quantized occupancy sample stored in a chunk grid.
/// 0 = fully inside, 255 = fully outside; the isosurface sits at the
/// normalized value [`crate::constants::ISO_LEVEL`].
pub type DensitySample = u8;

/// Density conversion utilities for quantized storage.
///
/// Maps the [0, 1] density window linearly onto the byte range. The
/// mapping is lossy: only ordering relative to the isovalue threshold is
/// preserved, the original float is not reconstructible.
pub mod density_quant {
  use super::DensitySample;

  /// Quantize a raw field value into byte storage.
  ///
  /// Values below 0 clamp to 0 (deep inside), above 1 to 255 (outside).
  /// Truncating, monotonic: `a <= b` implies
  /// `to_storage(a) <= to_storage(b)`.
  #[inline(always)]
  pub fn to_storage(value: f32) -> DensitySample {
    (value * 255.0).clamp(0.0, 255.0) as DensitySample
  }

  /// Convert a stored byte back to normalized [0, 1] density.
  #[inline(always)]
  pub fn to_float(sample: DensitySample) -> f32 {
    sample as f32 / 255.0
  }
}

/// Output vertex: world-space position plus RGBA8 color.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshVertex {
  /// Vertex position in world space (chunk origins are baked in).
  pub position: [f32; 3],

  /// RGBA8 color derived from the cell gradient normal.
  pub color: [u8; 4],
}

impl Default for MeshVertex {
  fn default() -> Self {
    Self {
      position: [0.0; 3],
      color: [255, 255, 255, 255],
    }
  }
}

/// Axis-aligned bounding box.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min[0] <= self.max[0] && self.min[1] <= self.max[1] && self.min[2] <= self.max[2]
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Consumer of the per-frame triangle stream.
///
/// Vertices arrive in groups of three; push order determines triangle
/// winding and must be preserved by implementations. The renderer-facing
/// contract is begin batch / push vertices / end batch.
pub trait TriangleSink {
  /// Called before a chunk's triangles are pushed.
  fn begin_batch(&mut self) {}

  /// Push one vertex of the current triangle.
  fn push_vertex(&mut self, position: Vec3, color: [u8; 4]);

  /// Called after a chunk's triangles have been pushed.
  fn end_batch(&mut self) {}
}

/// Mesh generation result: an ephemeral, per-remesh triangle list.
///
/// Vertices are grouped implicitly in threes; there is no index buffer
/// since Marching Cubes emits independent triangles.
#[derive(Default)]
pub struct MeshOutput {
  /// Output vertices, 3 per triangle, winding preserved.
  pub vertices: Vec<MeshVertex>,

  /// Bounding box encompassing all vertices.
  pub bounds: MinMaxAABB,
}

impl MeshOutput {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.vertices.clear();
    self.bounds = MinMaxAABB::empty();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.vertices.len() / 3
  }

  /// Replay this mesh into another sink, preserving order.
  pub fn drain_into<S: TriangleSink>(&self, sink: &mut S) {
    sink.begin_batch();
    for v in &self.vertices {
      sink.push_vertex(Vec3::from_array(v.position), v.color);
    }
    sink.end_batch();
  }
}

impl TriangleSink for MeshOutput {
  fn push_vertex(&mut self, position: Vec3, color: [u8; 4]) {
    let position = position.to_array();
    self.bounds.encapsulate(position);
    self.vertices.push(MeshVertex { position, color });
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
