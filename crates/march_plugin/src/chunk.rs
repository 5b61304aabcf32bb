//! VoxelChunk - fixed-size corner-sampled occupancy grid.
//!
//! A chunk owns a flat 17³ array of quantized density samples anchored at
//! a world-space origin, plus a dirty flag driving remesh granularity.
//! Chunks are created once at world construction and only mutated
//! afterwards; `data` is rewritten in place, never reallocated.

use glam::Vec3;

use crate::constants::{coord_to_index, CORNER_COUNT_CB, NUM_CORNERS, VOXEL_SIZE};
use crate::types::DensitySample;

/// Reset value for the grid: fully outside the surface.
pub const OUTSIDE: DensitySample = 255;

/// A fixed-size 3D grid of quantized density samples.
pub struct VoxelChunk {
  /// World-space corner position of the chunk.
  pub origin: Vec3,

  /// 17³ corner samples, row-major, Z innermost.
  data: Box<[DensitySample; CORNER_COUNT_CB]>,

  /// True if the chunk's triangulation must be recomputed.
  dirty: bool,
}

impl VoxelChunk {
  /// Create a chunk at the given world-space origin, grid fully outside.
  pub fn new(origin: Vec3) -> Self {
    Self {
      origin,
      data: Box::new([OUTSIDE; CORNER_COUNT_CB]),
      dirty: false,
    }
  }

  /// Refill the grid with "outside" and clear the dirty flag.
  pub fn reset(&mut self) {
    self.data.fill(OUTSIDE);
    self.dirty = false;
  }

  /// True if this chunk needs remeshing.
  #[inline]
  pub fn is_dirty(&self) -> bool {
    self.dirty
  }

  /// Mark the chunk for remeshing.
  #[inline]
  pub fn mark_dirty(&mut self) {
    self.dirty = true;
  }

  /// Clear the dirty flag after remeshing.
  #[inline]
  pub fn clear_dirty(&mut self) {
    self.dirty = false;
  }

  /// Clamp a lattice coordinate into the valid corner range.
  ///
  /// Debug builds assert instead: an out-of-range index is a logic
  /// error, not a recoverable condition.
  #[inline(always)]
  fn checked(coord: usize) -> usize {
    debug_assert!(coord < NUM_CORNERS, "lattice index {coord} out of range");
    coord.min(NUM_CORNERS - 1)
  }

  /// Read a corner sample.
  #[inline]
  pub fn sample(&self, x: usize, y: usize, z: usize) -> DensitySample {
    self.data[coord_to_index(Self::checked(x), Self::checked(y), Self::checked(z))]
  }

  /// Overwrite a corner sample.
  #[inline]
  pub fn set_sample(&mut self, x: usize, y: usize, z: usize, value: DensitySample) {
    self.data[coord_to_index(Self::checked(x), Self::checked(y), Self::checked(z))] = value;
  }

  /// Combining write for CSG placement: keeps the minimum of the stored
  /// and incoming sample, marking the chunk dirty only when the stored
  /// byte actually changes.
  #[inline]
  pub fn min_sample(&mut self, x: usize, y: usize, z: usize, value: DensitySample) {
    let idx = coord_to_index(Self::checked(x), Self::checked(y), Self::checked(z));
    if value < self.data[idx] {
      self.data[idx] = value;
      self.dirty = true;
    }
  }

  /// World-space position of a lattice corner.
  #[inline]
  pub fn corner_position(&self, x: usize, y: usize, z: usize) -> Vec3 {
    self.origin + Vec3::new(x as f32, y as f32, z as f32) * VOXEL_SIZE
  }

  /// Raw grid access for bulk operations.
  #[inline]
  pub fn data(&self) -> &[DensitySample; CORNER_COUNT_CB] {
    &self.data
  }
}

#[cfg(test)]
#[path = "chunk_test.rs"]
mod chunk_test;
