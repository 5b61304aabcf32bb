//! ChunkWorld - fixed arrangement of voxel chunks plus spatial index.
//!
//! The world is created once with a 3×3×3 cubic arrangement of chunks
//! around the origin; chunks are never added or removed afterwards, only
//! mutated. The spatial index maps integer chunk coordinates to storage
//! slots and is unique and stable for the world's lifetime.

use std::collections::HashMap;

use glam::{IVec3, Vec3};
use tracing::debug;

use crate::chunk::VoxelChunk;
use crate::constants::{CHUNK_WORLD_SIZE, WORLD_CHUNKS_PER_AXIS, WORLD_MIN_CHUNK};

/// Sparse mapping from chunk coordinates to chunk storage.
pub struct ChunkWorld {
  chunks: Vec<VoxelChunk>,
  index: HashMap<IVec3, usize>,
}

/// Integer chunk coordinate containing a world-space point
/// (world position divided by chunk size, floored).
#[inline]
pub fn chunk_coord(p: Vec3) -> IVec3 {
  (p / CHUNK_WORLD_SIZE).floor().as_ivec3()
}

/// World-space origin (minimum corner) of a chunk coordinate.
#[inline]
pub fn chunk_origin(coord: IVec3) -> Vec3 {
  coord.as_vec3() * CHUNK_WORLD_SIZE
}

impl ChunkWorld {
  /// Create the fixed cubic arrangement of chunks centered on origin.
  pub fn new() -> Self {
    let per_axis = WORLD_CHUNKS_PER_AXIS;
    let count = (per_axis * per_axis * per_axis) as usize;
    let mut chunks = Vec::with_capacity(count);
    let mut index = HashMap::with_capacity(count);

    let lo = WORLD_MIN_CHUNK;
    let hi = WORLD_MIN_CHUNK + per_axis;
    for cx in lo..hi {
      for cy in lo..hi {
        for cz in lo..hi {
          let coord = IVec3::new(cx, cy, cz);
          index.insert(coord, chunks.len());
          chunks.push(VoxelChunk::new(chunk_origin(coord)));
        }
      }
    }

    debug!(chunks = chunks.len(), per_axis, "chunk world created");
    Self { chunks, index }
  }

  /// Number of chunks in the world.
  pub fn len(&self) -> usize {
    self.chunks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.chunks.is_empty()
  }

  /// Look up the storage slot for a chunk coordinate.
  ///
  /// `None` for coordinates outside the world; this is an expected,
  /// non-exceptional outcome (a primitive partially out of bounds) and
  /// callers skip such coordinates.
  #[inline]
  pub fn lookup(&self, coord: IVec3) -> Option<usize> {
    self.index.get(&coord).copied()
  }

  /// Chunk storage slot containing a world-space point, if any.
  #[inline]
  pub fn lookup_point(&self, p: Vec3) -> Option<usize> {
    self.lookup(chunk_coord(p))
  }

  pub fn chunk(&self, slot: usize) -> &VoxelChunk {
    &self.chunks[slot]
  }

  pub fn chunk_mut(&mut self, slot: usize) -> &mut VoxelChunk {
    &mut self.chunks[slot]
  }

  pub fn chunks(&self) -> &[VoxelChunk] {
    &self.chunks
  }

  pub fn chunks_mut(&mut self) -> &mut [VoxelChunk] {
    &mut self.chunks
  }

  /// Storage slots of all chunks overlapping a world-space AABB.
  ///
  /// Steps integer chunk coordinates directly, so each overlapped chunk
  /// is visited exactly once; coordinates outside the world are skipped.
  pub fn chunks_overlapping(&self, min: Vec3, max: Vec3) -> Vec<usize> {
    let lo = chunk_coord(min);
    let hi = chunk_coord(max);

    let mut slots = Vec::new();
    for cx in lo.x..=hi.x {
      for cy in lo.y..=hi.y {
        for cz in lo.z..=hi.z {
          if let Some(slot) = self.lookup(IVec3::new(cx, cy, cz)) {
            slots.push(slot);
          }
        }
      }
    }
    slots
  }

  /// Storage slots of all currently dirty chunks, in stable slot order.
  pub fn dirty_slots(&self) -> Vec<usize> {
    self
      .chunks
      .iter()
      .enumerate()
      .filter(|(_, c)| c.is_dirty())
      .map(|(slot, _)| slot)
      .collect()
  }
}

impl Default for ChunkWorld {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
#[path = "world_test.rs"]
mod world_test;
