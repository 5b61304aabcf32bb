//! Chunk sampling: evaluate a density field at every lattice corner and
//! quantize into the occupancy grid.
//!
//! Two variants:
//! - [`sample_chunk`] rewrites a chunk's whole grid and marks it dirty
//!   unconditionally (full-resample path).
//! - [`place_primitive`] min-combines field values into every chunk a
//!   primitive's bounding box overlaps, marking a chunk dirty only when a
//!   sample actually changes (CSG placement path).

use glam::Vec3;

use crate::chunk::VoxelChunk;
use crate::constants::{ACCEPT_WINDOW, NUM_CORNERS};
use crate::field::DensityField;
use crate::types::density_quant;
use crate::world::ChunkWorld;

/// Fill a chunk's grid from a density field.
///
/// Field values above the acceptance window are not written; the grid
/// position keeps its prior value (the reset value already encodes "far
/// outside"). Marks the chunk dirty.
pub fn sample_chunk<F: DensityField>(chunk: &mut VoxelChunk, field: &F) {
  for x in 0..NUM_CORNERS {
    for y in 0..NUM_CORNERS {
      for z in 0..NUM_CORNERS {
        let p = chunk.corner_position(x, y, z);
        let d = field.density(p);
        if d <= ACCEPT_WINDOW {
          chunk.set_sample(x, y, z, density_quant::to_storage(d));
        }
      }
    }
  }
  chunk.mark_dirty();
}

/// Write a field into every chunk overlapping the AABB `[min, max]`,
/// min-combining with the existing grid.
///
/// The field passed in is typically the full composed scene field, so
/// smooth blends between primitives survive placement; the AABB only
/// bounds *which* chunks get touched. Chunks outside the world are
/// skipped. Returns the number of chunks that became dirty.
pub fn place_primitive<F: DensityField>(
  world: &mut ChunkWorld,
  field: &F,
  min: Vec3,
  max: Vec3,
) -> usize {
  let slots = world.chunks_overlapping(min, max);
  let mut dirtied = 0;

  for slot in slots {
    let chunk = world.chunk_mut(slot);
    let was_dirty = chunk.is_dirty();

    for x in 0..NUM_CORNERS {
      for y in 0..NUM_CORNERS {
        for z in 0..NUM_CORNERS {
          let p = chunk.corner_position(x, y, z);
          let d = field.density(p);
          if d <= ACCEPT_WINDOW {
            chunk.min_sample(x, y, z, density_quant::to_storage(d));
          }
        }
      }
    }

    if !was_dirty && chunk.is_dirty() {
      dirtied += 1;
    }
  }

  dirtied
}

#[cfg(test)]
#[path = "sampler_test.rs"]
mod sampler_test;
