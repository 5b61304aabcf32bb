//! Marching Cubes mesher.
//!
//! Converts a chunk's occupancy grid into a triangle stream via the
//! classic table-driven algorithm.
//!
//! # Per-cell pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  chunk grid: [u8; 17³]   - quantized density at cell corners    │
//! │  EDGE_TABLE: [u16; 256]  - crossed-edge mask per configuration  │
//! │  TRI_TABLE:  [[i8;16];256] - triangle list per configuration    │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  1. CLASSIFY: read 8 corner bytes, normalize by /255, set bit v │
//! │     when corner v <= isovalue. Skip configurations 0 and 255.   │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  2. INTERPOLATE: for each crossed edge, linear fraction         │
//! │     t = (iso - v0) / (v1 - v0)  (t = 0.5 on flat edges),        │
//! │     crossing point on the world-space corner segment.           │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  3. EMIT: up to 5 triangles from TRI_TABLE, 3 vertices each,    │
//! │     winding preserved, colored by the cell gradient normal,     │
//! │     pushed into the caller's TriangleSink.                      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The mesher owns no buffer; it is a producer into an external sink.
//! This is the hottest routine in the crate, which is why remeshing is
//! scoped to dirty chunks and batched through rayon.

pub mod normals;

use glam::Vec3;
use rayon::prelude::*;
use smallvec::SmallVec;

use crate::chunk::VoxelChunk;
use crate::constants::{ISO_LEVEL, NUM_VOXELS, VOXEL_SIZE};
use crate::tables::{CORNER_OFFSETS, EDGE_CONNECTIONS, EDGE_DIRECTIONS, EDGE_TABLE, TRI_TABLE};
use crate::types::{density_quant, MeshOutput, TriangleSink};
use crate::world::ChunkWorld;

/// Triangulate every cell of a chunk into the sink.
///
/// Emitted positions are world-space (the chunk origin is baked in), so
/// no per-chunk transform is needed downstream.
pub fn polygonize_chunk<S: TriangleSink>(chunk: &VoxelChunk, sink: &mut S) {
  sink.begin_batch();
  for x in 0..NUM_VOXELS {
    for y in 0..NUM_VOXELS {
      for z in 0..NUM_VOXELS {
        march_cell(chunk, x, y, z, sink);
      }
    }
  }
  sink.end_batch();
}

/// Triangulate a single cell.
fn march_cell<S: TriangleSink>(chunk: &VoxelChunk, x: usize, y: usize, z: usize, sink: &mut S) {
  // 1. Corner values, normalized to [0, 1].
  let mut corner = [0.0f32; 8];
  for (i, offset) in CORNER_OFFSETS.iter().enumerate() {
    corner[i] =
      density_quant::to_float(chunk.sample(x + offset[0], y + offset[1], z + offset[2]));
  }

  // 2. Corner configuration: bit v set when corner v is inside.
  let mut cube_index = 0usize;
  for (i, &value) in corner.iter().enumerate() {
    if value <= ISO_LEVEL {
      cube_index |= 1 << i;
    }
  }

  // Homogeneous cells (fully inside or outside) emit nothing.
  let edge_mask = EDGE_TABLE[cube_index];
  if edge_mask == 0 {
    return;
  }

  // 3. Crossing point on each crossed edge.
  let mut edge_points = [Vec3::ZERO; 12];
  for (e, connection) in EDGE_CONNECTIONS.iter().enumerate() {
    if edge_mask & (1 << e) == 0 {
      continue;
    }
    let (c0, c1) = (connection[0], connection[1]);
    // Walk the edge from its lattice-lexicographically smaller endpoint
    // so the 4 cells sharing a lattice edge interpolate with identical
    // operands; crossings then match bitwise across cells and the
    // output stays watertight.
    let flipped = CORNER_OFFSETS[c1] < CORNER_OFFSETS[c0];
    let (lo, hi) = if flipped { (c1, c0) } else { (c0, c1) };
    let (v0, v1) = (corner[lo], corner[hi]);

    let denom = v1 - v0;
    let t = if denom.abs() < 1e-6 {
      0.5
    } else {
      ((ISO_LEVEL - v0) / denom).clamp(0.0, 1.0)
    };

    let o = CORNER_OFFSETS[lo];
    let p0 = chunk.corner_position(x + o[0], y + o[1], z + o[2]);
    let dir = Vec3::from(EDGE_DIRECTIONS[e]);
    let dir = if flipped { -dir } else { dir };
    edge_points[e] = p0 + dir * (VOXEL_SIZE * t);
  }

  // 4. Triangle emission. Color comes from the cell gradient, computed
  //    from the same 8 corner samples before any vertex consumes it.
  let color = normals::normal_color(normals::cell_gradient(&corner));

  let triangles = &TRI_TABLE[cube_index];
  let mut vertices: SmallVec<[Vec3; 15]> = SmallVec::new();
  let mut i = 0;
  while triangles[i] >= 0 {
    vertices.push(edge_points[triangles[i] as usize]);
    i += 1;
  }
  for position in vertices {
    sink.push_vertex(position, color);
  }
}

/// Mesh a single chunk into an owned buffer.
pub fn remesh_chunk(chunk: &VoxelChunk) -> MeshOutput {
  let mut output = MeshOutput::new();
  polygonize_chunk(chunk, &mut output);
  output
}

/// Mesh the given chunk slots in parallel via rayon.
///
/// Results keep the same order as `slots` for deterministic output.
pub fn remesh_batch(world: &ChunkWorld, slots: &[usize]) -> Vec<MeshOutput> {
  if slots.is_empty() {
    return Vec::new();
  }

  slots
    .par_iter()
    .map(|&slot| remesh_chunk(world.chunk(slot)))
    .collect()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
