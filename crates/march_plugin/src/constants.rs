//! Lattice layout constants for 16³-cell voxel chunks.
//!
//! Chunks store density at cell *corners*, so a chunk with 16 cells per
//! axis carries 17 samples per axis. Adjacent chunks conceptually share a
//! face of corner samples; this crate does not enforce cross-chunk
//! continuity, each chunk samples its own corner lattice.
//!
//! # Sample Layout
//!
//! ```text
//! Corner index:  0     1     2    ...    15    16
//!                │     │                  │     │
//!                │     └──── 16 cells ────┘     │
//!                │          (0..16)             │
//!                └─ chunk origin                └─ shared with +axis
//!                                                  neighbour (conceptually)
//! ```
//!
//! # Memory Layout
//!
//! Row-major, Z innermost:
//!
//! ```text
//! index = x * 17² + y * 17 + z
//! ```
//!
//! 17 is not a power of two, so indexing is multiplicative rather than
//! bit-shifted.
//!
//! # Coordinate System
//!
//! ```text
//!         +Y
//!          │
//!          │
//!          └───────── +X
//!         /
//!        +Z
//! ```

/// Number of cells per axis in a chunk.
pub const NUM_VOXELS: usize = 16;

/// Number of corner samples per axis (`NUM_VOXELS + 1`, corner-sampled).
pub const NUM_CORNERS: usize = NUM_VOXELS + 1;

/// Corner samples per chunk face (17² = 289).
pub const CORNER_COUNT_SQ: usize = NUM_CORNERS * NUM_CORNERS;

/// Total corner samples in a chunk (17³ = 4913).
pub const CORNER_COUNT_CB: usize = NUM_CORNERS * NUM_CORNERS * NUM_CORNERS;

/// World-space edge length of one chunk.
pub const CHUNK_WORLD_SIZE: f32 = 8.0;

/// World-space edge length of one cell.
pub const VOXEL_SIZE: f32 = CHUNK_WORLD_SIZE / NUM_VOXELS as f32;

/// Chunks per axis in the fixed cubic world arrangement.
pub const WORLD_CHUNKS_PER_AXIS: i32 = 3;

/// Lowest chunk coordinate on each axis (arrangement is centered on the
/// middle chunk, coordinates -1..=1).
pub const WORLD_MIN_CHUNK: i32 = -(WORLD_CHUNKS_PER_AXIS / 2);

/// Isovalue in normalized [0, 1] density space. Samples at or below this
/// threshold are inside the surface.
pub const ISO_LEVEL: f32 = 0.5;

/// Coarse culling window for field evaluation: raw field values above
/// this are not written into the grid (the reset value already encodes
/// "far outside").
pub const ACCEPT_WINDOW: f32 = 10.0;

/// Convert 3D corner coordinates to flat array index.
#[inline(always)]
pub fn coord_to_index(x: usize, y: usize, z: usize) -> usize {
  x * CORNER_COUNT_SQ + y * NUM_CORNERS + z
}

/// Convert flat array index back to 3D corner coordinates.
#[inline(always)]
pub fn index_to_coord(index: usize) -> (usize, usize, usize) {
  let x = index / CORNER_COUNT_SQ;
  let y = (index % CORNER_COUNT_SQ) / NUM_CORNERS;
  let z = index % NUM_CORNERS;
  (x, y, z)
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
