//! march_plugin - Framework/engine independent Marching Cubes meshing
//!
//! This crate polygonizes animated constructive-solid-geometry density
//! fields over a fixed chunked voxel world. Chunks quantize the field at
//! cell corners; dirty chunks are remeshed with the classic table-driven
//! Marching Cubes algorithm and streamed to an external triangle sink.
//!
//! # Features
//!
//! - **SDF primitives & combinators**: sphere, torus, box; union,
//!   intersection, subtraction, polynomial smooth union
//! - **Chunked world**: 3×3×3 corner-sampled chunks with a stable chunk
//!   coordinate index and per-chunk dirty tracking
//! - **Marching Cubes**: 256-entry edge/triangle tables, clamped edge
//!   interpolation, gradient-colored vertices
//! - **Scene orchestration**: time-driven sphere orbits and a rotating
//!   torus, rebuilt eagerly per frame, remeshed in parallel via rayon
//!
//! # Example
//!
//! ```ignore
//! use march_plugin::{scene, ChunkWorld, MeshOutput, SceneConfig};
//!
//! let mut world = ChunkWorld::new();
//! let config = SceneConfig::default();
//! let mut frame = MeshOutput::new();
//!
//! let stats = scene::rebuild(&mut world, &config, 0.25, &mut frame);
//! println!(
//!   "{} triangles from {} dirty chunks",
//!   stats.triangles, stats.chunks_dirty
//! );
//! ```

pub mod constants;
pub mod tables;
pub mod types;

// Re-export commonly used items
pub use constants::{
  coord_to_index, index_to_coord, CHUNK_WORLD_SIZE, CORNER_COUNT_CB, ISO_LEVEL, NUM_CORNERS,
  NUM_VOXELS, VOXEL_SIZE,
};
pub use tables::{CORNER_OFFSETS, EDGE_CONNECTIONS, EDGE_DIRECTIONS, EDGE_TABLE, TRI_TABLE};
pub use types::{density_quant, DensitySample, MeshOutput, MeshVertex, MinMaxAABB, TriangleSink};

// Density fields and CSG combinators
pub mod field;
pub use field::DensityField;

// Chunk storage and the sparse world index
pub mod chunk;
pub mod world;
pub use chunk::VoxelChunk;
pub use world::{chunk_coord, chunk_origin, ChunkWorld};

// Grid filling from density fields
pub mod sampler;

// Marching cubes mesher
pub mod mesher;

// Scene orchestration
pub mod scene;
pub use scene::{RebuildStats, SceneConfig, SceneField};

// Engine-agnostic metrics collection
pub mod metrics;
