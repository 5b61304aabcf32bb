use glam::Vec3;

use super::*;
use crate::chunk::{VoxelChunk, OUTSIDE};
use crate::constants::NUM_VOXELS;
use crate::field::sphere_sdf;

#[test]
fn test_sample_chunk_quantizes_sphere() {
  let mut chunk = VoxelChunk::new(Vec3::ZERO);
  let center = Vec3::splat(4.0);
  let field = |p: Vec3| sphere_sdf(p, center, 2.0);

  sample_chunk(&mut chunk, &field);
  assert!(chunk.is_dirty());

  // Chunk center corner (8,8,8) sits inside the sphere
  let mid = NUM_VOXELS / 2;
  assert_eq!(chunk.sample(mid, mid, mid), 0);

  // The chunk origin corner is far outside (distance ~6.9 - 2 > 1)
  assert_eq!(chunk.sample(0, 0, 0), OUTSIDE);
}

#[test]
fn test_sample_chunk_respects_acceptance_window() {
  let mut chunk = VoxelChunk::new(Vec3::ZERO);
  chunk.set_sample(0, 0, 0, 7);

  // A field entirely above the window writes nothing
  let far_field = |_p: Vec3| 50.0f32;
  sample_chunk(&mut chunk, &far_field);

  assert_eq!(chunk.sample(0, 0, 0), 7, "prior sample must survive");
  assert!(chunk.is_dirty(), "full resample marks dirty unconditionally");
}

#[test]
fn test_place_primitive_dirties_only_overlapped_chunks() {
  let mut world = ChunkWorld::new();
  let center = Vec3::splat(4.0); // middle of the (0,0,0) chunk
  let field = |p: Vec3| sphere_sdf(p, center, 1.5);

  let extent = Vec3::splat(2.0);
  let dirtied = place_primitive(&mut world, &field, center - extent, center + extent);

  assert_eq!(dirtied, 1);
  let dirty = world.dirty_slots();
  assert_eq!(dirty.len(), 1);
  assert_eq!(world.chunk(dirty[0]).origin, Vec3::ZERO);
}

#[test]
fn test_place_primitive_outside_world_is_skipped() {
  let mut world = ChunkWorld::new();
  let center = Vec3::splat(100.0);
  let field = |p: Vec3| sphere_sdf(p, center, 1.5);

  let extent = Vec3::splat(2.0);
  let dirtied = place_primitive(&mut world, &field, center - extent, center + extent);

  assert_eq!(dirtied, 0);
  assert!(world.dirty_slots().is_empty());
}

#[test]
fn test_place_primitive_without_sample_change_stays_clean() {
  let mut world = ChunkWorld::new();

  // Field is everywhere outside the window: no bytes change, no dirt
  let far_field = |_p: Vec3| 50.0f32;
  let dirtied = place_primitive(
    &mut world,
    &far_field,
    Vec3::splat(1.0),
    Vec3::splat(2.0),
  );

  assert_eq!(dirtied, 0);
  assert!(world.dirty_slots().is_empty());
}

#[test]
fn test_place_primitive_min_combines_across_calls() {
  let mut world = ChunkWorld::new();
  let slot = world.lookup_point(Vec3::splat(4.0)).unwrap();

  let a = |p: Vec3| sphere_sdf(p, Vec3::new(3.0, 4.0, 4.0), 1.0);
  let b = |p: Vec3| sphere_sdf(p, Vec3::new(5.0, 4.0, 4.0), 1.0);
  place_primitive(&mut world, &a, Vec3::splat(1.0), Vec3::splat(7.0));
  place_primitive(&mut world, &b, Vec3::splat(1.0), Vec3::splat(7.0));

  // Both sphere interiors are present in the same grid
  let chunk = world.chunk(slot);
  let inside_a = chunk.sample(6, 8, 8); // world (3,4,4)
  let inside_b = chunk.sample(10, 8, 8); // world (5,4,4)
  assert_eq!(inside_a, 0);
  assert_eq!(inside_b, 0);
}
