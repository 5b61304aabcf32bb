use std::collections::HashMap;

use glam::Vec3;

use super::*;
use crate::constants::{NUM_CORNERS, VOXEL_SIZE};
use crate::field::{smooth_union, sphere_sdf};
use crate::sampler::{place_primitive, sample_chunk};
use crate::types::MeshVertex;

/// Exact deduplication key for a vertex position.
///
/// Edge interpolation is canonicalized per lattice edge, so crossing
/// points shared between cells match bitwise.
fn vertex_key(v: &MeshVertex) -> [u32; 3] {
  v.position.map(f32::to_bits)
}

/// Count connected components of the triangle adjacency graph
/// (triangles are adjacent when they share a vertex position).
fn connected_components(vertices: &[MeshVertex]) -> usize {
  let mut ids: HashMap<[u32; 3], usize> = HashMap::new();
  let mut parent: Vec<usize> = Vec::new();

  fn find(parent: &mut Vec<usize>, mut i: usize) -> usize {
    while parent[i] != i {
      parent[i] = parent[parent[i]];
      i = parent[i];
    }
    i
  }

  for tri in vertices.chunks_exact(3) {
    let mut roots = [0usize; 3];
    for (slot, v) in tri.iter().enumerate() {
      let next_id = parent.len();
      let id = *ids.entry(vertex_key(v)).or_insert(next_id);
      if id == next_id {
        parent.push(next_id);
      }
      roots[slot] = find(&mut parent, id);
    }
    parent[roots[1]] = roots[0];
    let r2 = find(&mut parent, roots[2]);
    parent[r2] = find(&mut parent, roots[0]);
  }

  let mut distinct = std::collections::HashSet::new();
  for i in 0..parent.len() {
    let root = find(&mut parent, i);
    distinct.insert(root);
  }
  distinct.len()
}

#[test]
fn test_fully_outside_chunk_is_empty() {
  let chunk = VoxelChunk::new(Vec3::ZERO);
  let output = remesh_chunk(&chunk);
  assert!(output.is_empty());
}

#[test]
fn test_fully_inside_chunk_is_empty() {
  let mut chunk = VoxelChunk::new(Vec3::ZERO);
  for x in 0..NUM_CORNERS {
    for y in 0..NUM_CORNERS {
      for z in 0..NUM_CORNERS {
        chunk.set_sample(x, y, z, 0);
      }
    }
  }
  let output = remesh_chunk(&chunk);
  assert!(output.is_empty());
}

#[test]
fn test_uniform_outside_field_produces_no_triangles() {
  let mut chunk = VoxelChunk::new(Vec3::ZERO);
  let field = |_p: Vec3| 1.0f32;
  sample_chunk(&mut chunk, &field);

  assert!(remesh_chunk(&chunk).is_empty());
}

#[test]
fn test_sphere_chunk_produces_closed_spherical_mesh() {
  let mut chunk = VoxelChunk::new(Vec3::ZERO);
  let center = Vec3::splat(4.0);
  let radius = 2.0;
  let field = |p: Vec3| sphere_sdf(p, center, radius);
  sample_chunk(&mut chunk, &field);

  let output = remesh_chunk(&chunk);
  assert!(!output.is_empty());
  assert_eq!(output.vertices.len() % 3, 0);

  // Quantization puts the extracted surface at raw density 0.5, i.e.
  // radius + 0.5; every vertex must sit within one grid spacing of it.
  let iso_radius = radius + 0.5;
  for v in &output.vertices {
    let d = Vec3::from_array(v.position).distance(center);
    assert!(
      (d - iso_radius).abs() <= VOXEL_SIZE + 0.05,
      "vertex at distance {} from center",
      d
    );
  }

  // Closed surface: every undirected edge is used an even number of times
  let mut edge_uses: HashMap<([u32; 3], [u32; 3]), usize> = HashMap::new();
  for tri in output.vertices.chunks_exact(3) {
    for (a, b) in [(0, 1), (1, 2), (2, 0)] {
      let (ka, kb) = (vertex_key(&tri[a]), vertex_key(&tri[b]));
      let key = if ka <= kb { (ka, kb) } else { (kb, ka) };
      *edge_uses.entry(key).or_insert(0) += 1;
    }
  }
  for (edge, uses) in &edge_uses {
    assert_eq!(uses % 2, 0, "boundary edge {:?}", edge);
  }

  assert_eq!(connected_components(&output.vertices), 1);
}

#[test]
fn test_edge_interpolation_lands_on_the_crossing_plane() {
  // Step field along X: corners below 8 inside, the rest outside. The
  // only crossings are on X edges between lattice 7 and 8, both at full
  // byte range, so t = 0.5 and every vertex lies on that plane.
  let mut chunk = VoxelChunk::new(Vec3::ZERO);
  for x in 0..NUM_CORNERS {
    let value = if x < 8 { 0 } else { 255 };
    for y in 0..NUM_CORNERS {
      for z in 0..NUM_CORNERS {
        chunk.set_sample(x, y, z, value);
      }
    }
  }

  let output = remesh_chunk(&chunk);
  assert!(!output.is_empty());

  let plane_x = 7.5 * VOXEL_SIZE;
  for v in &output.vertices {
    assert!(
      (v.position[0] - plane_x).abs() < 1e-5,
      "vertex off the crossing plane: {:?}",
      v.position
    );
  }
}

#[test]
fn test_distant_spheres_form_two_components_until_they_merge() {
  // Far apart: surfaces confined to different chunks
  let far_a = Vec3::new(-4.0, 4.0, 4.0);
  let far_b = Vec3::new(12.0, 4.0, 4.0);
  let vertices = mesh_two_spheres(far_a, far_b);
  assert_eq!(connected_components(&vertices), 2);

  // Overlapping inside one chunk: a single blended surface
  let near_a = Vec3::new(3.0, 4.0, 4.0);
  let near_b = Vec3::new(5.0, 4.0, 4.0);
  let vertices = mesh_two_spheres(near_a, near_b);
  assert_eq!(connected_components(&vertices), 1);
}

fn mesh_two_spheres(a: Vec3, b: Vec3) -> Vec<MeshVertex> {
  let radius = 2.0;
  let k = 0.05;
  let field =
    move |p: Vec3| smooth_union(sphere_sdf(p, a, radius), sphere_sdf(p, b, radius), k);

  let mut world = ChunkWorld::new();
  let extent = Vec3::splat(radius + 1.0);
  place_primitive(&mut world, &field, a - extent, a + extent);
  place_primitive(&mut world, &field, b - extent, b + extent);

  let dirty = world.dirty_slots();
  let meshes = remesh_batch(&world, &dirty);

  let mut vertices = Vec::new();
  for mesh in meshes {
    vertices.extend(mesh.vertices);
  }
  assert!(!vertices.is_empty());
  vertices
}

#[test]
fn test_remesh_batch_matches_sequential_order() {
  let mut world = ChunkWorld::new();
  let field = |p: Vec3| sphere_sdf(p, Vec3::splat(4.0), 3.0);
  place_primitive(
    &mut world,
    &field,
    Vec3::splat(-1.0),
    Vec3::splat(9.0),
  );

  let dirty = world.dirty_slots();
  assert!(!dirty.is_empty());

  let parallel = remesh_batch(&world, &dirty);
  for (slot, mesh) in dirty.iter().zip(&parallel) {
    let sequential = remesh_chunk(world.chunk(*slot));
    assert_eq!(sequential.vertices, mesh.vertices);
  }
}
