//! Benchmarks for the Marching Cubes hot paths: single-chunk
//! polygonization and the full per-frame scene rebuild.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use march_plugin::field::sphere_sdf;
use march_plugin::mesher::remesh_chunk;
use march_plugin::sampler::sample_chunk;
use march_plugin::scene;
use march_plugin::types::MeshOutput;
use march_plugin::{ChunkWorld, SceneConfig, VoxelChunk};

/// Build a chunk filled with a centered sphere field.
fn sphere_chunk() -> VoxelChunk {
  let mut chunk = VoxelChunk::new(Vec3::ZERO);
  let center = Vec3::splat(4.0);
  let field = |p: Vec3| sphere_sdf(p, center, 3.0);
  sample_chunk(&mut chunk, &field);
  chunk
}

fn bench_polygonize_chunk(c: &mut Criterion) {
  let chunk = sphere_chunk();

  c.bench_function("mesher::remesh_chunk (16³ sphere)", |b| {
    b.iter(|| {
      let output = remesh_chunk(black_box(&chunk));
      black_box(output.triangle_count())
    })
  });
}

fn bench_scene_rebuild(c: &mut Criterion) {
  let mut world = ChunkWorld::new();
  let config = SceneConfig::default();

  c.bench_function("scene::rebuild (3³ chunks, default scene)", |b| {
    let mut time = 0.0f32;
    b.iter(|| {
      let mut frame = MeshOutput::new();
      time += 0.016;
      let stats = scene::rebuild(&mut world, &config, black_box(time), &mut frame);
      black_box(stats.triangles)
    })
  });
}

criterion_group!(benches, bench_polygonize_chunk, bench_scene_rebuild);
criterion_main!(benches);
