//! Scene orchestration: animated CSG field placement and remeshing.
//!
//! Per frame, the builder resets every chunk, writes the time-varying
//! composed field into the chunks each primitive overlaps, then remeshes
//! whatever came out dirty:
//!
//! ```text
//! ┌───────┐     ┌───────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Reset ├────►│ Placement ├────►│ Remesh dirty ├────►│ TriangleSink │
//! └───────┘     └───────────┘     └──────────────┘     └──────────────┘
//!  grid=255      spheres+torus      rayon batch          renderer
//!  dirty=false   min-combine,       chunk order
//!                mark dirty
//! ```
//!
//! Rebuilds are eager and brute-force by contract; skipping placement
//! when primitives have not crossed a chunk boundary is an optimization
//! left to callers.

use std::f32::consts::TAU;

use glam::{Quat, Vec3};
use tracing::debug;
use web_time::Instant;

use crate::constants::{ACCEPT_WINDOW, VOXEL_SIZE};
use crate::field::{smooth_union, sphere_sdf, torus_sdf, DensityField};
use crate::mesher;
use crate::sampler::place_primitive;
use crate::types::TriangleSink;
use crate::world::ChunkWorld;

/// Parameters of the animated scene: N orbiting spheres smooth-unioned
/// with a rotating torus.
#[derive(Clone, Debug)]
pub struct SceneConfig {
  /// World-space center the primitives orbit around.
  pub center: Vec3,
  /// Number of orbiting spheres.
  pub sphere_count: usize,
  /// Radius of each sphere.
  pub sphere_radius: f32,
  /// Orbit extent around the center.
  pub orbit_radius: f32,
  /// Smooth-union blend factor (world units).
  pub smooth_k: f32,
  /// Torus ring radius.
  pub torus_major_radius: f32,
  /// Torus tube radius.
  pub torus_minor_radius: f32,
  /// Torus angular speed (radians per time unit).
  pub torus_spin: f32,
}

impl Default for SceneConfig {
  fn default() -> Self {
    Self {
      center: Vec3::splat(4.0),
      sphere_count: 6,
      sphere_radius: 1.6,
      orbit_radius: 5.0,
      smooth_k: 0.6,
      torus_major_radius: 4.5,
      torus_minor_radius: 1.1,
      torus_spin: 0.6,
    }
  }
}

impl SceneConfig {
  /// World-space center of sphere `i` at elapsed time `time`.
  ///
  /// Per-sphere axis rates and phases keep orbits out of lockstep while
  /// staying deterministic in `(i, time)`.
  pub fn sphere_center(&self, i: usize, time: f32) -> Vec3 {
    let phase = i as f32 * TAU / self.sphere_count.max(1) as f32;
    let speed = 0.5 + 0.13 * i as f32;
    self.center
      + Vec3::new(
        (time * speed + phase).sin(),
        (time * speed * 0.7 + phase * 1.3).cos(),
        (time * speed * 0.9 + phase * 0.6).sin(),
      ) * self.orbit_radius
  }

  /// Torus orientation at elapsed time `time`.
  pub fn torus_rotation(&self, time: f32) -> Quat {
    Quat::from_euler(
      glam::EulerRot::XYZ,
      time * self.torus_spin,
      time * self.torus_spin * 0.7,
      0.0,
    )
  }
}

/// The composed scene field frozen at one instant.
///
/// Sphere centers and the torus orientation are resolved at
/// construction, so `density` is deterministic per frame and cheap
/// enough to evaluate per lattice corner.
pub struct SceneField {
  spheres: Vec<Vec3>,
  sphere_radius: f32,
  smooth_k: f32,
  center: Vec3,
  torus_rotation: Quat,
  torus_major_radius: f32,
  torus_minor_radius: f32,
}

impl SceneField {
  pub fn new(config: &SceneConfig, time: f32) -> Self {
    let spheres = (0..config.sphere_count)
      .map(|i| config.sphere_center(i, time))
      .collect();
    Self {
      spheres,
      sphere_radius: config.sphere_radius,
      smooth_k: config.smooth_k,
      center: config.center,
      torus_rotation: config.torus_rotation(time),
      torus_major_radius: config.torus_major_radius,
      torus_minor_radius: config.torus_minor_radius,
    }
  }
}

impl DensityField for SceneField {
  fn density(&self, p: Vec3) -> f32 {
    // ACCEPT_WINDOW is a safe identity for the smooth-union fold: any
    // real distance inside the window replaces it outright.
    let mut d = ACCEPT_WINDOW;
    for &center in &self.spheres {
      d = smooth_union(sphere_sdf(p, center, self.sphere_radius), d, self.smooth_k);
    }
    let torus = torus_sdf(
      p,
      self.center,
      self.torus_rotation,
      self.torus_major_radius,
      self.torus_minor_radius,
    );
    smooth_union(d, torus, self.smooth_k)
  }
}

/// Per-rebuild statistics.
#[derive(Clone, Copy, Debug, Default)]
pub struct RebuildStats {
  /// Chunks marked dirty by placement this rebuild.
  pub chunks_dirty: usize,
  /// Triangles emitted into the sink.
  pub triangles: usize,
  /// Time spent resetting and placing primitives, microseconds.
  pub placement_us: u64,
  /// Time spent remeshing dirty chunks, microseconds.
  pub mesh_us: u64,
}

/// Rebuild the whole scene at elapsed time `time` into `sink`.
///
/// Resets every chunk, places the composed field through each
/// primitive's padded bounding box, remeshes dirty chunks in parallel,
/// and streams the triangles out in stable chunk order.
pub fn rebuild<S: TriangleSink>(
  world: &mut ChunkWorld,
  config: &SceneConfig,
  time: f32,
  sink: &mut S,
) -> RebuildStats {
  let placement_start = Instant::now();

  for chunk in world.chunks_mut() {
    chunk.reset();
  }

  let field = SceneField::new(config, time);

  // Placement pads each primitive's AABB by the blend factor plus one
  // cell so smooth fillets and interpolation never get clipped.
  let pad = config.smooth_k + VOXEL_SIZE;

  for i in 0..config.sphere_count {
    let center = config.sphere_center(i, time);
    let extent = Vec3::splat(config.sphere_radius + pad);
    place_primitive(world, &field, center - extent, center + extent);
  }

  // The torus rotates freely, so bound it by its outer radius on all axes.
  let torus_extent =
    Vec3::splat(config.torus_major_radius + config.torus_minor_radius + pad);
  place_primitive(
    world,
    &field,
    config.center - torus_extent,
    config.center + torus_extent,
  );

  let placement_us = placement_start.elapsed().as_micros() as u64;

  let mesh_start = Instant::now();
  let dirty = world.dirty_slots();
  let meshes = mesher::remesh_batch(world, &dirty);

  let mut triangles = 0;
  for mesh in &meshes {
    triangles += mesh.triangle_count();
    mesh.drain_into(sink);
  }
  for &slot in &dirty {
    world.chunk_mut(slot).clear_dirty();
  }
  let mesh_us = mesh_start.elapsed().as_micros() as u64;

  let stats = RebuildStats {
    chunks_dirty: dirty.len(),
    triangles,
    placement_us,
    mesh_us,
  };
  debug!(
    time,
    chunks_dirty = stats.chunks_dirty,
    triangles = stats.triangles,
    placement_us,
    mesh_us,
    "scene rebuilt"
  );
  stats
}

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;
