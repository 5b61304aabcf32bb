//! Animated marching-cubes demo.
//!
//! Drives the default scene for a fixed number of frames and writes each
//! frame's triangle stream as a Wavefront OBJ file, standing in for the
//! renderer sink. Usage:
//!
//! ```text
//! march_demo_app [out_dir] [frames]
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use glam::Vec3;
use march_plugin::metrics::RebuildMetrics;
use march_plugin::scene;
use march_plugin::types::TriangleSink;
use march_plugin::{ChunkWorld, SceneConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Frame timestep in scene-time units (60 fps equivalent).
const FRAME_DT: f32 = 1.0 / 60.0;

/// Streams triangles into an OBJ writer.
///
/// Vertex colors use the common `v x y z r g b` extension; faces are
/// emitted on `finish` so winding survives verbatim.
struct ObjSink<W: Write> {
  writer: W,
  vertices_written: usize,
  // push_vertex cannot return errors through TriangleSink, so the
  // first failure is held here and surfaced by finish().
  write_error: Option<std::io::Error>,
}

impl ObjSink<BufWriter<File>> {
  fn create(path: &Path) -> anyhow::Result<Self> {
    let file =
      File::create(path).with_context(|| format!("creating {}", path.display()))?;
    Ok(Self::new(BufWriter::new(file)))
  }
}

impl<W: Write> ObjSink<W> {
  fn new(writer: W) -> Self {
    Self {
      writer,
      vertices_written: 0,
      write_error: None,
    }
  }

  fn finish(mut self) -> anyhow::Result<usize> {
    if let Some(err) = self.write_error.take() {
      return Err(err).context("writing vertex stream");
    }
    // One face per vertex triple, in push order
    for face in (0..self.vertices_written).step_by(3) {
      writeln!(self.writer, "f {} {} {}", face + 1, face + 2, face + 3)?;
    }
    self.writer.flush()?;
    Ok(self.vertices_written / 3)
  }
}

impl<W: Write> TriangleSink for ObjSink<W> {
  fn push_vertex(&mut self, position: Vec3, color: [u8; 4]) {
    if self.write_error.is_some() {
      return;
    }
    let [r, g, b, _] = color;
    if let Err(err) = writeln!(
      self.writer,
      "v {} {} {} {:.4} {:.4} {:.4}",
      position.x,
      position.y,
      position.z,
      r as f32 / 255.0,
      g as f32 / 255.0,
      b as f32 / 255.0
    ) {
      self.write_error = Some(err);
    }
    self.vertices_written += 1;
  }
}

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let mut args = std::env::args().skip(1);
  let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "obj_out".into()));
  let frames: usize = match args.next() {
    Some(raw) => raw.parse().context("frame count must be an integer")?,
    None => 120,
  };

  std::fs::create_dir_all(&out_dir)
    .with_context(|| format!("creating output directory {}", out_dir.display()))?;

  let mut world = ChunkWorld::new();
  let config = SceneConfig::default();
  let mut metrics = RebuildMetrics::new();

  info!(frames, out_dir = %out_dir.display(), "starting scene playback");

  for frame in 0..frames {
    let time = frame as f32 * FRAME_DT;
    let path = out_dir.join(format!("frame_{frame:04}.obj"));

    let mut sink = ObjSink::create(&path)?;
    let stats = scene::rebuild(&mut world, &config, time, &mut sink);
    let triangles = sink.finish()?;
    metrics.record(&stats);

    info!(
      frame,
      time,
      triangles,
      chunks_dirty = stats.chunks_dirty,
      placement_us = stats.placement_us,
      mesh_us = stats.mesh_us,
      "frame written"
    );
  }

  if let Some((min, max)) = metrics.mesh_timings.min_max() {
    info!(
      rebuilds = metrics.total_rebuilds,
      mesh_us_min = min,
      mesh_us_max = max,
      mesh_us_avg = metrics.mesh_timings.average(),
      "playback finished"
    );
  }

  Ok(())
}
