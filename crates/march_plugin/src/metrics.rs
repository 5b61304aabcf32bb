//! Engine-agnostic metrics collection for rebuild statistics.
//!
//! Feature-gated and runtime-toggled to ensure zero overhead when
//! disabled.
//!
//! # Usage
//!
//! ```ignore
//! use march_plugin::metrics::{RebuildMetrics, COLLECT_METRICS};
//!
//! // Compile with --features metrics
//! // Runtime toggle:
//! COLLECT_METRICS.store(false, Ordering::Relaxed);
//!
//! // Record a frame's rebuild:
//! metrics.record(&stats);
//! ```

use std::collections::VecDeque;
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;
use std::sync::atomic::AtomicBool;

use crate::scene::RebuildStats;

/// Runtime toggle for metrics collection.
/// Set to false to disable metrics gathering at runtime.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Check if metrics collection is enabled (both compile-time and runtime).
#[inline]
pub fn is_enabled() -> bool {
  #[cfg(feature = "metrics")]
  {
    COLLECT_METRICS.load(Ordering::Relaxed)
  }
  #[cfg(not(feature = "metrics"))]
  {
    false
  }
}

/// Rolling window for storing recent values (e.g., timing history).
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
  buffer: VecDeque<T>,
  capacity: usize,
}

impl<T> RollingWindow<T> {
  /// Create a new rolling window with the given capacity.
  pub fn new(capacity: usize) -> Self {
    Self {
      buffer: VecDeque::with_capacity(capacity),
      capacity,
    }
  }

  /// Push a new value, evicting the oldest if at capacity.
  pub fn push(&mut self, value: T) {
    if self.buffer.len() >= self.capacity {
      self.buffer.pop_front();
    }
    self.buffer.push_back(value);
  }

  /// Get the number of values in the window.
  pub fn len(&self) -> usize {
    self.buffer.len()
  }

  /// Check if the window is empty.
  pub fn is_empty(&self) -> bool {
    self.buffer.is_empty()
  }

  /// Clear all values.
  pub fn clear(&mut self) {
    self.buffer.clear();
  }

  /// Iterate over values (oldest to newest).
  pub fn iter(&self) -> impl Iterator<Item = &T> {
    self.buffer.iter()
  }

  /// Get the most recent value.
  pub fn last(&self) -> Option<&T> {
    self.buffer.back()
  }
}

impl RollingWindow<u64> {
  /// Compute the average of all values.
  pub fn average(&self) -> f64 {
    if self.buffer.is_empty() {
      0.0
    } else {
      self.buffer.iter().sum::<u64>() as f64 / self.buffer.len() as f64
    }
  }

  /// Get min and max values.
  pub fn min_max(&self) -> Option<(u64, u64)> {
    if self.buffer.is_empty() {
      None
    } else {
      let min = *self.buffer.iter().min().unwrap();
      let max = *self.buffer.iter().max().unwrap();
      Some((min, max))
    }
  }

  /// Median of all values (midpoint average for even counts).
  pub fn median(&self) -> u64 {
    if self.buffer.is_empty() {
      return 0;
    }
    let mut sorted: Vec<u64> = self.buffer.iter().copied().collect();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
      (sorted[mid - 1] + sorted[mid]) / 2
    } else {
      sorted[mid]
    }
  }
}

impl Default for RollingWindow<u64> {
  fn default() -> Self {
    Self::new(128) // ~2 seconds of history at 60fps
  }
}

/// Per-frame rebuild statistics accumulated over a session.
#[derive(Debug, Clone)]
pub struct RebuildMetrics {
  /// Rolling window of placement times in microseconds.
  pub placement_timings: RollingWindow<u64>,
  /// Rolling window of mesh times in microseconds.
  pub mesh_timings: RollingWindow<u64>,
  /// Rolling window of triangle counts.
  pub triangle_counts: RollingWindow<u64>,

  /// Last frame snapshot.
  pub last_chunks_dirty: usize,
  pub last_triangles: usize,
  /// Total rebuilds recorded this session.
  pub total_rebuilds: u64,
}

impl Default for RebuildMetrics {
  fn default() -> Self {
    Self {
      placement_timings: RollingWindow::new(128),
      mesh_timings: RollingWindow::new(128),
      triangle_counts: RollingWindow::new(128),
      last_chunks_dirty: 0,
      last_triangles: 0,
      total_rebuilds: 0,
    }
  }
}

impl RebuildMetrics {
  pub fn new() -> Self {
    Self::default()
  }

  /// Record one rebuild's statistics.
  pub fn record(&mut self, stats: &RebuildStats) {
    if !is_enabled() {
      return;
    }
    self.placement_timings.push(stats.placement_us);
    self.mesh_timings.push(stats.mesh_us);
    self.triangle_counts.push(stats.triangles as u64);
    self.last_chunks_dirty = stats.chunks_dirty;
    self.last_triangles = stats.triangles;
    self.total_rebuilds += 1;
  }

  /// Reset all windows and snapshots.
  pub fn reset(&mut self) {
    self.placement_timings.clear();
    self.mesh_timings.clear();
    self.triangle_counts.clear();
    self.last_chunks_dirty = 0;
    self.last_triangles = 0;
    // total_rebuilds is cumulative, keep it
  }
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;
