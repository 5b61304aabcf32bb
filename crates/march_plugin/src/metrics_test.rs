use super::*;

use crate::scene::RebuildStats;

#[test]
fn test_rolling_window_evicts_oldest_at_capacity() {
  let mut window: RollingWindow<u64> = RollingWindow::new(3);
  for v in 1..=5u64 {
    window.push(v);
  }
  assert_eq!(window.len(), 3);
  let values: Vec<u64> = window.iter().copied().collect();
  assert_eq!(values, vec![3, 4, 5]);
  assert_eq!(window.last(), Some(&5));
}

#[test]
fn test_rolling_window_clear() {
  let mut window: RollingWindow<u64> = RollingWindow::new(4);
  window.push(7);
  window.push(9);
  assert!(!window.is_empty());
  window.clear();
  assert!(window.is_empty());
  assert_eq!(window.len(), 0);
  assert_eq!(window.last(), None);
}

#[test]
fn test_rolling_window_average() {
  let mut window: RollingWindow<u64> = RollingWindow::new(8);
  assert_eq!(window.average(), 0.0);
  window.push(2);
  window.push(4);
  window.push(6);
  assert_eq!(window.average(), 4.0);
}

#[test]
fn test_rolling_window_min_max() {
  let mut window: RollingWindow<u64> = RollingWindow::new(8);
  assert_eq!(window.min_max(), None);
  window.push(12);
  window.push(3);
  window.push(40);
  assert_eq!(window.min_max(), Some((3, 40)));
}

#[test]
fn test_rolling_window_median_odd_count() {
  let mut window: RollingWindow<u64> = RollingWindow::new(8);
  window.push(5);
  window.push(1);
  window.push(3);
  assert_eq!(window.median(), 3);
}

#[test]
fn test_rolling_window_median_even_count_averages_midpoints() {
  let mut window: RollingWindow<u64> = RollingWindow::new(8);
  for v in [4, 1, 3, 2] {
    window.push(v);
  }
  assert_eq!(window.median(), 2); // (2 + 3) / 2, integer division

  let mut window: RollingWindow<u64> = RollingWindow::new(8);
  assert_eq!(window.median(), 0);
  window.push(10);
  window.push(20);
  assert_eq!(window.median(), 15);
}

fn stats(placement_us: u64, mesh_us: u64, chunks_dirty: usize, triangles: usize) -> RebuildStats {
  RebuildStats {
    chunks_dirty,
    triangles,
    placement_us,
    mesh_us,
  }
}

// Serializes tests that flip the global COLLECT_METRICS toggle.
#[cfg(feature = "metrics")]
static TOGGLE_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(feature = "metrics")]
#[test]
fn test_record_accumulates_and_honors_runtime_toggle() {
  use std::sync::atomic::Ordering;

  let _guard = TOGGLE_LOCK.lock().unwrap();
  COLLECT_METRICS.store(true, Ordering::Relaxed);
  let mut metrics = RebuildMetrics::new();

  metrics.record(&stats(100, 400, 5, 300));
  metrics.record(&stats(120, 380, 4, 290));
  assert_eq!(metrics.placement_timings.len(), 2);
  assert_eq!(metrics.mesh_timings.last(), Some(&380));
  assert_eq!(metrics.triangle_counts.last(), Some(&290));
  assert_eq!(metrics.last_chunks_dirty, 4);
  assert_eq!(metrics.last_triangles, 290);
  assert_eq!(metrics.total_rebuilds, 2);

  // Disabled at runtime: nothing moves.
  COLLECT_METRICS.store(false, Ordering::Relaxed);
  metrics.record(&stats(999, 999, 99, 9999));
  assert_eq!(metrics.total_rebuilds, 2);
  assert_eq!(metrics.last_triangles, 290);
  COLLECT_METRICS.store(true, Ordering::Relaxed);
}

#[cfg(feature = "metrics")]
#[test]
fn test_reset_clears_windows_but_keeps_rebuild_total() {
  use std::sync::atomic::Ordering;

  let _guard = TOGGLE_LOCK.lock().unwrap();
  COLLECT_METRICS.store(true, Ordering::Relaxed);
  let mut metrics = RebuildMetrics::new();
  metrics.record(&stats(50, 200, 3, 120));
  metrics.record(&stats(60, 210, 3, 130));

  metrics.reset();
  assert!(metrics.placement_timings.is_empty());
  assert!(metrics.mesh_timings.is_empty());
  assert!(metrics.triangle_counts.is_empty());
  assert_eq!(metrics.last_chunks_dirty, 0);
  assert_eq!(metrics.last_triangles, 0);
  assert_eq!(metrics.total_rebuilds, 2);
}

#[cfg(not(feature = "metrics"))]
#[test]
fn test_record_is_inert_without_the_feature() {
  let mut metrics = RebuildMetrics::new();
  metrics.record(&stats(100, 400, 5, 300));
  assert!(metrics.mesh_timings.is_empty());
  assert_eq!(metrics.total_rebuilds, 0);
  assert_eq!(metrics.last_triangles, 0);
}
