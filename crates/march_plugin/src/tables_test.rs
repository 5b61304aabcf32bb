use super::*;

#[test]
fn test_homogeneous_configurations_cross_no_edges() {
  assert_eq!(EDGE_TABLE[0], 0);
  assert_eq!(EDGE_TABLE[255], 0);
  assert_eq!(TRI_TABLE[0][0], -1);
  assert_eq!(TRI_TABLE[255][0], -1);
}

#[test]
fn test_edge_table_is_complement_symmetric() {
  // Inverting inside/outside flips no crossings
  for i in 0..256 {
    assert_eq!(EDGE_TABLE[i], EDGE_TABLE[255 - i], "config {}", i);
  }
}

#[test]
fn test_corner_offsets_are_distinct_unit_cube_corners() {
  for (i, a) in CORNER_OFFSETS.iter().enumerate() {
    assert!(a.iter().all(|&c| c <= 1));
    for b in CORNER_OFFSETS.iter().skip(i + 1) {
      assert_ne!(a, b);
    }
  }
}

#[test]
fn test_edges_connect_adjacent_corners() {
  for (e, connection) in EDGE_CONNECTIONS.iter().enumerate() {
    let a = CORNER_OFFSETS[connection[0]];
    let b = CORNER_OFFSETS[connection[1]];
    let manhattan: usize =
      (0..3).map(|i| a[i].abs_diff(b[i])).sum();
    assert_eq!(manhattan, 1, "edge {} does not span a cube edge", e);
  }
}

#[test]
fn test_edge_directions_match_corner_offsets() {
  for (e, connection) in EDGE_CONNECTIONS.iter().enumerate() {
    let a = CORNER_OFFSETS[connection[0]];
    let b = CORNER_OFFSETS[connection[1]];
    for axis in 0..3 {
      let expected = b[axis] as f32 - a[axis] as f32;
      assert_eq!(
        EDGE_DIRECTIONS[e][axis], expected,
        "edge {} axis {}",
        e, axis
      );
    }
  }
}

#[test]
fn test_edge_directions_are_axis_aligned_units() {
  for (e, dir) in EDGE_DIRECTIONS.iter().enumerate() {
    let len_sq: f32 = dir.iter().map(|c| c * c).sum();
    assert_eq!(len_sq, 1.0, "edge {} is not unit length", e);
    assert_eq!(
      dir.iter().filter(|&&c| c != 0.0).count(),
      1,
      "edge {} is not axis aligned",
      e
    );
  }
}

#[test]
fn test_tri_table_rows_terminate_and_triangulate() {
  for (config, row) in TRI_TABLE.iter().enumerate() {
    let len = row.iter().position(|&v| v == -1).unwrap_or_else(|| {
      panic!("config {} has no terminator", config);
    });
    assert_eq!(len % 3, 0, "config {} has partial triangle", config);
    assert!(len <= 15, "config {} exceeds 5 triangles", config);
    // Nothing after the terminator
    assert!(row[len..].iter().all(|&v| v == -1), "config {}", config);
  }
}

#[test]
fn test_tri_table_uses_only_crossed_edges() {
  for (config, row) in TRI_TABLE.iter().enumerate() {
    for &entry in row.iter().take_while(|&&v| v != -1) {
      let edge = entry as usize;
      assert!(edge < 12, "config {} references edge {}", config, edge);
      assert_ne!(
        EDGE_TABLE[config] & (1 << edge),
        0,
        "config {} triangulates uncrossed edge {}",
        config,
        edge
      );
    }
  }
}

#[test]
fn test_crossed_edges_separate_inside_from_outside() {
  for config in 0..256usize {
    for (e, connection) in EDGE_CONNECTIONS.iter().enumerate() {
      let inside0 = config & (1 << connection[0]) != 0;
      let inside1 = config & (1 << connection[1]) != 0;
      let crossed = EDGE_TABLE[config] & (1 << e) != 0;
      assert_eq!(
        crossed,
        inside0 != inside1,
        "config {} edge {}",
        config,
        e
      );
    }
  }
}
