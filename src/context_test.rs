use super::*;
use crate::flags::BoxTypeFlags;
use crate::test_fixtures::{box_mesh, open_box_mesh, two_cubes_mesh};

#[test]
fn solid_cube_at_fine_resolution_produces_a_closed_occluder() {
  let mesh = box_mesh([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
  let params = OccluderParams::new(0.1, 1.0, BoxTypeFlags::REGULAR);
  let result = generate_occluder(&mesh, &params).expect("watertight cube must succeed");

  assert!(!result.occluder.vertices.is_empty());
  assert_eq!(result.occluder.indices.len() % 3, 0);
}

#[test]
fn two_disjoint_cubes_yield_two_extents() {
  let mesh = two_cubes_mesh();
  let params = OccluderParams::new(0.5, 1.0, BoxTypeFlags::REGULAR);
  let result = generate_occluder(&mesh, &params).expect("two disjoint cubes must succeed");

  // Each closed box contributes exactly 8 vertices; two disjoint solid
  // cubes with nothing in between collapse to a single max extent each.
  assert_eq!(result.occluder.vertices.len() % 8, 0);
  assert!(result.occluder.vertices.len() >= 16);
}

#[test]
fn open_cube_fails_watertightness() {
  let mesh = open_box_mesh([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
  let params = OccluderParams::new(1.0, 1.0, BoxTypeFlags::REGULAR);
  let result = generate_occluder(&mesh, &params);

  assert_eq!(result, Err(OccluderError::NotWatertight));
}

#[test]
fn generation_is_deterministic() {
  let mesh = box_mesh([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
  let params = OccluderParams::new(0.1, 1.0, BoxTypeFlags::REGULAR);

  let a = generate_occluder(&mesh, &params).unwrap();
  let b = generate_occluder(&mesh, &params).unwrap();

  assert_eq!(a.occluder.vertices, b.occluder.vertices);
  assert_eq!(a.occluder.indices, b.occluder.indices);
}

#[test]
fn diagonals_and_face_flags_are_mutually_exclusive() {
  let invalid = BoxTypeFlags::SIDES | BoxTypeFlags::DIAGONALS;
  assert!(!invalid.validate());
}

#[test]
#[should_panic]
fn nonzero_canary_panics() {
  let mesh = box_mesh([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
  let mut params = OccluderParams::new(0.5, 1.0, BoxTypeFlags::REGULAR);
  params._reserved = 1;
  let _ = generate_occluder(&mesh, &params);
}
