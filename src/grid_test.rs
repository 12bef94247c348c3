use super::*;
use approx::assert_relative_eq;

#[test]
fn unit_cube_voxel_one_gives_3_cubed_grid() {
  let grid = Grid::new(Vec3::ZERO, Vec3::ONE, 1.0);
  assert_eq!(grid.dims, (3, 3, 3));
  assert_relative_eq!(grid.origin, Vec3::splat(-1.0));
  // Cell (1,1,1) should be exactly the original cube.
  assert_relative_eq!(grid.cell_min(1, 1, 1), Vec3::ZERO);
  assert_relative_eq!(grid.cell_min(2, 2, 2), Vec3::ONE);
}

#[test]
fn unit_cube_voxel_half_gives_4_cubed_grid() {
  let grid = Grid::new(Vec3::ZERO, Vec3::ONE, 0.5);
  assert_eq!(grid.dims, (4, 4, 4));
  assert_relative_eq!(grid.origin, Vec3::splat(-0.5));
}

#[test]
fn flatten_unflatten_roundtrip_across_full_grid() {
  let grid = Grid::new(Vec3::ZERO, Vec3::new(2.0, 3.0, 1.0), 0.5);
  for idx in 0..grid.total_cells() {
    let (x, y, z) = grid.unflatten(idx);
    assert_eq!(grid.flatten(x, y, z), idx);
  }
}

#[test]
fn cell_center_is_midpoint_of_cell_bounds() {
  let grid = Grid::new(Vec3::ZERO, Vec3::ONE, 1.0);
  let center = grid.cell_center(1, 1, 1);
  assert_relative_eq!(center, Vec3::splat(0.5));
}

#[test]
fn clamp_to_cell_saturates_at_grid_edges() {
  let grid = Grid::new(Vec3::ZERO, Vec3::ONE, 1.0);
  assert_eq!(grid.clamp_to_cell(Vec3::splat(-100.0)), (0, 0, 0));
  assert_eq!(grid.clamp_to_cell(Vec3::splat(100.0)), (2, 2, 2));
}
