//! Component C: shell voxelizer.
//!
//! Marks every grid cell intersected by at least one input triangle,
//! per spec.md §4.C.

use crate::grid::Grid;
use crate::sat::triangle_intersects_box;
use crate::types::Mesh;

/// Relative slack (in cells) for deciding a triangle's flat extent along
/// an axis sits exactly on a grid line, rather than merely near one.
const BOUNDARY_EPSILON: f32 = 1.0e-4;

/// Candidate cell index range for one axis of a triangle's AABB.
///
/// A triangle that's flat along this axis (its plane is perpendicular to
/// it, e.g. one face of an axis-aligned box) with a coordinate sitting
/// exactly on a grid line is ambiguous: naively flooring always resolves
/// it to the cell on the positive side of that line. For a face whose
/// outward normal points in the *negative* direction that's the wrong
/// side — it claims the solid's own interior cell as a shell voxel
/// instead of the cell outside it. Resolve the ambiguity by assigning
/// the face to the single neighbor its normal points into; away from an
/// exact grid line, fall back to the ordinary floor-based range.
fn axis_candidate_range(
  min_c: f32,
  max_c: f32,
  normal_c: f32,
  origin_c: f32,
  voxel_size: f32,
  dim: u32,
) -> (u32, u32) {
  let clamp = |v: f32| (v.max(0.0) as u32).min(dim.saturating_sub(1));

  let rel_min = (min_c - origin_c) / voxel_size;
  let rel_max = (max_c - origin_c) / voxel_size;

  if (rel_max - rel_min).abs() < BOUNDARY_EPSILON {
    let rounded = rel_min.round();
    if (rel_min - rounded).abs() < BOUNDARY_EPSILON {
      let idx = if normal_c < 0.0 { rounded - 1.0 } else { rounded };
      let idx = clamp(idx);
      return (idx, idx);
    }
  }

  (clamp(rel_min.floor()), clamp(rel_max.floor()))
}

/// The shell voxel set `V`: cells intersected by at least one triangle,
/// plus the dense `cell -> position in V` lookup table.
pub struct ShellVoxels {
  /// Flattened cell indices, in discovery order.
  cells: Vec<usize>,
  /// `membership[flat_index]` is `Some(position in cells)` for shell
  /// voxels, `None` ("⊥") otherwise.
  membership: Vec<Option<u32>>,
}

impl ShellVoxels {
  /// Voxelize every triangle of `mesh` against `grid`.
  #[tracing::instrument(skip_all, name = "shell::build")]
  pub fn build(grid: &Grid, mesh: &Mesh) -> Self {
    let mut cells = Vec::new();
    let mut membership = vec![None; grid.total_cells()];
    let half_size = grid.cell_half_size();

    for tri_idx in 0..mesh.triangle_count() {
      let tri = mesh.triangle(tri_idx);

      let aabb_min = tri[0].min(tri[1]).min(tri[2]);
      let aabb_max = tri[0].max(tri[1]).max(tri[2]);
      let normal = (tri[1] - tri[0]).cross(tri[2] - tri[1]);

      let (min_x, max_x) = axis_candidate_range(
        aabb_min.x, aabb_max.x, normal.x, grid.origin.x, grid.voxel_size, grid.dims.0,
      );
      let (min_y, max_y) = axis_candidate_range(
        aabb_min.y, aabb_max.y, normal.y, grid.origin.y, grid.voxel_size, grid.dims.1,
      );
      let (min_z, max_z) = axis_candidate_range(
        aabb_min.z, aabb_max.z, normal.z, grid.origin.z, grid.voxel_size, grid.dims.2,
      );

      for x in min_x..=max_x {
        for y in min_y..=max_y {
          for z in min_z..=max_z {
            let flat = grid.flatten(x, y, z);
            if membership[flat].is_some() {
              continue;
            }
            let center = grid.cell_center(x, y, z);
            if triangle_intersects_box(tri, center, half_size) {
              membership[flat] = Some(cells.len() as u32);
              cells.push(flat);
            }
          }
        }
      }
    }

    tracing::debug!(shell_voxel_count = cells.len(), "shell voxelization complete");

    Self { cells, membership }
  }

  /// Number of distinct shell voxels.
  #[inline]
  pub fn len(&self) -> usize {
    self.cells.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }

  /// True if the cell at flattened index `flat` is a shell voxel.
  #[inline]
  pub fn contains(&self, flat: usize) -> bool {
    self.membership[flat].is_some()
  }

  /// Iterate shell voxels in discovery order.
  pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
    self.cells.iter().copied()
  }
}

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;
