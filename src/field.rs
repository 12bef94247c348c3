//! Component E: field builder.
//!
//! For every cell, the visibility bitmask, `inner` flag, and
//! `(dx,dy,dz)` distances to the next shell voxel along +X/+Y/+Z, per
//! spec.md §4.E.

use crate::grid::Grid;
use crate::planes::PlaneBuckets;
use crate::shell::ShellVoxels;
use crate::types::{CellStatus, Distance, Distances, Visibility};

/// The per-cell status and distance arrays, dense over the whole grid.
pub struct Field {
  status: Vec<CellStatus>,
  distances: Vec<Distances>,
  dims: (u32, u32, u32),
}

/// Scan a sorted line bucket for the cell at coordinate `c`, returning
/// (positive-axis bit set, negative-axis bit set, resulting distance).
fn scan_line(line: &[u32], c: u32) -> (bool, bool, Distance) {
  let mut pos = false;
  let mut neg = false;
  let mut coincident = false;
  let mut min_delta: Option<u32> = None;

  for &v in line {
    match v.cmp(&c) {
      std::cmp::Ordering::Greater => {
        let delta = v - c;
        pos = true;
        min_delta = Some(min_delta.map_or(delta, |m| m.min(delta)));
      }
      std::cmp::Ordering::Less => neg = true,
      std::cmp::Ordering::Equal => coincident = true,
    }
  }

  let distance = if coincident {
    Distance::Coincident
  } else if let Some(d) = min_delta {
    Distance::ToShell(d)
  } else {
    Distance::Unknown
  };

  (pos, neg, distance)
}

impl Field {
  /// Build the field over every cell in `grid` from its plane buckets.
  #[tracing::instrument(skip_all, name = "field::build")]
  pub fn build(grid: &Grid, shell: &ShellVoxels, planes: &PlaneBuckets) -> Self {
    let (dx, dy, dz) = grid.dims;
    let total = grid.total_cells();
    let mut status = vec![CellStatus::default(); total];
    let mut distances = vec![Distances::default(); total];

    for z in 0..dz {
      for y in 0..dy {
        for x in 0..dx {
          let flat = grid.flatten(x, y, z);

          let (pos_x, neg_x, dist_x) = scan_line(planes.x_line(y, z), x);
          let (pos_y, neg_y, dist_y) = scan_line(planes.y_line(x, z), y);
          let (pos_z, neg_z, dist_z) = scan_line(planes.z_line(x, y), z);

          let mut visibility = Visibility::empty();
          visibility.set(Visibility::POS_X, pos_x);
          visibility.set(Visibility::NEG_X, neg_x);
          visibility.set(Visibility::POS_Y, pos_y);
          visibility.set(Visibility::NEG_Y, neg_y);
          visibility.set(Visibility::POS_Z, pos_z);
          visibility.set(Visibility::NEG_Z, neg_z);

          let has_meaningful_distance = |d: Distance| matches!(d, Distance::ToShell(_));
          let inner = !shell.contains(flat)
            && visibility == Visibility::ALL_AXES
            && has_meaningful_distance(dist_x)
            && has_meaningful_distance(dist_y)
            && has_meaningful_distance(dist_z);

          status[flat] = CellStatus {
            visibility,
            inner,
            clipped: false,
          };
          distances[flat] = Distances {
            dx: dist_x,
            dy: dist_y,
            dz: dist_z,
          };
        }
      }
    }

    tracing::debug!(
      inner_count = status.iter().filter(|s| s.inner).count(),
      "field built"
    );

    Self { status, distances, dims: grid.dims }
  }

  #[inline]
  pub fn status(&self, flat: usize) -> CellStatus {
    self.status[flat]
  }

  #[inline]
  pub fn status_mut(&mut self, flat: usize) -> &mut CellStatus {
    &mut self.status[flat]
  }

  #[inline]
  pub fn distances(&self, flat: usize) -> Distances {
    self.distances[flat]
  }

  #[inline]
  pub fn distances_mut(&mut self, flat: usize) -> &mut Distances {
    &mut self.distances[flat]
  }

  #[inline]
  pub fn dims(&self) -> (u32, u32, u32) {
    self.dims
  }

  /// Number of cells with `inner && !clipped` at the time of the call.
  pub fn active_count(&self) -> usize {
    self.status.iter().filter(|s| s.is_active()).count()
  }
}

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;
