//! Component F: watertightness check.
//!
//! Sanity gate verifying that every active cell's three positive runs
//! remain active, per spec.md §4.F. Subsequent extent search assumes
//! these runs are solid; a hole in the shell would let a run overshoot
//! a genuine exterior gap and produce an occluder that protrudes
//! outside the mesh.
//!
//! The positive-run check alone only fires once a cell has already
//! qualified as active (all six [`Visibility`] bits set), which can
//! never happen for a hole wide enough that no cell keeps a bounded run
//! on both sides of some axis — the interior shrinks to zero active
//! cells and the loop below never runs. A second, independent pass
//! catches that case directly: a non-shell cell enclosed on exactly five
//! of its six sides is a cell that would be interior but for a single
//! direction escaping to infinity, which is the signature of a leak
//! rather than the cell simply being outside the shape altogether.

use crate::error::OccluderError;
use crate::field::Field;
use crate::grid::Grid;
use crate::shell::ShellVoxels;
use crate::types::Distance;

/// Verify the interior-run property over every active cell, plus the
/// both-sided-enclosure property over every non-shell cell.
#[tracing::instrument(skip_all, name = "watertight::check")]
pub fn check(grid: &Grid, shell: &ShellVoxels, field: &Field) -> Result<(), OccluderError> {
  let (dx, dy, dz) = grid.dims;

  for z in 0..dz {
    for y in 0..dy {
      for x in 0..dx {
        let flat = grid.flatten(x, y, z);
        let status = field.status(flat);

        if !shell.contains(flat) && status.visibility.bits().count_ones() == 5 {
          return Err(OccluderError::NotWatertight);
        }

        if !status.is_active() {
          continue;
        }
        let distances = field.distances(flat);

        if let Distance::ToShell(run) = distances.dx {
          for k in 1..run {
            let probe = grid.flatten(x + k, y, z);
            if !field.status(probe).is_active() {
              return Err(OccluderError::NotWatertight);
            }
          }
        }
        if let Distance::ToShell(run) = distances.dy {
          for k in 1..run {
            let probe = grid.flatten(x, y + k, z);
            if !field.status(probe).is_active() {
              return Err(OccluderError::NotWatertight);
            }
          }
        }
        if let Distance::ToShell(run) = distances.dz {
          for k in 1..run {
            let probe = grid.flatten(x, y, z + k);
            if !field.status(probe).is_active() {
              return Err(OccluderError::NotWatertight);
            }
          }
        }
      }
    }
  }

  Ok(())
}

#[cfg(test)]
#[path = "watertight_test.rs"]
mod watertight_test;
