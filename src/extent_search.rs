//! Component G: anchor-local maximum extent search.
//!
//! Given an active anchor cell, finds the largest axis-aligned box of
//! active cells having the anchor as its min corner, per spec.md §4.G.

use crate::field::Field;
use crate::grid::Grid;
use crate::types::{Distance, Extent};

/// Find the maximum-volume extent anchored at `(ax, ay, az)`.
///
/// The anchor must be an active cell with all three distances in
/// [`Distance::ToShell`] form; callers only invoke this for cells
/// already known active.
pub fn search(grid: &Grid, field: &Field, ax: u32, ay: u32, az: u32) -> Extent {
  let anchor_flat = grid.flatten(ax, ay, az);
  let anchor_distances = field.distances(anchor_flat);

  let dx_a = run_len(anchor_distances.dx);
  let dy_a = run_len(anchor_distances.dy);
  let dz_a = run_len(anchor_distances.dz);

  if dx_a == 0 || dy_a == 0 || dz_a == 0 {
    return Extent::new((ax, ay, az), (0, 0, 0));
  }

  // Per-slab (ex, ey) caps, one per z offset in [0, dz_a).
  let mut slabs: Vec<(u32, u32)> = Vec::with_capacity(dz_a as usize);

  for s in 0..dz_a {
    let z = az + s;
    let mut ex = dx_a;
    let mut ey = dy_a;

    let mut i = 1;
    loop {
      if ax + i >= ax + dx_a || ay + i >= ay + dy_a {
        break;
      }
      let flat = grid.flatten(ax + i, ay + i, z);
      let status = field.status(flat);
      if status.is_active() {
        let d = field.distances(flat);
        ex = ex.min(run_len(d.dx) + i);
        ey = ey.min(run_len(d.dy) + i);
        i += 1;
      } else {
        ex = i;
        ey = i;
        break;
      }
    }

    slabs.push((ex, ey));
  }

  // Combine slabs: running componentwise min, first-maximum-wins on volume.
  let mut running_mx = u32::MAX;
  let mut running_my = u32::MAX;
  let mut best_volume: u64 = 0;
  let mut best: (u32, u32, u32) = (0, 0, 0);

  for (k, &(ex, ey)) in slabs.iter().enumerate() {
    running_mx = running_mx.min(ex);
    running_my = running_my.min(ey);
    let k = k as u32 + 1;
    let volume = running_mx as u64 * running_my as u64 * k as u64;
    if volume > best_volume {
      best_volume = volume;
      best = (running_mx, running_my, k);
    }
  }

  Extent::new((ax, ay, az), best)
}

#[inline]
fn run_len(d: Distance) -> u32 {
  d.run_len().unwrap_or(0)
}

#[cfg(test)]
#[path = "extent_search_test.rs"]
mod extent_search_test;
