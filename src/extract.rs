//! Component H: greedy extractor.
//!
//! Repeatedly picks the globally max-volume extent, clips it, refreshes
//! the field, and repeats until the fill target is met or the interior
//! is exhausted, per spec.md §4.H.

use crate::extent_search;
use crate::field::Field;
use crate::grid::Grid;
use crate::types::{Distance, Extent};

/// Run the greedy extraction loop, returning the emitted extents in
/// selection order.
#[tracing::instrument(skip_all, name = "extract::run")]
pub fn extract(grid: &Grid, field: &mut Field, fill_pct: f32) -> Vec<Extent> {
  let total_interior_volume = field.active_count() as f64;
  let mut extents = Vec::new();

  if total_interior_volume == 0.0 {
    return extents;
  }

  let mut cumulative_fill = 0.0f64;
  let (dimx, dimy, dimz) = grid.dims;

  loop {
    let mut best: Option<Extent> = None;
    let mut best_volume: u64 = 0;

    for z in 0..dimz {
      for y in 0..dimy {
        for x in 0..dimx {
          let flat = grid.flatten(x, y, z);
          if !field.status(flat).is_active() {
            continue;
          }
          let candidate = extent_search::search(grid, field, x, y, z);
          if candidate.volume() > best_volume {
            best_volume = candidate.volume();
            best = Some(candidate);
          }
        }
      }
    }

    let Some(best) = best else { break };
    if best_volume == 0 {
      break;
    }

    clip(grid, field, best);
    refresh_distances(grid, field, best);

    cumulative_fill += best.volume() as f64 / total_interior_volume;
    extents.push(best);

    tracing::debug!(
      position = ?best.position,
      extent = ?best.extent,
      volume = best.volume(),
      cumulative_fill,
      "extent emitted"
    );

    if cumulative_fill >= fill_pct as f64 || field.active_count() == 0 {
      break;
    }
  }

  extents
}

fn clip(grid: &Grid, field: &mut Field, best: Extent) {
  for (x, y, z) in best.iter_cells() {
    let flat = grid.flatten(x, y, z);
    let status = field.status_mut(flat);
    debug_assert!(!status.clipped, "cell clipped twice by overlapping extents");
    status.clipped = true;
  }
}

fn refresh_distances(grid: &Grid, field: &mut Field, best: Extent) {
  let (bx, by, bz) = best.position;
  let (ex, ey, ez) = best.extent;

  // X axis: cells strictly before best.x, within best's Y/Z slab.
  for z in bz..bz + ez {
    for y in by..by + ey {
      for x in 0..bx {
        let flat = grid.flatten(x, y, z);
        if !field.status(flat).is_active() {
          continue;
        }
        let cap = bx - x;
        if let Distance::ToShell(d) = &mut field.distances_mut(flat).dx {
          *d = (*d).min(cap);
        }
      }
    }
  }

  // Y axis: cells strictly before best.y, within best's X/Z slab.
  for z in bz..bz + ez {
    for x in bx..bx + ex {
      for y in 0..by {
        let flat = grid.flatten(x, y, z);
        if !field.status(flat).is_active() {
          continue;
        }
        let cap = by - y;
        if let Distance::ToShell(d) = &mut field.distances_mut(flat).dy {
          *d = (*d).min(cap);
        }
      }
    }
  }

  // Z axis: cells strictly before best.z, within best's X/Y slab.
  for y in by..by + ey {
    for x in bx..bx + ex {
      for z in 0..bz {
        let flat = grid.flatten(x, y, z);
        if !field.status(flat).is_active() {
          continue;
        }
        let cap = bz - z;
        if let Distance::ToShell(d) = &mut field.distances_mut(flat).dz {
          *d = (*d).min(cap);
        }
      }
    }
  }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod extract_test;
