//! Component A: grid geometry.
//!
//! Computes the voxel grid's origin and dimensions from a mesh AABB and
//! voxel size, per spec.md §4.A, and provides the cell ↔ linear-index
//! mapping used by every other component.

use glam::Vec3;

use crate::constants;

/// A uniform cubic lattice covering a mesh AABB, padded outward by one
/// voxel on each face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
  /// Min corner of cell `(0, 0, 0)`.
  pub origin: Vec3,
  /// Voxel edge length.
  pub voxel_size: f32,
  /// Grid dimensions `(Dx, Dy, Dz)` in cells.
  pub dims: (u32, u32, u32),
}

/// Relative nudge applied before flooring/ceiling, guarding against a
/// bound that floating-point error placed a hair on the wrong side of
/// an otherwise-exact grid line (e.g. `0.9999999` instead of `1.0`).
const SNAP_EPSILON: f64 = 1.0e-6;

/// Snap `m` down (floor) to the enclosing grid line.
fn snap_min(m: f64, s: f64) -> f64 {
  s * ((m / s) + SNAP_EPSILON).floor()
}

/// Snap `M` up (ceil) to the enclosing grid line.
fn snap_max(m: f64, s: f64) -> f64 {
  s * ((m / s) - SNAP_EPSILON).ceil()
}

impl Grid {
  /// Build the grid covering `[aabb_min, aabb_max]` with the given
  /// voxel size, padded one voxel outward on every face.
  ///
  /// # Panics
  ///
  /// Debug-asserts `voxel_size > 0` and that the resulting dimensions
  /// fit within [`constants::MAX_GRID_AXIS`] (spec.md §7: `volume` must
  /// fit `u32`).
  pub fn new(aabb_min: Vec3, aabb_max: Vec3, voxel_size: f32) -> Self {
    debug_assert!(voxel_size > 0.0, "voxel_size must be positive");

    let s = voxel_size as f64;
    let mut origin = [0.0f32; 3];
    let mut dims = [0u32; 3];

    for axis in 0..3 {
      let m = aabb_min[axis] as f64;
      let mx = aabb_max[axis] as f64;

      let snapped_min = snap_min(m, s) - s;
      let snapped_max = snap_max(mx, s) + s;

      let axis_dim = ((snapped_max - snapped_min) / s).floor();
      debug_assert!(axis_dim >= 1.0, "grid axis collapsed to zero cells");
      debug_assert!(
        axis_dim <= constants::MAX_GRID_AXIS as f64,
        "grid axis {axis_dim} exceeds MAX_GRID_AXIS"
      );

      origin[axis] = snapped_min as f32;
      dims[axis] = axis_dim as u32;
    }

    Self {
      origin: Vec3::from(origin),
      voxel_size,
      dims: (dims[0], dims[1], dims[2]),
    }
  }

  /// Total number of cells in the grid.
  #[inline]
  pub fn total_cells(&self) -> usize {
    self.dims.0 as usize * self.dims.1 as usize * self.dims.2 as usize
  }

  /// True if `(x, y, z)` is within grid bounds.
  #[inline]
  pub fn in_bounds(&self, x: i64, y: i64, z: i64) -> bool {
    x >= 0
      && y >= 0
      && z >= 0
      && (x as u32) < self.dims.0
      && (y as u32) < self.dims.1
      && (z as u32) < self.dims.2
  }

  /// Flatten `(x, y, z)` into a linear cell index (x-fastest).
  #[inline]
  pub fn flatten(&self, x: u32, y: u32, z: u32) -> usize {
    debug_assert!(x < self.dims.0 && y < self.dims.1 && z < self.dims.2);
    constants::coord_to_index(x, y, z, self.dims)
  }

  /// Inverse of [`Self::flatten`].
  #[inline]
  pub fn unflatten(&self, index: usize) -> (u32, u32, u32) {
    constants::index_to_coord(index, self.dims)
  }

  /// World-space min corner of cell `(x, y, z)`.
  #[inline]
  pub fn cell_min(&self, x: u32, y: u32, z: u32) -> Vec3 {
    self.origin + Vec3::new(x as f32, y as f32, z as f32) * self.voxel_size
  }

  /// World-space center of cell `(x, y, z)`.
  #[inline]
  pub fn cell_center(&self, x: u32, y: u32, z: u32) -> Vec3 {
    self.cell_min(x, y, z) + Vec3::splat(self.voxel_size * 0.5)
  }

  /// Half-extent of every cell (`voxel_size / 2` on all axes).
  #[inline]
  pub fn cell_half_size(&self) -> Vec3 {
    Vec3::splat(self.voxel_size * 0.5)
  }

  /// Cell coordinate containing world-space point `p`, clamped into
  /// grid bounds.
  pub fn clamp_to_cell(&self, p: Vec3) -> (u32, u32, u32) {
    let rel = (p - self.origin) / self.voxel_size;
    let clamp_axis = |v: f32, max: u32| (v.floor().max(0.0) as u32).min(max.saturating_sub(1));
    (
      clamp_axis(rel.x, self.dims.0),
      clamp_axis(rel.y, self.dims.1),
      clamp_axis(rel.z, self.dims.2),
    )
  }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
