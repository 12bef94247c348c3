//! Component D: plane-bucket builder.
//!
//! For every grid line parallel to an axis, the sorted list of shell
//! voxels it contains, per spec.md §4.D.

use crate::grid::Grid;
use crate::shell::ShellVoxels;

/// Three families of per-line shell-voxel buckets, one per axis.
pub struct PlaneBuckets {
  /// `x[(y, z)]`: shell voxels on line `(·, y, z)`, sorted by `x`.
  x: Vec<Vec<u32>>,
  /// `y[(x, z)]`: shell voxels on line `(x, ·, z)`, sorted by `y`.
  y: Vec<Vec<u32>>,
  /// `z[(x, y)]`: shell voxels on line `(x, y, ·)`, sorted by `z`.
  z: Vec<Vec<u32>>,
  dims: (u32, u32, u32),
}

impl PlaneBuckets {
  /// Build all three bucket families from the grid's shell voxel set.
  ///
  /// Walks cells in linear (flattened) order rather than shell
  /// discovery order: since the flatten is x-fastest, this visits every
  /// line's cells with a monotonically increasing coordinate on that
  /// line's axis, so each bucket's insertion order comes out already
  /// sorted and must not be reshuffled afterwards.
  #[tracing::instrument(skip_all, name = "planes::build")]
  pub fn build(grid: &Grid, shell: &ShellVoxels) -> Self {
    let (dx, dy, dz) = grid.dims;
    let mut x = vec![Vec::new(); (dy as usize) * (dz as usize)];
    let mut y = vec![Vec::new(); (dx as usize) * (dz as usize)];
    let mut z = vec![Vec::new(); (dx as usize) * (dy as usize)];

    for flat in 0..grid.total_cells() {
      if !shell.contains(flat) {
        continue;
      }
      let (cx, cy, cz) = grid.unflatten(flat);

      x[Self::x_line_index(cy, cz, dy)].push(cx);
      y[Self::y_line_index(cx, cz, dx)].push(cy);
      z[Self::z_line_index(cx, cy, dx)].push(cz);
    }

    tracing::debug!(
      shell_voxel_count = shell.len(),
      "plane buckets populated"
    );

    Self { x, y, z, dims: grid.dims }
  }

  #[inline]
  fn x_line_index(y: u32, z: u32, dy: u32) -> usize {
    y as usize + dy as usize * z as usize
  }

  #[inline]
  fn y_line_index(x: u32, z: u32, dx: u32) -> usize {
    x as usize + dx as usize * z as usize
  }

  #[inline]
  fn z_line_index(x: u32, y: u32, dx: u32) -> usize {
    x as usize + dx as usize * y as usize
  }

  /// Shell voxels on the X line through `(·, y, z)`, sorted by x.
  pub fn x_line(&self, y: u32, z: u32) -> &[u32] {
    &self.x[Self::x_line_index(y, z, self.dims.1)]
  }

  /// Shell voxels on the Y line through `(x, ·, z)`, sorted by y.
  pub fn y_line(&self, x: u32, z: u32) -> &[u32] {
    &self.y[Self::y_line_index(x, z, self.dims.0)]
  }

  /// Shell voxels on the Z line through `(x, y, ·)`, sorted by z.
  pub fn z_line(&self, x: u32, y: u32) -> &[u32] {
    &self.z[Self::z_line_index(x, y, self.dims.0)]
  }
}

#[cfg(test)]
#[path = "planes_test.rs"]
mod planes_test;
