//! Named constants shared across the occluder pipeline.
//!
//! # Cell indexing
//!
//! Cells are linearized x-fastest:
//!
//! ```text
//! index = x + Dx * y + Dx * Dy * z
//! ```
//!
//! This ordering is required by the spec's lexicographic tie-breaking
//! rule in the greedy extractor (component H) — do not reorder it to
//! the more common z-fastest layout used elsewhere in this codebase's
//! voxel meshing code.

/// Minimum voxel size accepted by [`crate::OccluderParams`].
///
/// Guards against degenerate grids where snapping produces zero-sized
/// dimensions.
pub const MIN_VOXEL_SIZE: f32 = 1.0e-6;

/// Relative epsilon used by the SAT triangle/box test (component B)
/// when comparing projected intervals.
pub const SAT_EPSILON: f32 = 1.0e-5;

/// Upper bound on a single grid axis dimension.
///
/// `volume = extent.x * extent.y * extent.z` is asserted to fit in a
/// `u32` (spec.md §7); capping each axis at 2^10 keeps the maximum
/// possible volume (2^10)^3 = 2^30 comfortably inside `u32::MAX`.
pub const MAX_GRID_AXIS: u32 = 1 << 10;

/// Convert 3D cell coordinates to a linear index, x-fastest.
#[inline]
pub const fn coord_to_index(x: u32, y: u32, z: u32, dims: (u32, u32, u32)) -> usize {
  let (dx, dy, _dz) = dims;
  (x as usize) + (dx as usize) * (y as usize) + (dx as usize) * (dy as usize) * (z as usize)
}

/// Inverse of [`coord_to_index`].
#[inline]
pub const fn index_to_coord(index: usize, dims: (u32, u32, u32)) -> (u32, u32, u32) {
  let (dx, dy, _dz) = dims;
  let plane = dx as usize * dy as usize;
  let z = index / plane;
  let rem = index % plane;
  let y = rem / dx as usize;
  let x = rem % dx as usize;
  (x as u32, y as u32, z as u32)
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
