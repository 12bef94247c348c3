//! Error taxonomy for occluder generation.
//!
//! Per spec.md §7, only watertightness failure surfaces as a runtime
//! error; everything else (non-zero canary, non-positive voxel size,
//! out-of-range indices) is a programmer error caught by assertions at
//! the call boundary and is intentionally *not* represented here.

/// Failure surfaced by [`crate::generate_occluder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OccluderError {
  /// The chosen `voxel_size` could not resolve the surface into a
  /// closed shell: some active cell's positive-axis run reaches a cell
  /// that is not itself active, meaning the run overshot a hole in the
  /// shell. Retry with a smaller `voxel_size`.
  #[error("mesh is not watertight at the chosen voxel size")]
  NotWatertight,
}
