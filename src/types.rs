//! Core data types shared by every pipeline component.

use crate::flags::BoxTypeFlags;
#[cfg(feature = "debug")]
use crate::flags::DebugFlags;
use bitflags::bitflags;

/// Input surface: a closed (expected watertight) triangle mesh.
///
/// `indices.len()` must be a multiple of 3; index values must be within
/// `0..positions.len()`. Both conditions are asserted at the call
/// boundary (programmer error per spec.md §7) rather than validated
/// gracefully, matching the "abort via assertion" contract.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
  /// Vertex positions, one `[x, y, z]` per vertex.
  pub positions: Vec<[f32; 3]>,
  /// Triangle indices, 3 per triangle, 16-bit as specified.
  pub indices: Vec<u16>,
}

impl Mesh {
  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  /// Fetch the three vertex positions of triangle `tri`.
  pub fn triangle(&self, tri: usize) -> [glam::Vec3; 3] {
    let base = tri * 3;
    [
      glam::Vec3::from(self.positions[self.indices[base] as usize]),
      glam::Vec3::from(self.positions[self.indices[base + 1] as usize]),
      glam::Vec3::from(self.positions[self.indices[base + 2] as usize]),
    ]
  }
}

/// Parameters for [`crate::generate_occluder`].
#[derive(Clone, Copy, Debug)]
pub struct OccluderParams {
  /// Grid voxel edge length. Must be strictly positive.
  pub voxel_size: f32,
  /// Target cumulative fill fraction in `(0, 1]`. Extraction stops once
  /// reached.
  pub fill_pct: f32,
  /// Which faces to tessellate for each emitted box (see
  /// [`BoxTypeFlags`]). Must pass [`BoxTypeFlags::validate`].
  pub box_type_flags: BoxTypeFlags,
  /// Which debug visualization layers to emit. Ignored unless this
  /// crate is built with the `debug` feature.
  #[cfg(feature = "debug")]
  pub debug_flags: DebugFlags,
  /// Canary field to catch uninitialized-parameter usage. Must be zero.
  pub _reserved: u32,
}

impl OccluderParams {
  /// Convenience constructor with the canary pre-zeroed and no debug
  /// flags set.
  pub fn new(voxel_size: f32, fill_pct: f32, box_type_flags: BoxTypeFlags) -> Self {
    Self {
      voxel_size,
      fill_pct,
      box_type_flags,
      #[cfg(feature = "debug")]
      debug_flags: DebugFlags::empty(),
      _reserved: 0,
    }
  }

  /// Assert all programmer-error invariants for these parameters.
  pub(crate) fn assert_valid(&self) {
    assert_eq!(self._reserved, 0, "OccluderParams canary field is non-zero");
    assert!(
      self.voxel_size >= crate::constants::MIN_VOXEL_SIZE,
      "voxel_size must be at least {}, got {}",
      crate::constants::MIN_VOXEL_SIZE,
      self.voxel_size
    );
    assert!(
      self.fill_pct > 0.0 && self.fill_pct <= 1.0,
      "fill_pct must be in (0, 1], got {}",
      self.fill_pct
    );
    assert!(
      self.box_type_flags.validate(),
      "box_type_flags must select either face bits or DIAGONALS, not both or neither: {:?}",
      self.box_type_flags
    );
  }
}

bitflags! {
  /// Per-cell axis visibility: "some shell voxel exists along this ray
  /// from this cell", one bit per direction.
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
  pub struct Visibility: u8 {
    const POS_X = 0b0000_0001;
    const NEG_X = 0b0000_0010;
    const POS_Y = 0b0000_0100;
    const NEG_Y = 0b0000_1000;
    const POS_Z = 0b0001_0000;
    const NEG_Z = 0b0010_0000;
  }
}

impl Visibility {
  /// All six directions set.
  pub const ALL_AXES: Self = Self::POS_X
    .union(Self::NEG_X)
    .union(Self::POS_Y)
    .union(Self::NEG_Y)
    .union(Self::POS_Z)
    .union(Self::NEG_Z);
}

/// Per-cell status: visibility bits plus the `inner`/`clipped` flags.
///
/// Invariant: `inner` implies all six [`Visibility`] bits are set and
/// the cell is not itself a shell voxel (enforced when this is
/// constructed in [`crate::field`]).
#[derive(Clone, Copy, Debug, Default)]
pub struct CellStatus {
  pub visibility: Visibility,
  pub inner: bool,
  /// Once true, never becomes false again.
  pub clipped: bool,
}

impl CellStatus {
  /// A cell is active iff `inner && !clipped`.
  #[inline]
  pub fn is_active(&self) -> bool {
    self.inner && !self.clipped
  }
}

/// A single positive-axis distance to the next shell voxel, or why one
/// isn't meaningful.
///
/// Replaces the original implementation's raw `-1`/`INT_MAX` sentinels
/// per spec.md's Design Note "Sentinel-based optional integers": no
/// sentinel value ever leaks past this module boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Distance {
  /// Not meaningful: the cell is not active, so this axis was never
  /// computed against a positive-side shell voxel.
  Unknown,
  /// A shell voxel shares this cell's coordinate on this axis (spec.md
  /// §4.E step 2, `δ = 0`). Disqualifies `inner` per the Design Notes.
  Coincident,
  /// Distance in cells to the nearest shell voxel with `δ > 0`.
  ToShell(u32),
}

impl Distance {
  /// The numeric run length, if any (`0` for `Coincident`).
  pub fn run_len(&self) -> Option<u32> {
    match self {
      Distance::Unknown => None,
      Distance::Coincident => Some(0),
      Distance::ToShell(d) => Some(*d),
    }
  }
}

/// Per-cell min-distance field: positive-axis run lengths to the next
/// shell voxel along +X, +Y, +Z.
#[derive(Clone, Copy, Debug)]
pub struct Distances {
  pub dx: Distance,
  pub dy: Distance,
  pub dz: Distance,
}

impl Default for Distances {
  fn default() -> Self {
    Self {
      dx: Distance::Unknown,
      dy: Distance::Unknown,
      dz: Distance::Unknown,
    }
  }
}

/// An axis-aligned box of interior-only cells: `position` is the min
/// corner (inner-voxel-aligned), `extent` is its cell-count size along
/// each axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extent {
  pub position: (u32, u32, u32),
  pub extent: (u32, u32, u32),
}

impl Extent {
  pub fn new(position: (u32, u32, u32), extent: (u32, u32, u32)) -> Self {
    Self { position, extent }
  }

  /// Volume in cells. Asserted to fit `u32` per spec.md §7.
  pub fn volume(&self) -> u64 {
    self.extent.0 as u64 * self.extent.1 as u64 * self.extent.2 as u64
  }

  /// Iterate every cell coordinate covered by this extent.
  pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_ {
    let (px, py, pz) = self.position;
    let (ex, ey, ez) = self.extent;
    (0..ex).flat_map(move |i| {
      (0..ey).flat_map(move |j| (0..ez).map(move |k| (px + i, py + j, pz + k)))
    })
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
