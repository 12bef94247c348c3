//! Typed bitsets for box tessellation and debug visualization selection.
//!
//! Modeled as `bitflags` types rather than raw integers per spec.md's
//! Design Note "Flag enums" — validated at the boundary in
//! [`BoxTypeFlags::validate`] instead of left as an untyped mask.

use bitflags::bitflags;

bitflags! {
  /// Which faces of each emitted box to tessellate.
  ///
  /// `SIDES | TOP | BOTTOM` is the "regular" closed box (36 indices).
  /// `SIDES` alone is 24 indices; `TOP` or `BOTTOM` alone is 6.
  /// `DIAGONALS` is a mutually exclusive, cheaper proxy shape (two
  /// crossed quads through the box interior, 12 indices) — it must not
  /// be combined with the face bits. Every box emits the same 8 corner
  /// vertices regardless of which template is selected.
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub struct BoxTypeFlags: u8 {
    /// The four vertical side faces.
    const SIDES     = 0b0000_0001;
    /// The top face.
    const TOP       = 0b0000_0010;
    /// The bottom face.
    const BOTTOM    = 0b0000_0100;
    /// Two crossed quads through the box interior, in place of a closed box.
    const DIAGONALS = 0b0000_1000;
  }
}

impl BoxTypeFlags {
  /// A fully closed box: sides, top, and bottom.
  pub const REGULAR: Self = Self::SIDES.union(Self::TOP).union(Self::BOTTOM);

  /// Validate that face bits and `DIAGONALS` are not combined.
  ///
  /// Returns `false` if both a face bit and `DIAGONALS` are set, or if
  /// no bit is set at all.
  pub fn validate(self) -> bool {
    if self.is_empty() {
      return false;
    }
    let has_faces = self.intersects(Self::SIDES | Self::TOP | Self::BOTTOM);
    let has_diagonals = self.contains(Self::DIAGONALS);
    !(has_faces && has_diagonals)
  }
}

bitflags! {
  /// Selects which debug-only visualization layers to emit.
  ///
  /// Only meaningful when this crate is built with the `debug` feature;
  /// [`crate::debug_mesh`] is otherwise entirely compiled out.
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
  pub struct DebugFlags: u8 {
    /// Draw every shell voxel as a wireframe box.
    const SHELL          = 0b0000_0001;
    /// Draw every inner (active) cell as a wireframe box.
    const INNER_CELLS    = 0b0000_0010;
    /// Draw the extracted extents before clipping.
    const SELECTED_EXTENTS = 0b0000_0100;
    /// Draw min-distance rays from inner cells to the next shell voxel.
    const DISTANCE_RAYS  = 0b0000_1000;
  }
}

#[cfg(test)]
#[path = "flags_test.rs"]
mod flags_test;
