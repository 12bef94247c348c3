//! Box tessellation: turns the emitted extents into a triangle mesh.
//!
//! Vertex layout is 8 corners per extent in a fixed local order,
//! scaled by the extent's half-size and translated to its world
//! center. Index templates are selected by [`BoxTypeFlags`], per
//! spec.md §6.

use crate::flags::BoxTypeFlags;
use crate::grid::Grid;
use crate::types::Extent;

/// The emitted occluder surface: a concatenation of per-extent box
/// tessellations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OccluderMesh {
  pub vertices: Vec<[f32; 3]>,
  pub indices: Vec<u32>,
}

/// Local corner offsets in the fixed `(±1, ±1, ±1)` order.
const CORNER_SIGNS: [[f32; 3]; 8] = [
  [-1.0, -1.0, -1.0], // 0
  [1.0, -1.0, -1.0],  // 1
  [1.0, 1.0, -1.0],   // 2
  [-1.0, 1.0, -1.0],  // 3
  [-1.0, -1.0, 1.0],  // 4
  [1.0, -1.0, 1.0],   // 5
  [1.0, 1.0, 1.0],    // 6
  [-1.0, 1.0, 1.0],   // 7
];

const FACE_NEG_Z: [u32; 6] = [0, 1, 2, 0, 2, 3];
const FACE_POS_Z: [u32; 6] = [5, 4, 7, 5, 7, 6];
const FACE_NEG_X: [u32; 6] = [4, 0, 3, 4, 3, 7];
const FACE_POS_X: [u32; 6] = [1, 5, 6, 1, 6, 2];
const FACE_NEG_Y: [u32; 6] = [4, 5, 1, 4, 1, 0];
const FACE_POS_Y: [u32; 6] = [3, 2, 6, 3, 6, 7];
const DIAGONALS: [u32; 12] = [0, 2, 6, 0, 6, 4, 1, 3, 7, 1, 7, 5];

/// Build the occluder mesh for one extent's local index template,
/// selected by `flags`.
fn local_indices(flags: BoxTypeFlags) -> Vec<u32> {
  if flags.contains(BoxTypeFlags::DIAGONALS) {
    return DIAGONALS.to_vec();
  }

  let mut indices = Vec::new();
  if flags.contains(BoxTypeFlags::SIDES) {
    indices.extend_from_slice(&FACE_NEG_X);
    indices.extend_from_slice(&FACE_POS_X);
    indices.extend_from_slice(&FACE_NEG_Z);
    indices.extend_from_slice(&FACE_POS_Z);
  }
  if flags.contains(BoxTypeFlags::BOTTOM) {
    indices.extend_from_slice(&FACE_NEG_Y);
  }
  if flags.contains(BoxTypeFlags::TOP) {
    indices.extend_from_slice(&FACE_POS_Y);
  }
  indices
}

/// Tessellate every emitted extent into one concatenated mesh.
pub fn build(grid: &Grid, extents: &[Extent], flags: BoxTypeFlags) -> OccluderMesh {
  let template = local_indices(flags);
  let mut vertices = Vec::with_capacity(extents.len() * 8);
  let mut indices = Vec::with_capacity(extents.len() * template.len());

  for extent in extents {
    let (px, py, pz) = extent.position;
    let (ex, ey, ez) = extent.extent;

    let min = grid.cell_min(px, py, pz);
    let max = grid.cell_min(px + ex, py + ey, pz + ez);
    let center = (min + max) * 0.5;
    let half = (max - min) * 0.5;

    let base = vertices.len() as u32;
    for signs in CORNER_SIGNS {
      vertices.push([
        center.x + signs[0] * half.x,
        center.y + signs[1] * half.y,
        center.z + signs[2] * half.z,
      ]);
    }
    indices.extend(template.iter().map(|i| base + i));
  }

  OccluderMesh { vertices, indices }
}

#[cfg(test)]
#[path = "mesh_output_test.rs"]
mod mesh_output_test;
