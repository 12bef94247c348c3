//! Optional debug visualization geometry, built only behind the
//! `debug` feature.
//!
//! Produces wireframe line segments for the shell, inner cells,
//! selected extents, and min-distance rays, selected by
//! [`DebugFlags`]. Out of scope per spec.md §1 as a rendering
//! surface — this module hands back plain geometry for a caller's own
//! renderer, it does not draw anything itself.

use crate::field::Field;
use crate::flags::DebugFlags;
use crate::grid::Grid;
use crate::shell::ShellVoxels;
use crate::types::{Distance, Extent};

/// A line segment in world space.
pub type Segment = [[f32; 3]; 2];

/// Debug-only line geometry, one group per selected [`DebugFlags`] bit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DebugMesh {
  pub lines: Vec<Segment>,
}

fn box_wireframe(min: glam::Vec3, max: glam::Vec3, out: &mut Vec<Segment>) {
  let corners = [
    glam::Vec3::new(min.x, min.y, min.z),
    glam::Vec3::new(max.x, min.y, min.z),
    glam::Vec3::new(max.x, max.y, min.z),
    glam::Vec3::new(min.x, max.y, min.z),
    glam::Vec3::new(min.x, min.y, max.z),
    glam::Vec3::new(max.x, min.y, max.z),
    glam::Vec3::new(max.x, max.y, max.z),
    glam::Vec3::new(min.x, max.y, max.z),
  ];
  const EDGES: [(usize, usize); 12] = [
    (0, 1), (1, 2), (2, 3), (3, 0),
    (4, 5), (5, 6), (6, 7), (7, 4),
    (0, 4), (1, 5), (2, 6), (3, 7),
  ];
  for (a, b) in EDGES {
    out.push([corners[a].into(), corners[b].into()]);
  }
}

/// Build debug geometry for the layers selected by `flags`.
pub fn build(
  grid: &Grid,
  shell: &ShellVoxels,
  field: &Field,
  extents: &[Extent],
  flags: DebugFlags,
) -> DebugMesh {
  let mut lines = Vec::new();
  let (dx, dy, dz) = grid.dims;

  if flags.contains(DebugFlags::SHELL) {
    for flat in shell.iter() {
      let (x, y, z) = grid.unflatten(flat);
      box_wireframe(grid.cell_min(x, y, z), grid.cell_min(x + 1, y + 1, z + 1), &mut lines);
    }
  }

  if flags.contains(DebugFlags::INNER_CELLS) {
    for z in 0..dz {
      for y in 0..dy {
        for x in 0..dx {
          let flat = grid.flatten(x, y, z);
          if field.status(flat).inner {
            box_wireframe(grid.cell_min(x, y, z), grid.cell_min(x + 1, y + 1, z + 1), &mut lines);
          }
        }
      }
    }
  }

  if flags.contains(DebugFlags::SELECTED_EXTENTS) {
    for extent in extents {
      let (px, py, pz) = extent.position;
      let (ex, ey, ez) = extent.extent;
      box_wireframe(
        grid.cell_min(px, py, pz),
        grid.cell_min(px + ex, py + ey, pz + ez),
        &mut lines,
      );
    }
  }

  if flags.contains(DebugFlags::DISTANCE_RAYS) {
    for z in 0..dz {
      for y in 0..dy {
        for x in 0..dx {
          let flat = grid.flatten(x, y, z);
          if !field.status(flat).inner {
            continue;
          }
          let origin = grid.cell_center(x, y, z);
          let distances = field.distances(flat);
          if let Distance::ToShell(d) = distances.dx {
            let tip = origin + glam::Vec3::X * (d as f32 * grid.voxel_size);
            lines.push([origin.into(), tip.into()]);
          }
          if let Distance::ToShell(d) = distances.dy {
            let tip = origin + glam::Vec3::Y * (d as f32 * grid.voxel_size);
            lines.push([origin.into(), tip.into()]);
          }
          if let Distance::ToShell(d) = distances.dz {
            let tip = origin + glam::Vec3::Z * (d as f32 * grid.voxel_size);
            lines.push([origin.into(), tip.into()]);
          }
        }
      }
    }
  }

  DebugMesh { lines }
}

#[cfg(test)]
#[path = "debug_mesh_test.rs"]
mod debug_mesh_test;
