//! Top-level orchestration: owns every buffer for a single
//! [`crate::generate_occluder`] call and wires components A–H together
//! in dependency order, per spec.md §2 and §5.

use crate::error::OccluderError;
use crate::extract;
use crate::field::Field;
use crate::grid::Grid;
use crate::mesh_output::{self, OccluderMesh};
use crate::planes::PlaneBuckets;
use crate::shell::ShellVoxels;
use crate::types::{Mesh, OccluderParams};
use crate::watertight;

#[cfg(feature = "debug")]
use crate::debug_mesh::{self, DebugMesh};

/// Owns the grid, shell, plane buckets, and field for one call. All
/// buffers are released when this value is dropped, on every exit
/// path, matching the "single owning scope" lifecycle of spec.md §3.
pub struct Context {
  grid: Grid,
  shell: ShellVoxels,
  field: Field,
}

/// Bundles the occluder mesh with the optional debug mesh, when the
/// `debug` feature and debug flags select one.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationResult {
  pub occluder: OccluderMesh,
  #[cfg(feature = "debug")]
  pub debug: Option<DebugMesh>,
}

fn mesh_aabb(mesh: &Mesh) -> (glam::Vec3, glam::Vec3) {
  let mut min = glam::Vec3::splat(f32::INFINITY);
  let mut max = glam::Vec3::splat(f32::NEG_INFINITY);
  for &p in &mesh.positions {
    let v = glam::Vec3::from(p);
    min = min.min(v);
    max = max.max(v);
  }
  (min, max)
}

impl Context {
  /// Build the grid, shell voxel set, plane buckets, and field for
  /// `mesh` at `params.voxel_size`. Does not run watertightness or
  /// extraction; those are driven by [`crate::generate_occluder`].
  pub fn build(mesh: &Mesh, voxel_size: f32) -> Self {
    let (aabb_min, aabb_max) = mesh_aabb(mesh);
    let grid = Grid::new(aabb_min, aabb_max, voxel_size);
    let shell = ShellVoxels::build(&grid, mesh);
    let planes = PlaneBuckets::build(&grid, &shell);
    let field = Field::build(&grid, &shell, &planes);

    Self { grid, shell, field }
  }

  pub fn grid(&self) -> &Grid {
    &self.grid
  }

  pub fn field(&self) -> &Field {
    &self.field
  }

  pub fn shell(&self) -> &ShellVoxels {
    &self.shell
  }
}

/// Run the full pipeline: build the context, gate on watertightness,
/// greedily extract extents, and tessellate the result.
#[tracing::instrument(skip_all, name = "generate_occluder", fields(voxel_size = params.voxel_size, fill_pct = params.fill_pct))]
pub fn generate_occluder(mesh: &Mesh, params: &OccluderParams) -> Result<GenerationResult, OccluderError> {
  params.assert_valid();
  assert!(
    mesh.indices.len() % 3 == 0,
    "mesh index buffer length must be a multiple of 3"
  );
  for &i in &mesh.indices {
    assert!(
      (i as usize) < mesh.positions.len(),
      "mesh index {i} out of range of {} vertices",
      mesh.positions.len()
    );
  }

  let mut ctx = Context::build(mesh, params.voxel_size);

  if let Err(e) = watertight::check(&ctx.grid, &ctx.shell, &ctx.field) {
    tracing::debug!(error = ?e, "watertightness check failed");
    return Err(e);
  }

  let extents = extract::extract(&ctx.grid, &mut ctx.field, params.fill_pct);
  let occluder = mesh_output::build(&ctx.grid, &extents, params.box_type_flags);

  #[cfg(feature = "debug")]
  let debug = if params.debug_flags.is_empty() {
    None
  } else {
    Some(debug_mesh::build(&ctx.grid, &ctx.shell, &ctx.field, &extents, params.debug_flags))
  };

  Ok(GenerationResult {
    occluder,
    #[cfg(feature = "debug")]
    debug,
  })
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
