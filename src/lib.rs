//! Conservative axis-aligned-box occluder mesh generation.
//!
//! Given an arbitrary closed triangle mesh, produces a union of
//! axis-aligned boxes that lies strictly inside the input surface and
//! whose silhouette, from any viewpoint, never exceeds the input's own
//! silhouette — cheap to rasterize for real-time occlusion culling,
//! and never over-occludes.
//!
//! The pipeline runs in three stages: shell voxelization (mark every
//! grid cell an input triangle touches), interior classification and
//! min-distance field construction, and greedy maximum-volume box
//! extraction. See [`generate_occluder`] for the entry point.

mod constants;
mod context;
mod debug_mesh;
mod error;
mod extent_search;
mod extract;
mod field;
mod flags;
mod grid;
mod mesh_output;
mod planes;
mod sat;
mod shell;
mod types;
mod watertight;

#[cfg(test)]
mod test_fixtures;

pub use context::{generate_occluder, GenerationResult};
pub use error::OccluderError;
pub use flags::BoxTypeFlags;
#[cfg(feature = "debug")]
pub use flags::DebugFlags;
#[cfg(feature = "debug")]
pub use debug_mesh::DebugMesh;
pub use mesh_output::OccluderMesh;
pub use types::{Mesh, OccluderParams};
