//! Component B: triangle/AABB intersection.
//!
//! The 13-axis separating-axis test (Akenine-Möller), used by the shell
//! voxelizer to decide whether a triangle touches a given voxel.
//! Conservative: never reports a false negative (spec.md §4.B).

use glam::Vec3;

use crate::constants::SAT_EPSILON;

/// Project `v0, v1, v2` onto `axis` and test the interval against the
/// box radius projected onto the same axis.
///
/// Returns `true` if the projections overlap (axis does *not*
/// separate), `false` if `axis` is a separating axis.
fn overlaps_on_axis(axis: Vec3, v0: Vec3, v1: Vec3, v2: Vec3, half: Vec3) -> bool {
  let p0 = v0.dot(axis);
  let p1 = v1.dot(axis);
  let p2 = v2.dot(axis);
  let radius = half.x * axis.x.abs() + half.y * axis.y.abs() + half.z * axis.z.abs();

  let min_p = p0.min(p1).min(p2);
  let max_p = p0.max(p1).max(p2);

  max_p >= -radius - SAT_EPSILON && min_p <= radius + SAT_EPSILON
}

/// Test whether triangle `(v0, v1, v2)` intersects the axis-aligned box
/// centered at `box_center` with half-size `half_size`.
///
/// No false negatives: if the triangle and box truly don't overlap this
/// returns `false`, but on the boundary (coplanar faces, shared edges)
/// it may conservatively return `true`. Invariant under any permutation
/// of the triangle's three vertices (spec.md §8, SAT symmetry).
pub fn triangle_intersects_box(
  triangle: [Vec3; 3],
  box_center: Vec3,
  half_size: Vec3,
) -> bool {
  // Step 1: translate triangle into box-local space.
  let v0 = triangle[0] - box_center;
  let v1 = triangle[1] - box_center;
  let v2 = triangle[2] - box_center;

  let e0 = v1 - v0;
  let e1 = v2 - v1;
  let e2 = v0 - v2;

  const UNIT_AXES: [Vec3; 3] = [Vec3::X, Vec3::Y, Vec3::Z];

  // Step 2: nine edge-cross-axis tests.
  for edge in [e0, e1, e2] {
    for unit in UNIT_AXES {
      let axis = edge.cross(unit);
      // A degenerate cross product (parallel edge/axis) cannot separate;
      // skip it rather than risk a spurious reject.
      if axis.length_squared() <= f32::EPSILON {
        continue;
      }
      if !overlaps_on_axis(axis, v0, v1, v2, half_size) {
        return false;
      }
    }
  }

  // Step 3: three coordinate-axis (box-face-normal) tests.
  for unit in UNIT_AXES {
    if !overlaps_on_axis(unit, v0, v1, v2, half_size) {
      return false;
    }
  }

  // Step 4: triangle-plane test.
  let normal = e0.cross(e1);
  if normal.length_squared() > f32::EPSILON {
    let distance = normal.dot(v0);
    let radius = half_size.x * normal.x.abs() + half_size.y * normal.y.abs() + half_size.z * normal.z.abs();
    if distance.abs() > radius + SAT_EPSILON {
      return false;
    }
  }

  true
}

#[cfg(test)]
#[path = "sat_test.rs"]
mod sat_test;
