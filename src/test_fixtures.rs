//! Mesh fixtures shared across module unit tests and the scenario-level
//! integration tests in `tests/scenarios.rs`.

use crate::types::Mesh;

/// The 12-triangle surface of an axis-aligned box `[min, max]`.
pub fn box_mesh(min: [f32; 3], max: [f32; 3]) -> Mesh {
  let positions = vec![
    [min[0], min[1], min[2]], // 0
    [max[0], min[1], min[2]], // 1
    [max[0], max[1], min[2]], // 2
    [min[0], max[1], min[2]], // 3
    [min[0], min[1], max[2]], // 4
    [max[0], min[1], max[2]], // 5
    [max[0], max[1], max[2]], // 6
    [min[0], max[1], max[2]], // 7
  ];

  // Outward-facing winding for each of the 6 faces, 2 triangles each.
  let indices: Vec<u16> = vec![
    0, 1, 2, 0, 2, 3, // -Z
    5, 4, 7, 5, 7, 6, // +Z
    4, 0, 3, 4, 3, 7, // -X
    1, 5, 6, 1, 6, 2, // +X
    4, 5, 1, 4, 1, 0, // -Y
    3, 2, 6, 3, 6, 7, // +Y
  ];

  Mesh { positions, indices }
}

/// Same as [`box_mesh`] but with the +Y (top) face omitted, producing a
/// non-watertight shell (spec.md scenario S4).
pub fn open_box_mesh(min: [f32; 3], max: [f32; 3]) -> Mesh {
  let positions = vec![
    [min[0], min[1], min[2]], // 0
    [max[0], min[1], min[2]], // 1
    [max[0], max[1], min[2]], // 2
    [min[0], max[1], min[2]], // 3
    [min[0], min[1], max[2]], // 4
    [max[0], min[1], max[2]], // 5
    [max[0], max[1], max[2]], // 6
    [min[0], max[1], max[2]], // 7
  ];

  let indices: Vec<u16> = vec![
    0, 1, 2, 0, 2, 3, // -Z
    5, 4, 7, 5, 7, 6, // +Z
    4, 0, 3, 4, 3, 7, // -X
    1, 5, 6, 1, 6, 2, // +X
    4, 5, 1, 4, 1, 0, // -Y
    // +Y (top) intentionally omitted
  ];

  Mesh { positions, indices }
}

/// A regular tetrahedron with edge length roughly `side`, centered at
/// the origin.
pub fn tetrahedron_mesh(side: f32) -> Mesh {
  let a = side / (2.0f32).sqrt();
  let positions = vec![
    [a, a, a],
    [a, -a, -a],
    [-a, a, -a],
    [-a, -a, a],
  ];
  let indices: Vec<u16> = vec![0, 1, 2, 0, 3, 1, 0, 2, 3, 1, 3, 2];
  Mesh { positions, indices }
}

/// A thin box elongated along +X, for the diagonal-walk dominance
/// scenario (spec.md scenario S6).
pub fn rod_mesh(length: f32, thickness: f32) -> Mesh {
  box_mesh(
    [0.0, 0.0, 0.0],
    [length, thickness, thickness],
  )
}

/// Two disjoint unit cubes at `[0,1]^3` and `[2,3]^3` (spec.md scenario S3).
pub fn two_cubes_mesh() -> Mesh {
  let a = box_mesh([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
  let b = box_mesh([2.0, 2.0, 2.0], [3.0, 3.0, 3.0]);

  let mut positions = a.positions;
  let offset = positions.len() as u16;
  positions.extend(b.positions);

  let mut indices = a.indices;
  indices.extend(b.indices.into_iter().map(|i| i + offset));

  Mesh { positions, indices }
}
