use super::*;

#[test]
fn coord_to_index_roundtrip() {
  let dims = (5, 7, 3);
  for z in 0..dims.2 {
    for y in 0..dims.1 {
      for x in 0..dims.0 {
        let idx = coord_to_index(x, y, z, dims);
        assert_eq!(index_to_coord(idx, dims), (x, y, z));
      }
    }
  }
}

#[test]
fn flatten_is_x_fastest() {
  let dims = (4, 4, 4);
  assert_eq!(coord_to_index(0, 0, 0, dims), 0);
  assert_eq!(coord_to_index(1, 0, 0, dims), 1);
  assert_eq!(coord_to_index(0, 1, 0, dims), 4);
  assert_eq!(coord_to_index(0, 0, 1, dims), 16);
}

#[test]
fn flatten_is_bijection_on_full_range() {
  let dims = (3, 3, 3);
  let total = dims.0 as usize * dims.1 as usize * dims.2 as usize;
  let mut seen = vec![false; total];
  for z in 0..dims.2 {
    for y in 0..dims.1 {
      for x in 0..dims.0 {
        let idx = coord_to_index(x, y, z, dims);
        assert!(idx < total);
        assert!(!seen[idx], "index {idx} produced twice");
        seen[idx] = true;
      }
    }
  }
  assert!(seen.iter().all(|&b| b));
}
