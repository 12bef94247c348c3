//! Benchmarks for the greedy extraction loop (component H) and its
//! anchor-local extent search (component G). Uses a fine, fixed grid
//! so voxelization cost is constant across the group and the only
//! variable is how much of the interior the extractor has to consume.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use occluder_baker::{generate_occluder, BoxTypeFlags, Mesh, OccluderParams};

fn box_mesh(min: [f32; 3], max: [f32; 3]) -> Mesh {
  let positions = vec![
    [min[0], min[1], min[2]],
    [max[0], min[1], min[2]],
    [max[0], max[1], min[2]],
    [min[0], max[1], min[2]],
    [min[0], min[1], max[2]],
    [max[0], min[1], max[2]],
    [max[0], max[1], max[2]],
    [min[0], max[1], max[2]],
  ];
  let indices: Vec<u16> = vec![
    0, 1, 2, 0, 2, 3, 5, 4, 7, 5, 7, 6, 4, 0, 3, 4, 3, 7, 1, 5, 6, 1, 6, 2, 4, 5, 1, 4, 1, 0, 3, 2,
    6, 3, 6, 7,
  ];
  Mesh { positions, indices }
}

/// Two disjoint cubes separated by a gap, to force the extractor
/// through more than one globally-competing max-extent search.
fn two_cubes_mesh(gap: f32) -> Mesh {
  let a = box_mesh([0.0, 0.0, 0.0], [4.0, 4.0, 4.0]);
  let b = box_mesh([4.0 + gap, 0.0, 0.0], [8.0 + gap, 4.0, 4.0]);

  let mut positions = a.positions;
  let offset = positions.len() as u16;
  positions.extend(b.positions);

  let mut indices = a.indices;
  indices.extend(b.indices.into_iter().map(|i| i + offset));

  Mesh { positions, indices }
}

fn bench_fill_target(c: &mut Criterion) {
  let mut group = c.benchmark_group("extract/fill_target");
  let mesh = box_mesh([0.0, 0.0, 0.0], [6.0, 6.0, 6.0]);

  for &fill_pct in &[0.25f32, 0.5, 0.75, 1.0] {
    group.bench_with_input(
      BenchmarkId::new("fill_pct", fill_pct),
      &fill_pct,
      |b, &fill_pct| {
        let params = OccluderParams::new(0.25, fill_pct, BoxTypeFlags::REGULAR);
        b.iter(|| black_box(generate_occluder(black_box(&mesh), black_box(&params))))
      },
    );
  }

  group.finish();
}

fn bench_disjoint_regions(c: &mut Criterion) {
  let mut group = c.benchmark_group("extract/disjoint_regions");

  for &gap in &[0.5f32, 2.0, 6.0] {
    let mesh = two_cubes_mesh(gap);
    group.bench_with_input(BenchmarkId::new("gap", gap), &mesh, |b, mesh| {
      let params = OccluderParams::new(0.25, 1.0, BoxTypeFlags::REGULAR);
      b.iter(|| black_box(generate_occluder(black_box(mesh), black_box(&params))))
    });
  }

  group.finish();
}

criterion_group!(extract, bench_fill_target, bench_disjoint_regions);
criterion_main!(extract);
