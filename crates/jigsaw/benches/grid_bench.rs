//! Criterion benchmarks for grid generation and outline building.
//! Focus sizes: square grids with side in {1, 5, 20, 50}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use jigsaw::grid::{Grid, GridDims, ReplayToken};
use jigsaw::render::{render_grid, RecordingSurface, RenderCfg};
use rand::{rngs::StdRng, SeedableRng};

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    for &n in &[1usize, 5, 20, 50] {
        let dims = GridDims::new(n, n);
        group.bench_with_input(BenchmarkId::new("generate", n), &dims, |b, &dims| {
            b.iter_batched(
                || StdRng::seed_from_u64(43),
                |mut rng| {
                    let _g = Grid::generate(dims, &mut rng);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("render_outlines", n), &dims, |b, &dims| {
            let cfg = RenderCfg::default();
            b.iter_batched(
                || Grid::replay(dims, ReplayToken { seed: 44, index: 0 }),
                |grid| {
                    let mut surface = RecordingSurface::default();
                    render_grid(&grid, &cfg, &mut surface);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_grid);
criterion_main!(benches);
