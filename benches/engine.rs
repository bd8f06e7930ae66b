use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};
use toruslife::Grid;

fn make_grid(size: usize) -> Grid {
    let mut grid = Grid::new(size);
    grid.randomize_with(&mut StdRng::seed_from_u64(size as u64));
    grid
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    for size in [64, 128, 256] {
        let grid = make_grid(size);

        group.bench_with_input(BenchmarkId::new("random", size), &grid, |b, grid| {
            b.iter_batched(
                || grid.clone(),
                |mut grid| grid.step(),
                BatchSize::LargeInput,
            );
        });

        // a sparse grid mostly exercises the quiescent-cell skip
        let sparse = Grid::new(size);
        group.bench_with_input(BenchmarkId::new("empty", size), &sparse, |b, grid| {
            b.iter_batched(
                || grid.clone(),
                |mut grid| grid.step(),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_randomize(c: &mut Criterion) {
    let mut group = c.benchmark_group("randomize");
    for size in [64, 256] {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut grid = Grid::new(size);
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| grid.randomize_with(&mut rng));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step, bench_randomize);
criterion_main!(benches);
