use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexgrid::{Grid, GridConfig};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape-generation");

    let grid = Grid::new(GridConfig::default()).unwrap();
    group.bench_function("hexagon r=100", |b| {
        b.iter(|| grid.hexagon(black_box(100)))
    });
    group.bench_function("rectangle 100x100", |b| {
        b.iter(|| grid.rectangle(black_box((100, 100))))
    });
    group.bench_function("point_to_hex", |b| {
        b.iter(|| grid.point_to_hex(black_box((123.4, -56.7))))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
