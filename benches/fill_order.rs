use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rack_layout::{Corner, Direction, GridConfig, compute_fill_order, fill_order_grid};
use std::hint::black_box;

fn bench_fill_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_order");
    for (rows, columns) in [(10u32, 5u32), (50, 50), (200, 200)] {
        let config = GridConfig::new(rows, columns, Corner::BottomLeft, Direction::Up);
        group.bench_with_input(
            BenchmarkId::new("list", format!("{rows}x{columns}")),
            &config,
            |b, config| b.iter(|| compute_fill_order(black_box(config)).unwrap()),
        );
        group.bench_with_input(
            BenchmarkId::new("grid", format!("{rows}x{columns}")),
            &config,
            |b, config| b.iter(|| fill_order_grid(black_box(config)).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_fill_order);
criterion_main!(benches);
