use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockroom_inventory::{InMemoryIndex, LowStockIndex, StockLevel};

fn seeded_index(n: usize) -> InMemoryIndex {
    let mut index = InMemoryIndex::new();
    for i in 0..n {
        // Quantities cycle 0..50 so a threshold of 10 keeps ~20% low-stock.
        index.set(
            format!("item-{i:06}"),
            StockLevel {
                quantity: (i % 50) as i64,
                price: 1.0,
            },
        );
    }
    index
}

fn bench_drain_valid(c: &mut Criterion) {
    let mut group = c.benchmark_group("drain_valid");
    for n in [100usize, 1_000, 10_000] {
        let index = seeded_index(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            let mut low = LowStockIndex::new();
            low.rebuild_from(&index, 10);
            b.iter(|| {
                let result = low.drain_valid(black_box(&index), black_box(10));
                black_box(result)
            });
        });
    }
    group.finish();
}

fn bench_rebuild_from(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild_from");
    for n in [100usize, 1_000, 10_000] {
        let index = seeded_index(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            let mut low = LowStockIndex::new();
            b.iter(|| {
                low.rebuild_from(black_box(&index), black_box(10));
                black_box(low.len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_drain_valid, bench_rebuild_from);
criterion_main!(benches);
