use coinchange::{exact_change, greedy_change, ChangeTable, DenominationSet};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const AMOUNTS: [i64; 6] = [100, 500, 1_000, 2_000, 5_000, 10_000];

fn bench_greedy(c: &mut Criterion) {
    let set = DenominationSet::default();
    let mut group = c.benchmark_group("greedy_change");
    for amount in AMOUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(amount), &amount, |b, &amount| {
            b.iter(|| greedy_change(black_box(amount), &set))
        });
    }
    group.finish();
}

fn bench_exact(c: &mut Criterion) {
    let set = DenominationSet::default();
    let mut group = c.benchmark_group("exact_change");
    for amount in AMOUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(amount), &amount, |b, &amount| {
            b.iter(|| exact_change(black_box(amount), &set))
        });
    }
    group.finish();
}

fn bench_table_non_canonical(c: &mut Criterion) {
    let set = DenominationSet::new([4, 3, 1]).unwrap();
    c.bench_function("change_table_4_3_1_10000", |b| {
        b.iter(|| ChangeTable::build(black_box(10_000), &set).unwrap())
    });
}

criterion_group!(benches, bench_greedy, bench_exact, bench_table_non_canonical);
criterion_main!(benches);
