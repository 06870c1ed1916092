use calwiz_numerology::{day_numerology, digit_sum, life_path_from_text, reduce_master};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn reduce_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");
    group.bench_function("digit_sum", |b| b.iter(|| digit_sum(black_box(19_901_115))));
    group.bench_function("reduce_master", |b| b.iter(|| reduce_master(black_box(1990))));
    group.finish();
}

fn life_path_bench(c: &mut Criterion) {
    c.bench_function("life_path_from_text", |b| {
        b.iter(|| life_path_from_text(black_box("15/06/1990")))
    });
}

fn day_numerology_bench(c: &mut Criterion) {
    c.bench_function("day_numerology", |b| {
        b.iter(|| day_numerology(black_box(11), black_box(10), black_box(2024), Some(4)))
    });
}

criterion_group!(benches, reduce_bench, life_path_bench, day_numerology_bench);
criterion_main!(benches);
