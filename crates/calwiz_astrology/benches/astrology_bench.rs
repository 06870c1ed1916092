use calwiz_astrology::{
    alignment_score, chinese_sign_for_year, detect_aspects, planet_positions, sample_day,
    simulated_positions, zodiac_for_day_of_year,
};
use calwiz_time::CalendarDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn sign_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("signs");
    group.bench_function("zodiac_for_day_of_year", |b| {
        b.iter(|| zodiac_for_day_of_year(black_box(167)))
    });
    group.bench_function("chinese_sign_for_year", |b| {
        b.iter(|| chinese_sign_for_year(black_box(2024)))
    });
    group.finish();
}

fn alignment_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("alignment");
    group.bench_function("planet_positions", |b| {
        b.iter(|| planet_positions(black_box(167), black_box(750)))
    });
    group.bench_function("detect_aspects", |b| {
        let positions = planet_positions(167, 750);
        b.iter(|| detect_aspects(black_box(&positions)))
    });
    group.finish();
}

fn timeline_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline");
    group.bench_function("alignment_score", |b| {
        let positions = simulated_positions(167, 750);
        b.iter(|| alignment_score(black_box(&positions)))
    });
    group.bench_function("sample_day", |b| {
        b.iter(|| sample_day(black_box(CalendarDate::new(2024, 6, 15))))
    });
    group.finish();
}

criterion_group!(benches, sign_bench, alignment_bench, timeline_bench);
criterion_main!(benches);
