use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use planner_core::recurrence::{next_date, RecurrenceRule};

fn bench_rule_parsing(c: &mut Criterion) {
    let rules = vec!["d 1", "d 400", "y", "w 1"];

    let mut group = c.benchmark_group("rule_parsing");
    for rule in rules {
        group.bench_with_input(BenchmarkId::new("rule", rule), rule, |b, rule| {
            b.iter(|| black_box(rule).parse::<RecurrenceRule>())
        });
    }
    group.finish();
}

fn bench_daily_distance(c: &mut Criterion) {
    let now = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

    // The daily step count is computed directly, so anchor age should not matter.
    let mut group = c.benchmark_group("daily_distance");
    for anchor in ["20240110", "19000101", "10000101"] {
        group.bench_with_input(BenchmarkId::new("anchor", anchor), anchor, |b, anchor| {
            b.iter(|| next_date(black_box(now), black_box(anchor), "d 1").unwrap())
        });
    }
    group.finish();
}

fn bench_yearly(c: &mut Criterion) {
    let now = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

    c.bench_function("yearly_distant_leap_day_anchor", |b| {
        b.iter(|| next_date(black_box(now), black_box("19040229"), "y").unwrap())
    });
}

criterion_group!(benches, bench_rule_parsing, bench_daily_distance, bench_yearly);
criterion_main!(benches);
