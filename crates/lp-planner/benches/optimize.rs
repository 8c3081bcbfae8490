use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use lp_holidays::{Germany, HolidayCalendar};
use lp_planner::{optimize, Mode};

fn bench_optimize(c: &mut Criterion) {
    let holidays = Germany.holiday_dates(2026);

    c.bench_function("optimize/2026/balanced", |b| {
        b.iter(|| optimize(black_box(2026), black_box(25), &holidays, Mode::Balanced))
    });

    c.bench_function("optimize/2026/long-weekends", |b| {
        b.iter(|| {
            optimize(
                black_box(2026),
                black_box(25),
                &holidays,
                Mode::LongWeekends,
            )
        })
    });
}

criterion_group!(benches, bench_optimize);
criterion_main!(benches);
