//! Benchmarks for calendar generation and projection runs.
//!
//! Run with: cargo bench -p juros-projection

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal_macros::dec;

use juros_core::calendars::{BvmfCalendar, Calendar, WeekendCalendar};
use juros_core::types::Date;
use juros_projection::{project, ProjectionParameters};

fn start_date() -> Date {
    Date::from_ymd(2025, 1, 2).unwrap()
}

fn params(horizon: u32) -> ProjectionParameters {
    ProjectionParameters {
        start_date: start_date(),
        principal: dec!(10000),
        selic_annual: dec!(0.15),
        cdb_fraction: dec!(1.0),
        compromissada_fraction: dec!(0.5),
        horizon_business_days: horizon,
    }
}

// =============================================================================
// CALENDAR BENCHMARKS
// =============================================================================

fn bench_business_days(c: &mut Criterion) {
    let mut group = c.benchmark_group("business_days_after");
    group.sample_size(50);

    for count in [5u32, 22, 30].iter() {
        group.throughput(Throughput::Elements(u64::from(*count)));
        group.bench_with_input(
            BenchmarkId::new("bvmf", count),
            count,
            |b, &count| b.iter(|| BvmfCalendar.business_days_after(black_box(start_date()), count)),
        );
        group.bench_with_input(
            BenchmarkId::new("weekend", count),
            count,
            |b, &count| {
                b.iter(|| WeekendCalendar.business_days_after(black_box(start_date()), count))
            },
        );
    }
    group.finish();
}

// =============================================================================
// PROJECTION BENCHMARKS
// =============================================================================

fn bench_projection_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");
    group.sample_size(50);

    for horizon in [1u32, 10, 22, 30].iter() {
        let p = params(*horizon);
        group.throughput(Throughput::Elements(u64::from(*horizon)));
        group.bench_with_input(BenchmarkId::from_parameter(horizon), &p, |b, p| {
            b.iter(|| project(black_box(p), &BvmfCalendar))
        });
    }
    group.finish();
}

// =============================================================================
// CRITERION GROUPS
// =============================================================================

criterion_group!(calendars, bench_business_days,);
criterion_group!(projections, bench_projection_runs,);

criterion_main!(calendars, projections);
