//! Benchmarks for lagpanel-engine operations.
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lagpanel_engine::{
    ComputePlacement, ShiftOptions, ShiftStrategy, Steps, Table, build_boundary_mask,
    build_group_boundary_mask, filter_undefined, lag_table, rotate,
};
use ndarray::{Array1, Array2};
use rand::Rng;
use rand_distr::{Distribution, Normal};

fn random_panel(groups: usize, periods: usize) -> Table {
    let mut rng = rand::thread_rng();
    let normal = Normal::new(0.0, 1.0).unwrap();
    let data = Array2::from_shape_fn((groups * periods, 5), |(i, j)| match j {
        0 => i as f64,
        1 => (i % periods) as f64,
        2 => (i / periods) as f64,
        3 => normal.sample(&mut rng),
        _ => rng.r#gen::<f64>() * 100.0,
    });
    Table::new(data)
}

fn bench_boundary_masks(c: &mut Criterion) {
    let mut group = c.benchmark_group("boundary_mask");

    for (groups, periods) in [(100, 100), (1000, 250), (5000, 500)] {
        let table = random_panel(groups, periods);
        let rows = table.height();
        group.throughput(Throughput::Elements(rows as u64));

        group.bench_with_input(BenchmarkId::new("global_time", rows), &table, |b, table| {
            b.iter(|| build_boundary_mask(black_box(table.view().column(1)), Steps::new(3)));
        });
        group.bench_with_input(BenchmarkId::new("group_rank", rows), &table, |b, table| {
            b.iter(|| build_group_boundary_mask(black_box(table.view().column(2)), Steps::new(3)));
        });
    }

    group.finish();
}

fn bench_rotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotate");

    for size in [10_000, 100_000, 1_000_000] {
        let values = Array1::from_iter((0..size).map(|i| i as f64));
        group.throughput(Throughput::Elements(size as u64));

        for placement in [ComputePlacement::Sequential, ComputePlacement::Parallel] {
            group.bench_with_input(
                BenchmarkId::new(format!("{placement:?}"), size),
                &values,
                |b, values| b.iter(|| rotate(black_box(values.view()), Steps::new(1), placement)),
            );
        }
    }

    group.finish();
}

fn bench_lag_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("lag_table");
    group.sample_size(30);

    for (groups, periods) in [(100, 100), (1000, 250), (5000, 500)] {
        let table = random_panel(groups, periods);
        group.throughput(Throughput::Elements(table.height() as u64));

        for strategy in [ShiftStrategy::Rotate, ShiftStrategy::GroupOffset] {
            for compute_placement in [ComputePlacement::Sequential, ComputePlacement::Parallel] {
                let opts = ShiftOptions { strategy, compute_placement, ..ShiftOptions::with_steps(2) };
                group.bench_with_input(
                    BenchmarkId::new(
                        format!("{strategy:?}_{compute_placement:?}"),
                        format!("{groups}x{periods}"),
                    ),
                    &table,
                    |b, table| b.iter(|| lag_table(black_box(table.clone()), &opts).unwrap()),
                );
            }
        }
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_undefined");

    for (groups, periods) in [(1000, 250), (5000, 500)] {
        let opts = ShiftOptions { keep_all: true, ..ShiftOptions::with_steps(5) };
        let shifted = lag_table(random_panel(groups, periods), &opts).unwrap();
        group.throughput(Throughput::Elements(shifted.table.height() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{groups}x{periods}")),
            &shifted,
            |b, shifted| {
                b.iter(|| {
                    filter_undefined(black_box(shifted.table.clone()), shifted.shifted_col, false)
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_boundary_masks, bench_rotate, bench_lag_table, bench_filter);

criterion_main!(benches);
