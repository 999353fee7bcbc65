// Copyright 2025 the Tickline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use tickline_scale::{Interval, PiecewiseMap, Span};

fn span(d0: f64, d1: f64, c0: f64, c1: f64) -> Span {
    let domain = Interval::new(d0, d1).unwrap();
    let codomain = Interval::new(c0, c1).unwrap();
    Span::linear(domain, codomain)
}

fn gen_map(spans: usize) -> PiecewiseMap {
    let mut table = Vec::with_capacity(spans);
    for i in 0..spans {
        let d0 = i as f64 * 10.0;
        let d1 = d0 + 10.0;
        // Each span doubles the density of the previous one.
        let c0 = if i == 0 { 0.0 } else { (1 << i) as f64 * 10.0 };
        let c1 = (1 << (i + 1)) as f64 * 10.0;
        table.push(span(d0, d1, c0, c1));
    }
    PiecewiseMap::new(table).unwrap()
}

fn gen_positions(count: usize, domain_end: f64) -> Vec<f64> {
    // Deterministic sweep that covers every span plus out-of-domain probes.
    (0..count)
        .map(|i| (i as f64 / count as f64) * (domain_end + 10.0) - 5.0)
        .collect()
}

fn bench_value_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_at");
    for &spans in &[1usize, 4, 16] {
        let map = gen_map(spans);
        let positions = gen_positions(1024, spans as f64 * 10.0);
        group.throughput(Throughput::Elements(positions.len() as u64));
        group.bench_function(format!("spans_{}", spans), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &x in &positions {
                    acc += map.value_at(black_box(x));
                }
                black_box(acc);
            })
        });
    }
    group.finish();
}

fn bench_slope_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("slope_at");
    for &spans in &[1usize, 4, 16] {
        let map = gen_map(spans);
        let positions = gen_positions(1024, spans as f64 * 10.0);
        group.throughput(Throughput::Elements(positions.len() as u64));
        group.bench_function(format!("spans_{}", spans), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &x in &positions {
                    acc += map.slope_at(black_box(x));
                }
                black_box(acc);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_value_at, bench_slope_at);
criterion_main!(benches);
