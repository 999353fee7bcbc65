// Copyright 2025 the Tickline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tickline_slider::{Slider, SliderConfig, visible_ticks};

fn bench_visible_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_ticks");
    for (name, config) in [
        ("over", SliderConfig::over()),
        ("linear", SliderConfig::linear()),
        ("linear_extended", SliderConfig::linear_extended()),
    ] {
        let domain = config.domain();
        // Sweep the full domain so the window clamps at both edges.
        let positions: Vec<f64> = (0..256)
            .map(|i| domain.start() + (i as f64 / 255.0) * (domain.end() - domain.start()))
            .collect();
        group.throughput(Throughput::Elements(positions.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut total = 0usize;
                for &pos in &positions {
                    let layout = visible_ticks(&config, black_box(pos), pos, 480.0);
                    total += layout.ticks.len();
                }
                black_box(total);
            })
        });
    }
    group.finish();
}

fn bench_drag_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_frame");
    group.bench_function("sample_and_layout", |b| {
        b.iter_batched(
            || {
                let mut slider = Slider::new(SliderConfig::linear()).unwrap();
                slider.on_drag_start();
                slider
            },
            |mut slider| {
                for i in 0..64 {
                    slider.on_drag_sample(-0.2, i * 16);
                    let ticks = slider.visible_ticks(480.0);
                    black_box(ticks.len());
                    black_box(slider.should_pulse_haptic());
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_fling_to_rest(c: &mut Criterion) {
    let mut group = c.benchmark_group("fling_to_rest");
    group.bench_function("decay_steps", |b| {
        b.iter_batched(
            || {
                let mut slider = Slider::new(SliderConfig::linear_extended()).unwrap();
                slider.on_drag_start();
                for i in 0..8 {
                    slider.on_drag_sample(-0.5, i * 16);
                }
                slider.on_drag_end_tracked();
                slider
            },
            |mut slider| {
                while !slider.is_settled() {
                    black_box(slider.step(16.0));
                    black_box(slider.visible_ticks(480.0).len());
                }
                black_box(slider.position());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_visible_ticks,
    bench_drag_frame,
    bench_fling_to_rest
);
criterion_main!(benches);
