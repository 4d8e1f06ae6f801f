// Copyright 2026 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Vec2;
use pinmap_gestures::{WheelDirection, WheelRecognizer};
use pinmap_viewport::MapViewport;

fn fresh_viewport() -> MapViewport {
    let mut viewport = MapViewport::new();
    viewport.attach_wheel(WheelRecognizer::new());
    viewport
}

fn bench_pan_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("pan_updates");

    for &n in &[64_usize, 1024] {
        group.bench_function(format!("drag_{n}_samples"), |b| {
            b.iter_batched(
                fresh_viewport,
                |mut viewport| {
                    viewport.pan_begin();
                    for i in 0..n {
                        let i = i as f64;
                        viewport.pan_update(Vec2::new(i * 0.7, i * -0.3));
                    }
                    viewport.pan_end();
                    black_box(viewport.render_transform())
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_pinch_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("pinch_updates");

    group.bench_function("pinch_256_samples", |b| {
        b.iter_batched(
            fresh_viewport,
            |mut viewport| {
                viewport.pinch_begin();
                for i in 0..256 {
                    // Sweep the ratio through the clamped region and back.
                    let ratio = 1.0 + (i as f64) * 0.02;
                    viewport.pinch_update(ratio);
                }
                viewport.pinch_end();
                black_box(viewport.scale())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_wheel_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("wheel_steps");

    group.bench_function("alternating_256_steps", |b| {
        b.iter_batched(
            fresh_viewport,
            |mut viewport| {
                for i in 0..256 {
                    let direction = if i % 3 == 0 {
                        WheelDirection::Out
                    } else {
                        WheelDirection::In
                    };
                    viewport.wheel_step(direction);
                }
                black_box(viewport.scale())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_mixed_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_frame");

    // One simulated frame of a simultaneous drag-and-pinch, with the
    // observer attached, which is the hot path during interaction.
    group.bench_function("pan_pinch_with_observer", |b| {
        b.iter_batched(
            || {
                let mut viewport = fresh_viewport();
                viewport.set_on_change(|t| {
                    black_box(t);
                });
                viewport.pan_begin();
                viewport.pinch_begin();
                viewport
            },
            |mut viewport| {
                for i in 0..64 {
                    let i = i as f64;
                    viewport.pan_update(Vec2::new(i, -i));
                    viewport.pinch_update(1.0 + i * 0.01);
                }
                viewport.pan_end();
                viewport.pinch_end();
                black_box(viewport.render_transform())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_pan_updates,
    bench_pinch_updates,
    bench_wheel_steps,
    bench_mixed_frame
);
criterion_main!(benches);
