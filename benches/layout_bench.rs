// Benchmark for per-frame timeline computations
// Measures spacing and tap-animation sampling, both run every frame

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use egui_timeline::prelude::*;
use egui_timeline::services::animation::TapAnimation;
use egui_timeline::services::layout::compute_spacing;

fn sample_events(count: usize) -> Vec<TimelineEvent> {
    (0..count)
        .map(|i| TimelineEvent::new(format!("Event {}", i), "2025").with_important(i % 5 == 0))
        .collect()
}

fn bench_spacing(c: &mut Criterion) {
    let style = TimelineStyle::default();
    let mut group = c.benchmark_group("compute_spacing");

    for count in [10, 100, 1000] {
        let events = sample_events(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &events, |b, events| {
            b.iter(|| compute_spacing(black_box(events), &style, Some(count / 2), 1200.0))
        });
    }

    group.finish();
}

fn bench_animation_sample(c: &mut Criterion) {
    let style = TimelineStyle::default();
    let mut group = c.benchmark_group("tap_animation_sample");

    for kind in TimelineAnimation::ALL {
        let anim = TapAnimation::new(kind, 0.0);
        group.bench_function(kind.as_str(), |b| {
            b.iter(|| anim.sample(black_box(0.15), &style))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_spacing, bench_animation_sample);
criterion_main!(benches);
