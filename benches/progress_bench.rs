//! Benchmarks for scroll mapping and the per-frame body.
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scrollstory::animation::easing::EasingFunction;
use scrollstory::engine::StoryEngine;
use scrollstory::layout::StaticLayout;
use scrollstory::options::{Options, ProgressOptions};
use scrollstory::progress::{
    AnimationSequenceState, ProgressMapper, ScrollMetrics, SectionBands,
};
use scrollstory::render::NullRenderer;
use scrollstory::ui::NullUi;

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
    c.bench_function("cubic_hermite_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))))
    });
}

fn mapper_benchmark(c: &mut Criterion) {
    let mut mapper = ProgressMapper::new(&ProgressOptions::default());
    mapper.set_bands(SectionBands::from_offsets(
        &[0.0, 800.0, 1600.0, 2400.0, 3200.0],
        4000.0,
    ));
    let mut state = AnimationSequenceState::new();

    c.bench_function("progress_mapper_sweep", |b| {
        b.iter(|| {
            for step in 0..100 {
                let metrics = ScrollMetrics {
                    scroll_y: f64::from(step) * 32.0,
                    viewport_height: 800.0,
                    document_height: 4000.0,
                };
                let _ = black_box(mapper.update(&mut state, &metrics));
            }
        });
    });
}

fn frame_benchmark(c: &mut Criterion) {
    let layout = StaticLayout::new(1280, 800);
    let mut engine = StoryEngine::new(
        &layout,
        Options::default(),
        None,
        NullRenderer,
        NullUi,
    );
    let _ = engine.seek(2000.0, 800.0);

    c.bench_function("engine_frame_all_sections", |b| {
        b.iter(|| black_box(engine.frame_with_delta(black_box(0.016))));
    });
}

criterion_group!(benches, easing_benchmark, mapper_benchmark, frame_benchmark);
criterion_main!(benches);
