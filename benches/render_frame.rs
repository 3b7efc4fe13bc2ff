//! Rasterization cost per plot style at window and thumbnail sizes.
//!
//! Run with: cargo bench --bench render_frame

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sorting_visualizer::PlotStyleKinds;
use sorting_visualizer::core::actions::render_frame::render_frame::{FramePalette, render_frame};
use sorting_visualizer::core::data::frame::Frame;
use sorting_visualizer::core::data::highlight::Highlight;
use std::hint::black_box;
use std::time::Duration;

const CANVASES: &[(u32, u32)] = &[(320, 180), (800, 600)];

fn sample_frame(size: u32) -> Frame {
    let values = (1..=size).rev().collect();
    Frame::new(values, Highlight::Pair(3, 17), Duration::ZERO)
}

fn bench_styles(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    let palette = FramePalette::default();
    let frame = sample_frame(300);

    for &(width, height) in CANVASES {
        for &style in PlotStyleKinds::ALL {
            let id = BenchmarkId::new(style.display_name(), format!("{}x{}", width, height));

            group.bench_with_input(id, &frame, |b, frame| {
                b.iter(|| {
                    let buffer = render_frame(frame, style, width, height, &palette).unwrap();
                    black_box(buffer)
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_styles);
criterion_main!(benches);
