// File: crates/mood-charts/benches/render_bench.rs
// Summary: Criterion benchmark for building and rendering both mood tracker charts.

use anyhow::Result;
use chart_core::RenderOptions;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mood_charts::benefits::{self, BenefitDataset};
use mood_charts::flow::{self, FlowDataset};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    let mut opts = RenderOptions::default();
    opts.width = 800;
    opts.height = 500;

    group.bench_function("benefits", |b| {
        b.iter(|| -> Result<()> {
            let chart = benefits::build_chart(&BenefitDataset::mood_tracker()?)?;
            black_box(chart.render_to_png_bytes(&opts)?);
            Ok(())
        });
    });
    group.bench_function("flow", |b| {
        b.iter(|| -> Result<()> {
            let chart = flow::build_chart(&FlowDataset::mood_tracker()?)?;
            black_box(chart.render_to_png_bytes(&opts)?);
            Ok(())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
