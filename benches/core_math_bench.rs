use criterion::{Criterion, criterion_group, criterion_main};
use cryptoview::api::{CandlestickChart, ChartOptions};
use cryptoview::core::{
    CanvasSize, Candlestick, GridTuning, OhlcSample, Viewport, nearest_index, plan_grid, project,
};
use cryptoview::interaction::{ChartEvent, PointerTarget};
use cryptoview::render::RecordingSurface;
use cryptoview::Chart;
use std::hint::black_box;

fn generated_candles(count: usize) -> Vec<OhlcSample> {
    (0..count)
        .map(|i| {
            let t = i as f64 * 60.0;
            let base = 100.0 + i as f64 * 0.05;
            let open = base;
            let close = if i % 2 == 0 { base + 1.0 } else { base - 1.0 };
            let low = open.min(close) - 0.75;
            let high = open.max(close) + 0.75;
            OhlcSample::new(t, open, high, low, close).expect("valid generated candle")
        })
        .collect()
}

fn bench_candle_projection_10k(c: &mut Criterion) {
    let candles = generated_candles(10_000);
    let viewport = Viewport::new(-18_000.0, 1_920.0).expect("viewport");
    let canvas = CanvasSize::new(1_920.0, 1_080.0);

    c.bench_function("candle_projection_10k", |b| {
        b.iter(|| {
            let _ = project(
                &Candlestick,
                black_box(candles.as_slice()),
                black_box(viewport),
                black_box(canvas),
                black_box(1.5),
                GridTuning::default(),
            )
            .expect("projection should succeed");
        })
    });
}

fn bench_grid_planning(c: &mut Criterion) {
    c.bench_function("grid_plan_zoomed", |b| {
        b.iter(|| {
            let _ = plan_grid(
                black_box(30_412.7),
                black_box(29_877.1),
                black_box(1_080.0),
                black_box(0.4),
                GridTuning::default(),
            )
            .expect("grid plan should succeed");
        })
    });
}

fn bench_nearest_index(c: &mut Criterion) {
    let viewport = Viewport::new(-7_500.0, 1_600.0).expect("viewport");

    c.bench_function("nearest_index_sweep", |b| {
        b.iter(|| {
            for x in (0..1_600).step_by(8) {
                black_box(nearest_index(black_box(x as f64), viewport, 5_000));
            }
        })
    });
}

fn bench_hover_event_2k(c: &mut Criterion) {
    let mut chart: CandlestickChart<RecordingSurface> = Chart::with_history(
        RecordingSurface::new(1_600.0, 900.0),
        generated_candles(2_000),
        &ChartOptions::default(),
    )
    .expect("chart init");

    c.bench_function("hover_event_2k", |b| {
        b.iter(|| {
            chart
                .handle_event(ChartEvent::PointerMove {
                    target: PointerTarget::Chart,
                    x: black_box(800.0),
                    y: 450.0,
                    movement_x: 0.0,
                    movement_y: 0.0,
                })
                .expect("hover should succeed");
            chart.surface_mut().take_commands();
        })
    });
}

criterion_group!(
    benches,
    bench_candle_projection_10k,
    bench_grid_planning,
    bench_nearest_index,
    bench_hover_event_2k
);
criterion_main!(benches);
