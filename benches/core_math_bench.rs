use criterion::{Criterion, criterion_group, criterion_main};
use indexmap::IndexMap;
use slider_chart::api::{Chart, ChartConfig, ManualFrameScheduler};
use slider_chart::core::{
    DataSet, SelectionWindow, Series, SeriesKind, compute_boundaries, compute_x_ratio,
    compute_y_ratio, to_coords, visible_columns,
};
use slider_chart::interaction::CanvasOrigin;
use slider_chart::render::NullRenderer;
use std::hint::black_box;

fn generated_data(samples: usize) -> DataSet {
    let x: Vec<f64> = (0..samples)
        .map(|i| 1_577_836_800_000.0 + i as f64 * 86_400_000.0)
        .collect();
    let y0: Vec<f64> = (0..samples)
        .map(|i| 50.0 + (i as f64 * 0.07).sin() * 30.0)
        .collect();
    let y1: Vec<f64> = (0..samples)
        .map(|i| 40.0 + (i as f64 * 0.11).cos() * 25.0)
        .collect();

    DataSet::new(
        vec![
            Series::new("x", x),
            Series::new("y0", y0),
            Series::new("y1", y1),
        ],
        IndexMap::from([
            ("x".to_owned(), SeriesKind::XAxis),
            ("y0".to_owned(), SeriesKind::Line),
            ("y1".to_owned(), SeriesKind::Line),
        ]),
        IndexMap::from([
            ("y0".to_owned(), "#3DC23F".to_owned()),
            ("y1".to_owned(), "#F34C44".to_owned()),
        ]),
        IndexMap::new(),
    )
    .expect("valid generated data")
}

fn bench_visible_boundaries_10k(c: &mut Criterion) {
    let data = generated_data(10_000);
    let window = SelectionWindow::new(12.5, 87.5);

    c.bench_function("visible_boundaries_10k", |b| {
        b.iter(|| {
            let columns = visible_columns(black_box(&data), black_box(window));
            let _ = compute_boundaries(&columns, data.types());
        })
    });
}

fn bench_to_coords_10k(c: &mut Criterion) {
    let data = generated_data(10_000);
    let series = &data.columns()[1];
    let x_ratio = compute_x_ratio(1_200.0, series.column_len());
    let y_ratio = compute_y_ratio(320.0, 80.0, 20.0);
    let project = to_coords(x_ratio, y_ratio, 400.0, 40.0, 20.0);

    c.bench_function("to_coords_10k", |b| {
        b.iter(|| {
            let _ = project(black_box(&series.values));
        })
    });
}

fn bench_hovered_paint_2k(c: &mut Criterion) {
    let mut chart = Chart::new(
        NullRenderer::default(),
        NullRenderer::default(),
        ManualFrameScheduler::new(),
        generated_data(2_000),
        ChartConfig::default(),
    )
    .expect("chart init");
    chart.init().expect("init");
    chart.pointer_move(300.0, 100.0, CanvasOrigin::default());

    c.bench_function("hovered_paint_2k", |b| {
        b.iter(|| {
            chart.pointer_move(black_box(301.0), 100.0, CanvasOrigin::default());
            let _ = chart.run_due_frames().expect("paint");
        })
    });
}

criterion_group!(
    benches,
    bench_visible_boundaries_10k,
    bench_to_coords_10k,
    bench_hovered_paint_2k
);
criterion_main!(benches);
