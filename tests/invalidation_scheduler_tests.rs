use slider_chart::ChartError;
use slider_chart::api::{Chart, ChartConfig, FrameHandle, ManualFrameScheduler};
use slider_chart::core::DataSet;
use slider_chart::interaction::{CanvasOrigin, DragHandle};
use slider_chart::render::NullRenderer;

const TEN_DAYS: &str = include_str!("fixtures/ten_days.json");

fn build_chart() -> Chart<NullRenderer, ManualFrameScheduler> {
    let data = DataSet::from_json(TEN_DAYS).expect("data set");
    Chart::new(
        NullRenderer::default(),
        NullRenderer::default(),
        ManualFrameScheduler::new(),
        data,
        ChartConfig::default(),
    )
    .expect("chart init")
}

fn requested(chart: &Chart<NullRenderer, ManualFrameScheduler>) -> usize {
    chart
        .state()
        .with_scheduler(ManualFrameScheduler::requested_count)
}

#[test]
fn construction_schedules_one_frame_from_slider_subscription() {
    let mut chart = build_chart();
    assert_eq!(requested(&chart), 1);
    assert!(chart.state().pending_frame().is_some());

    chart.init().expect("init");
    assert_eq!(requested(&chart), 1);
    assert_eq!(chart.renderer().render_count, 1);
}

#[test]
fn writes_within_one_turn_coalesce_into_one_paint() {
    let mut chart = build_chart();
    chart.init().expect("init");
    chart.run_due_frames().expect("frames");
    let paints_before = chart.paint_count();

    let origin = CanvasOrigin::default();
    chart.pointer_move(10.0, 10.0, origin);
    chart.pointer_move(40.0, 12.0, origin);
    chart.slider_mut().pointer_down(Some(DragHandle::Window), 100.0);
    chart.slider_mut().pointer_move(160.0);
    chart.pointer_move(90.0, 14.0, origin);

    assert_eq!(requested(&chart), 2);
    assert_eq!(chart.run_due_frames().expect("frames"), 1);
    assert_eq!(chart.paint_count(), paints_before + 1);
    assert_eq!(chart.run_due_frames().expect("frames"), 0);

    let state = chart.state().snapshot();
    assert_eq!(state.pointer.coords.x, Some(180.0));
    assert_eq!(state.selection.left, 10.0);
}

#[test]
fn stale_frame_handle_does_not_paint() {
    let mut chart = build_chart();
    chart.init().expect("init");

    let painted = chart
        .on_animation_frame(FrameHandle::new(9_999))
        .expect("stale frame");
    assert!(!painted);
    assert_eq!(chart.paint_count(), 1);
}

#[test]
fn destroy_cancels_pending_frame_and_detaches_input() {
    let mut chart = build_chart();
    let pending = chart.state().pending_frame().expect("pending");

    chart.destroy();
    assert!(!chart.is_attached());
    assert!(chart.state().pending_frame().is_none());
    assert_eq!(
        chart
            .state()
            .with_scheduler(ManualFrameScheduler::cancelled_count),
        1
    );
    assert!(!chart.slider().is_attached());

    chart.pointer_move(50.0, 50.0, CanvasOrigin::default());
    chart.pointer_leave();
    assert_eq!(requested(&chart), 1);

    assert!(!chart.on_animation_frame(pending).expect("late frame"));
    assert!(matches!(chart.init(), Err(ChartError::Destroyed)));
    assert_eq!(chart.renderer().render_count, 0);
}

#[test]
fn destroyed_slider_no_longer_drives_selection() {
    let mut chart = build_chart();
    chart.init().expect("init");
    chart.destroy();

    let slider = chart.slider_mut();
    slider.pointer_down(Some(DragHandle::Window), 100.0);
    assert!(!slider.pointer_move(200.0));
    assert_eq!(chart.state().selection().right, 70.0);
}
