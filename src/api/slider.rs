use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{
    DataSet, SelectionWindow, SeriesSlice, compute_boundaries, compute_x_ratio, compute_y_ratio,
    to_coords, widen_flat_bounds,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{DragHandle, DragSession, WindowOffsets};
use crate::render::{PolylinePrimitive, RenderFrame, Renderer};

use super::{ChartConfig, SeriesPalette};

/// Overlay geometry of the slider in logical pixels.
///
/// Hosts apply these as the widths/offsets of the left mask, the draggable
/// window and the right mask.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SliderLayout {
    pub left_mask_width: f64,
    pub window_left: f64,
    pub window_right: f64,
    pub window_width: f64,
    pub right_mask_width: f64,
}

/// Result of one `set_position` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionUpdate {
    /// Offsets applied as requested.
    Applied,
    /// Left edge ran past zero; the left mask collapsed to zero width.
    ClampedLeft,
    /// Right edge ran past the end; the right mask collapsed to zero width.
    ClampedRight,
    /// Window would be narrower than the minimum; only the width was reset.
    Rejected,
}

type WindowSubscriber = Box<dyn FnMut(SelectionWindow)>;

/// Range selector drawn under the main chart.
///
/// Owns its drag state, its overlay layout and a single subscriber slot:
/// `subscribe` replaces any previous callback.
pub struct Slider<R: Renderer> {
    renderer: R,
    width: f64,
    min_width: f64,
    layout: SliderLayout,
    drag: Option<DragSession>,
    subscriber: Option<WindowSubscriber>,
    attached: bool,
}

impl<R: Renderer> fmt::Debug for Slider<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("width", &self.width)
            .field("min_width", &self.min_width)
            .field("layout", &self.layout)
            .field("drag", &self.drag)
            .field("subscribed", &self.subscriber.is_some())
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}

impl<R: Renderer> Slider<R> {
    /// Builds the slider and paints the full-dataset trace once.
    pub fn new(renderer: R, data: &DataSet, config: &ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let width = config.slider_width();
        let mut slider = Self {
            renderer,
            width,
            min_width: width * config.slider.min_window_ratio,
            layout: SliderLayout::default(),
            drag: None,
            subscriber: None,
            attached: true,
        };

        slider.set_position(0.0, width * config.slider.initial_right_mask_ratio);
        slider.paint_trace(data, config)?;
        debug!(width, min_width = slider.min_width, "slider created");
        Ok(slider)
    }

    fn paint_trace(&mut self, data: &DataSet, config: &ChartConfig) -> ChartResult<()> {
        let palette = SeriesPalette::from_data(data)?;
        let columns: Vec<SeriesSlice<'_>> =
            data.columns().iter().map(SeriesSlice::whole).collect();
        let (y_min, y_max) = compute_boundaries(&columns, data.types())
            .map(widen_flat_bounds)
            .ok_or(ChartError::MissingBoundaries)?;

        let dpi_height = config.slider_dpi_height();
        let y_ratio = compute_y_ratio(dpi_height, y_max, y_min);
        let x_ratio = compute_x_ratio(config.dpi_width(), data.column_len());
        let project = to_coords(x_ratio, y_ratio, dpi_height, config.slider.padding, y_min);

        let mut frame = RenderFrame::new(config.slider_viewport());
        for series in data.line_series() {
            frame.polylines.push(PolylinePrimitive::new(
                project(&series.values),
                config.line_width,
                palette.color(&series.key),
            ));
        }
        self.renderer.render(&frame)
    }

    /// Applies requested mask offsets, enforcing the minimum window width and
    /// the slider edges.
    pub fn set_position(&mut self, left: f64, right: f64) -> PositionUpdate {
        let width = self.width - right - left;

        if width < self.min_width {
            self.layout.window_width = self.min_width;
            return PositionUpdate::Rejected;
        }
        if left < 0.0 {
            self.layout.window_left = 0.0;
            self.layout.left_mask_width = 0.0;
            return PositionUpdate::ClampedLeft;
        }
        if right < 0.0 {
            self.layout.window_right = 0.0;
            self.layout.right_mask_width = 0.0;
            return PositionUpdate::ClampedRight;
        }

        self.layout = SliderLayout {
            left_mask_width: left,
            window_left: left,
            window_right: right,
            window_width: width,
            right_mask_width: right,
        };
        PositionUpdate::Applied
    }

    /// Current window as percentages of the slider width, derived from the
    /// mask widths.
    #[must_use]
    pub fn position(&self) -> SelectionWindow {
        let left = self.layout.left_mask_width;
        let right = self.width - self.layout.right_mask_width;
        SelectionWindow::new(left * 100.0 / self.width, right * 100.0 / self.width)
    }

    #[must_use]
    pub fn layout(&self) -> SliderLayout {
        self.layout
    }

    #[must_use]
    pub fn min_width(&self) -> f64 {
        self.min_width
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Registers the window subscriber, replacing any previous one, and
    /// delivers the current window right away.
    pub fn subscribe(&mut self, mut callback: impl FnMut(SelectionWindow) + 'static) {
        let position = self.position();
        debug!(left = position.left, right = position.right, "slider subscribed");
        callback(position);
        self.subscriber = Some(Box::new(callback));
    }

    /// Pointer-down on the slider root. `handle` is the overlay under the
    /// pointer, `None` for the trace canvas or the masks.
    pub fn pointer_down(&mut self, handle: Option<DragHandle>, page_x: f64) {
        if !self.attached {
            return;
        }
        let start = WindowOffsets {
            left: self.layout.window_left,
            right: self.layout.window_right,
            width: self.layout.window_width,
        };
        self.drag = handle.map(|handle| DragSession::new(handle, page_x, start));
    }

    /// Document-level pointer move. Returns `true` when the window changed
    /// and the subscriber was notified.
    pub fn pointer_move(&mut self, page_x: f64) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        let Some((left, right)) = drag.requested_offsets(page_x, self.width) else {
            return false;
        };

        let update = self.set_position(left, right);
        trace!(?drag.handle, left, right, ?update, "slider drag");
        if update == PositionUpdate::Rejected {
            return false;
        }
        self.notify();
        true
    }

    /// Document-level pointer up; ends any drag.
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    fn notify(&mut self) {
        let position = self.position();
        if let Some(callback) = self.subscriber.as_mut() {
            callback(position);
        }
    }

    /// Detaches pointer handling; later events are ignored.
    pub fn destroy(&mut self) {
        self.attached = false;
        self.drag = None;
        self.subscriber = None;
        debug!("slider destroyed");
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use approx::assert_relative_eq;

    use super::{PositionUpdate, Slider};
    use crate::api::ChartConfig;
    use crate::core::{DataSet, SelectionWindow};
    use crate::interaction::DragHandle;
    use crate::render::NullRenderer;

    fn data() -> DataSet {
        DataSet::from_json(
            r##"{
                "columns": [["x", 1, 2, 3, 4, 5], ["y0", 3, 9, 4, 7, 5]],
                "types": {"x": "x", "y0": "line"},
                "colors": {"y0": "#3DC23F"},
                "names": {"y0": "Joined"}
            }"##,
        )
        .expect("data")
    }

    fn slider() -> Slider<NullRenderer> {
        Slider::new(NullRenderer::default(), &data(), &ChartConfig::default()).expect("slider")
    }

    #[test]
    fn starts_with_seventy_percent_window() {
        let slider = slider();
        assert_eq!(slider.position(), SelectionWindow::new(0.0, 70.0));
        assert_relative_eq!(slider.layout().window_width, 420.0);
        assert_relative_eq!(slider.min_width(), 30.0);
    }

    #[test]
    fn trace_is_painted_once_at_construction() {
        let slider = slider();
        assert_eq!(slider.renderer().render_count, 1);
        let frame = slider.renderer().last_frame.as_ref().expect("frame");
        assert_eq!(frame.polylines.len(), 1);
        assert_eq!(frame.polylines[0].points.len(), 5);
    }

    #[test]
    fn narrow_request_only_touches_width() {
        let mut slider = slider();
        let before = slider.layout();
        assert_eq!(slider.set_position(290.0, 290.0), PositionUpdate::Rejected);

        let after = slider.layout();
        assert_eq!(after.left_mask_width, before.left_mask_width);
        assert_eq!(after.right_mask_width, before.right_mask_width);
        assert_eq!(after.window_width, 30.0);
    }

    #[test]
    fn left_overshoot_collapses_left_mask() {
        let mut slider = slider();
        assert_eq!(slider.set_position(-10.0, 100.0), PositionUpdate::ClampedLeft);
        assert_eq!(slider.layout().left_mask_width, 0.0);
    }

    #[test]
    fn last_subscriber_wins() {
        let mut slider = slider();
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&first);
        slider.subscribe(move |window| sink.borrow_mut().push(window));
        let sink = Rc::clone(&second);
        slider.subscribe(move |window| sink.borrow_mut().push(window));

        slider.pointer_down(Some(DragHandle::Window), 100.0);
        assert!(slider.pointer_move(150.0));

        assert_eq!(first.borrow().len(), 1);
        assert_eq!(second.borrow().len(), 2);
        assert_eq!(second.borrow()[1], SelectionWindow::new(50.0 / 6.0, 470.0 / 6.0));
    }

    #[test]
    fn destroyed_slider_ignores_pointer_down() {
        let mut slider = slider();
        slider.destroy();
        slider.pointer_down(Some(DragHandle::Left), 10.0);
        assert!(!slider.is_dragging());
        assert!(!slider.pointer_move(40.0));
    }
}
