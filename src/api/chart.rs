use tracing::{debug, warn};

use crate::core::DataSet;
use crate::error::{ChartError, ChartResult};
use crate::interaction::InteractionMode;
use crate::render::{Color, Renderer};

use super::{
    ChartConfig, ChartState, FrameHandle, FrameScheduler, ManualFrameScheduler, ReactiveState,
    SeriesPalette, Slider, Tooltip,
};

/// Y-axis max bookkeeping across paints.
///
/// The first computed max is latched as the baseline. `resolve` is where a
/// transition from the baseline toward a new max would be interpolated;
/// transitions are disabled, so the new max is used as-is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct YAxisTarget {
    baseline: Option<f64>,
}

impl YAxisTarget {
    /// Latches `max` if nothing was latched yet. Returns `true` on the
    /// latching call.
    pub fn latch(&mut self, max: f64) -> bool {
        if self.baseline.is_some() {
            return false;
        }
        self.baseline = Some(max);
        true
    }

    #[must_use]
    pub fn baseline(&self) -> Option<f64> {
        self.baseline
    }

    #[must_use]
    pub fn resolve(&self, computed_max: f64) -> f64 {
        computed_max
    }
}

/// Main chart: owns the plot renderer, the slider, the tooltip and the
/// reactive view state.
///
/// Any write to the view state (pointer, selection, Y max) schedules one
/// coalesced repaint through `S`; the host calls
/// [`Chart::on_animation_frame`] when that frame fires.
pub struct Chart<R: Renderer, S: FrameScheduler + 'static> {
    pub(super) renderer: R,
    pub(super) data: DataSet,
    pub(super) config: ChartConfig,
    pub(super) palette: SeriesPalette,
    pub(super) grid_color: Color,
    pub(super) label_color: Color,
    pub(super) state: ReactiveState<ChartState, S>,
    pub(super) slider: Slider<R>,
    pub(super) tooltip: Tooltip,
    pub(super) y_axis: YAxisTarget,
    pub(super) mode: InteractionMode,
    pub(super) attached: bool,
    pub(super) paint_count: usize,
}

impl<R: Renderer, S: FrameScheduler + 'static> Chart<R, S> {
    /// Wires a chart against its plot renderer, the slider's renderer and a
    /// frame scheduler.
    ///
    /// The slider paints its trace immediately and delivers its initial
    /// window, which already schedules the first repaint.
    pub fn new(
        renderer: R,
        slider_renderer: R,
        scheduler: S,
        data: DataSet,
        config: ChartConfig,
    ) -> ChartResult<Self> {
        config.validate()?;
        let palette = SeriesPalette::from_data(&data)?;
        let grid_color = config.grid_color()?;
        let label_color = config.label_color()?;
        let mut slider = Slider::new(slider_renderer, &data, &config)?;
        let state = ReactiveState::new(ChartState::default(), scheduler);

        let selection = state.clone();
        slider.subscribe(move |window| selection.set_selection(window));

        debug!(
            width = config.width,
            height = config.height,
            columns = data.columns().len(),
            "chart created"
        );

        Ok(Self {
            renderer,
            tooltip: Tooltip::new(config.width),
            data,
            config,
            palette,
            grid_color,
            label_color,
            state,
            slider,
            y_axis: YAxisTarget::default(),
            mode: InteractionMode::Idle,
            attached: true,
            paint_count: 0,
        })
    }

    /// Performs the first paint synchronously.
    pub fn init(&mut self) -> ChartResult<()> {
        if !self.attached {
            return Err(ChartError::Destroyed);
        }
        debug!("chart init");
        self.paint()
    }

    /// Cancels the pending repaint, stops pointer handling and tears down
    /// the slider.
    pub fn destroy(&mut self) {
        if !self.attached {
            return;
        }
        if let Some(handle) = self.state.cancel_pending() {
            debug!(frame = handle.id(), "pending repaint cancelled");
        }
        self.attached = false;
        self.mode = InteractionMode::Idle;
        self.slider.destroy();
        debug!("chart destroyed");
    }

    /// Host callback for a fired display-refresh request.
    ///
    /// Returns `Ok(false)` for stale handles and for destroyed charts.
    pub fn on_animation_frame(&mut self, handle: FrameHandle) -> ChartResult<bool> {
        if !self.attached {
            warn!(frame = handle.id(), "animation frame delivered to destroyed chart");
            return Ok(false);
        }
        if !self.state.frame_fired(handle) {
            return Ok(false);
        }
        self.paint()?;
        Ok(true)
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    #[must_use]
    pub fn data(&self) -> &DataSet {
        &self.data
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &ReactiveState<ChartState, S> {
        &self.state
    }

    #[must_use]
    pub fn slider(&self) -> &Slider<R> {
        &self.slider
    }

    /// Slider access for forwarding slider pointer events.
    pub fn slider_mut(&mut self) -> &mut Slider<R> {
        &mut self.slider
    }

    #[must_use]
    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Tooltip access for feeding back the measured element size.
    pub fn tooltip_mut(&mut self) -> &mut Tooltip {
        &mut self.tooltip
    }

    #[must_use]
    pub fn y_axis_target(&self) -> YAxisTarget {
        self.y_axis
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Number of completed paints.
    #[must_use]
    pub fn paint_count(&self) -> usize {
        self.paint_count
    }
}

impl<R: Renderer> Chart<R, ManualFrameScheduler> {
    /// Fires every frame the manual scheduler holds, as one refresh tick.
    /// Returns how many paints ran.
    pub fn run_due_frames(&mut self) -> ChartResult<usize> {
        let due = self.state.with_scheduler_mut(ManualFrameScheduler::take_due);
        let mut painted = 0;
        for handle in due {
            if self.on_animation_frame(handle)? {
                painted += 1;
            }
        }
        Ok(painted)
    }
}
