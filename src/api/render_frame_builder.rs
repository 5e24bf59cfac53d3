use tracing::trace;

use crate::core::{
    SeriesPartition, compute_boundaries, compute_x_ratio, compute_y_ratio, visible_columns,
    widen_flat_bounds,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::line_series_render_frame_builder::LineSeriesRenderContext;
use super::{Chart, FrameScheduler, TooltipContent};

impl<R: Renderer, S: FrameScheduler + 'static> Chart<R, S> {
    /// Builds the full frame for the current state.
    ///
    /// Returns the frame plus the tooltip content of the hovered column, if
    /// the pointer is over a sample.
    pub(super) fn build_frame(&mut self) -> ChartResult<(RenderFrame, Option<TooltipContent>)> {
        let hover = self.state.hover();
        let selection = self.state.selection();
        let columns = visible_columns(&self.data, selection);

        let (y_min, y_max) = compute_boundaries(&columns, self.data.types())
            .map(widen_flat_bounds)
            .ok_or(ChartError::MissingBoundaries)?;

        if self.y_axis.latch(y_max) {
            self.state.set_max(y_max);
        }
        let y_max = self.y_axis.resolve(y_max);

        let partition = SeriesPartition::split(&self.data, &columns).ok_or_else(|| {
            ChartError::InvalidData("visible slice has no x-axis column".to_owned())
        })?;
        let y_ratio = compute_y_ratio(self.config.view_height(), y_max, y_min);
        let x_ratio = compute_x_ratio(self.config.view_width(), partition.x_axis.column_len());

        trace!(
            left = selection.left,
            right = selection.right,
            samples = partition.x_axis.values.len(),
            y_min,
            y_max,
            "paint"
        );

        let mut frame = RenderFrame::new(self.config.viewport());
        self.append_y_axis_primitives(&mut frame, y_max, y_min);
        let tooltip = self.append_x_axis_primitives(&mut frame, &partition, x_ratio, hover)?;
        self.append_line_series_primitives(
            &mut frame,
            &partition,
            LineSeriesRenderContext {
                x_ratio,
                y_ratio,
                y_min,
                hover,
            },
        );

        Ok((frame, tooltip))
    }

    /// One paint cycle: build, hand the frame to the renderer, then update
    /// the tooltip from the hit test.
    pub(super) fn paint(&mut self) -> ChartResult<()> {
        let (frame, tooltip) = self.build_frame()?;
        self.renderer.render(&frame)?;
        self.finish_paint(tooltip);
        Ok(())
    }

    fn finish_paint(&mut self, tooltip: Option<TooltipContent>) {
        if let (Some(content), Some(anchor)) = (tooltip, self.state.pointer().tooltip) {
            self.tooltip.show(anchor, content);
        }
        self.paint_count += 1;
    }

    /// Paints the current state into an external cairo context.
    ///
    /// Used by toolkit draw callbacks; does not consume a scheduled frame.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        if !self.attached {
            return Err(ChartError::Destroyed);
        }
        let (frame, tooltip) = self.build_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.finish_paint(tooltip);
        Ok(())
    }
}
