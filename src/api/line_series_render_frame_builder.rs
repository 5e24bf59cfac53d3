use crate::core::{HoverState, SeriesPartition, is_mouse_over, to_coords};
use crate::render::{CirclePrimitive, Color, PolylinePrimitive, RenderFrame, Renderer};

use super::{Chart, FrameScheduler};

const MARKER_STROKE_WIDTH: f64 = 2.0;

#[derive(Debug, Clone, Copy)]
pub(super) struct LineSeriesRenderContext {
    pub x_ratio: f64,
    pub y_ratio: f64,
    pub y_min: f64,
    pub hover: HoverState,
}

impl<R: Renderer, S: FrameScheduler + 'static> Chart<R, S> {
    /// Strokes every line series and marks at most one hovered sample per
    /// series (the first matching column).
    pub(super) fn append_line_series_primitives(
        &self,
        frame: &mut RenderFrame,
        partition: &SeriesPartition<'_>,
        ctx: LineSeriesRenderContext,
    ) {
        let dpi_width = self.config.dpi_width();
        let project = to_coords(
            ctx.x_ratio,
            ctx.y_ratio,
            self.config.dpi_height(),
            self.config.padding,
            ctx.y_min,
        );

        for line in &partition.lines {
            let color = self.palette.color(line.key);
            let coords = project(line.values);

            if let Some(&center) = coords
                .iter()
                .find(|point| is_mouse_over(ctx.hover, point.x, coords.len(), dpi_width))
            {
                frame.circles.push(CirclePrimitive {
                    center,
                    radius: self.config.circle_radius,
                    fill_color: Color::WHITE,
                    stroke_color: color,
                    stroke_width: MARKER_STROKE_WIDTH,
                });
            }

            frame
                .polylines
                .push(PolylinePrimitive::new(coords, self.config.line_width, color));
        }
    }
}
