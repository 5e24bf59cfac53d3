use smallvec::SmallVec;

use crate::core::{HoverState, SeriesPartition, format_date, is_mouse_over};
use crate::error::ChartResult;
use crate::render::{LinePrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::{Chart, FrameScheduler, TooltipContent, TooltipItem};

const GRID_LINE_WIDTH: f64 = 1.0;
const LABEL_INSET_PX: f64 = 5.0;
const LABEL_LIFT_PX: f64 = 10.0;

impl<R: Renderer, S: FrameScheduler + 'static> Chart<R, S> {
    /// Horizontal guides with value labels, `rows_count` rows spaced evenly
    /// below the top padding.
    pub(super) fn append_y_axis_primitives(&self, frame: &mut RenderFrame, y_max: f64, y_min: f64) {
        let rows = self.config.rows_count;
        let step = self.config.view_height() / rows as f64;
        let text_step = (y_max - y_min) / rows as f64;
        let padding = self.config.padding;

        for row in 1..=rows {
            let y = step * row as f64;
            let value = (y_max - text_step * row as f64).round() as i64;
            frame.texts.push(TextPrimitive::new(
                value.to_string(),
                LABEL_INSET_PX,
                y + padding - LABEL_LIFT_PX,
                self.config.label_font_size_px,
                self.label_color,
                TextHAlign::Left,
            ));
            frame.lines.push(LinePrimitive::new(
                0.0,
                y + padding,
                self.config.dpi_width(),
                y + padding,
                GRID_LINE_WIDTH,
                self.grid_color,
            ));
        }
    }

    /// Date labels on every `round(len / x_label_count)`-th column and the
    /// vertical hover guide.
    ///
    /// Returns tooltip content for the last hovered column.
    pub(super) fn append_x_axis_primitives(
        &self,
        frame: &mut RenderFrame,
        partition: &SeriesPartition<'_>,
        x_ratio: f64,
        hover: HoverState,
    ) -> ChartResult<Option<TooltipContent>> {
        let x_len = partition.x_axis.column_len();
        let label_step =
            ((x_len as f64 / self.config.x_label_count as f64).round() as usize).max(1);
        let dpi_width = self.config.dpi_width();
        let dpi_height = self.config.dpi_height();
        let padding = self.config.padding;
        let mut tooltip = None;

        for (idx, &timestamp) in partition.x_axis.values.iter().enumerate() {
            let x = (idx as f64 * x_ratio).floor();

            if idx % label_step == 0 {
                frame.texts.push(TextPrimitive::new(
                    format_date(timestamp, true)?,
                    x,
                    dpi_height - LABEL_LIFT_PX,
                    self.config.label_font_size_px,
                    self.label_color,
                    TextHAlign::Left,
                ));
            }

            if is_mouse_over(hover, x, x_len, dpi_width) {
                frame.lines.push(LinePrimitive::new(
                    x,
                    padding / 2.0,
                    x,
                    dpi_height - padding,
                    GRID_LINE_WIDTH,
                    self.grid_color,
                ));
                tooltip = Some(TooltipContent {
                    title: format_date(timestamp, true)?,
                    items: partition
                        .lines
                        .iter()
                        .filter_map(|line| {
                            line.values.get(idx).map(|&value| TooltipItem {
                                name: self.data.name_of(line.key).to_owned(),
                                value,
                                color: self.data.color_of(line.key).unwrap_or_default().to_owned(),
                            })
                        })
                        .collect::<SmallVec<_>>(),
                });
            }
        }

        Ok(tooltip)
    }
}
