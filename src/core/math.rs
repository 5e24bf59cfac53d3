//! Scale and coordinate math shared by the main chart and the slider trace.
//!
//! Every function here is pure. Caller preconditions (non-zero heights,
//! slices of at least three column entries) are documented per function and
//! enforced upstream by
//! [`crate::core::SelectionWindow`] and [`crate::core::DataSet`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{HoverState, SeriesKind, SeriesSlice};

/// Device-pixel coordinate of one plotted sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Global `(min, max)` across the values of every `line` series.
///
/// Series of any other kind are skipped. Returns `None` ("undefined bounds")
/// when no line series contributes a value.
#[must_use]
pub fn compute_boundaries(
    columns: &[SeriesSlice<'_>],
    types: &IndexMap<String, SeriesKind>,
) -> Option<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;

    for column in columns {
        if types.get(column.key) != Some(&SeriesKind::Line) {
            continue;
        }
        for &value in column.values {
            bounds = Some(match bounds {
                None => (value, value),
                Some((min, max)) => (
                    if min > value { value } else { min },
                    if max < value { value } else { max },
                ),
            });
        }
    }

    bounds
}

/// Widens flat bounds (`min == max`) by one unit upward so Y ratios stay
/// non-zero.
#[must_use]
pub fn widen_flat_bounds((min, max): (f64, f64)) -> (f64, f64) {
    if max > min { (min, max) } else { (min, min + 1.0) }
}

/// Value units per device pixel on the Y axis.
///
/// `view_height_px` must be non-zero.
#[must_use]
pub fn compute_y_ratio(view_height_px: f64, max: f64, min: f64) -> f64 {
    (max - min) / view_height_px
}

/// Device pixels per sample step on the X axis.
///
/// `column_len` counts the key entry, so the `- 2` accounts for the key and
/// for the first sample sitting at `x = 0`. Callers keep `column_len > 2`.
#[must_use]
pub fn compute_x_ratio(view_width_px: f64, column_len: usize) -> f64 {
    view_width_px / (column_len as f64 - 2.0)
}

/// Builds a projector mapping series values to device-pixel points.
///
/// Sample `j` (0-based, key already stripped) lands at
/// `x = floor(j * x_ratio)` and
/// `y = floor(dpi_height - padding - (value - y_min) / y_ratio)`.
/// The output holds one point per sample, in input order.
pub fn to_coords(
    x_ratio: f64,
    y_ratio: f64,
    dpi_height: f64,
    padding: f64,
    y_min: f64,
) -> impl Fn(&[f64]) -> Vec<PixelPoint> {
    move |values| {
        values
            .iter()
            .enumerate()
            .map(|(idx, &value)| {
                PixelPoint::new(
                    (idx as f64 * x_ratio).floor(),
                    (dpi_height - padding - (value - y_min) / y_ratio).floor(),
                )
            })
            .collect()
    }
}

/// Whether the hovered pixel lies within half a sample width of `x`.
///
/// A sample width is `canvas_width_px / length`. Always `false` when the
/// pointer is outside the canvas.
#[must_use]
pub fn is_mouse_over(hover: HoverState, x: f64, length: usize, canvas_width_px: f64) -> bool {
    let Some(hover_x) = hover.x else {
        return false;
    };
    let sample_width = canvas_width_px / length as f64;
    (x - hover_x).abs() < sample_width / 2.0
}
