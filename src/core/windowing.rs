use serde::{Deserialize, Serialize};

use crate::core::data_set::MIN_COLUMN_LEN;
use crate::core::{DataSet, Series, SeriesKind};

/// Visible sub-range of the dataset as `[left%, right%]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionWindow {
    pub left: f64,
    pub right: f64,
}

impl SelectionWindow {
    /// Creates a window with both edges clamped into `[0, 100]`.
    #[must_use]
    pub fn new(left: f64, right: f64) -> Self {
        Self {
            left: left.clamp(0.0, 100.0),
            right: right.clamp(0.0, 100.0),
        }
    }

    #[must_use]
    pub fn full() -> Self {
        Self::new(0.0, 100.0)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    /// Translates the percentages into column indices over `column_len`
    /// entries (key entry at index 0).
    ///
    /// Indices are `round(len * pct / 100)`. The result always spans at
    /// least [`MIN_COLUMN_LEN`] column entries once the key is re-attached,
    /// widening to the right first and then to the left.
    #[must_use]
    pub fn to_index_range(self, column_len: usize) -> IndexRange {
        let len = column_len as f64;
        let left_index = ((len * self.left / 100.0).round() as usize).min(column_len);
        let right_index = ((len * self.right / 100.0).round() as usize).min(column_len);

        let min_samples = MIN_COLUMN_LEN - 1;
        let mut start = left_index.max(1);
        let mut end = right_index;
        if end < start + min_samples {
            end = (start + min_samples).min(column_len);
            start = start.min(end.saturating_sub(min_samples)).max(1);
        }

        IndexRange { start, end }
    }
}

impl Default for SelectionWindow {
    fn default() -> Self {
        Self::full()
    }
}

/// Half-open range `[start, end)` of column indices, `start >= 1` so the
/// key entry is never treated as a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRange {
    pub start: usize,
    pub end: usize,
}

impl IndexRange {
    /// Column length of a slice cut with this range, key entry included.
    #[must_use]
    pub fn column_len(self) -> usize {
        self.end.saturating_sub(self.start) + 1
    }
}

/// Borrowed view of one series: its key and a run of its values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSlice<'a> {
    pub key: &'a str,
    pub values: &'a [f64],
}

impl<'a> SeriesSlice<'a> {
    #[must_use]
    pub fn new(key: &'a str, values: &'a [f64]) -> Self {
        Self { key, values }
    }

    #[must_use]
    pub fn whole(series: &'a Series) -> Self {
        Self::new(&series.key, &series.values)
    }

    /// Cuts `series` to `range`, keeping the key attached even when the
    /// left edge of the range skips the key slot.
    #[must_use]
    pub fn cut(series: &'a Series, range: IndexRange) -> Self {
        let start = range.start.saturating_sub(1).min(series.values.len());
        let end = (range.end.saturating_sub(1)).clamp(start, series.values.len());
        Self::new(&series.key, &series.values[start..end])
    }

    #[must_use]
    pub fn column_len(&self) -> usize {
        self.values.len() + 1
    }
}

/// Series of one slice split by kind, in dataset order.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPartition<'a> {
    pub x_axis: SeriesSlice<'a>,
    pub lines: Vec<SeriesSlice<'a>>,
}

impl<'a> SeriesPartition<'a> {
    /// Splits `columns` by the kinds declared in `data`. Returns `None` when
    /// no x-axis column is present.
    #[must_use]
    pub fn split(data: &DataSet, columns: &[SeriesSlice<'a>]) -> Option<Self> {
        let mut x_axis = None;
        let mut lines = Vec::with_capacity(columns.len().saturating_sub(1));
        for column in columns {
            match data.kind_of(column.key) {
                Some(SeriesKind::Line) => lines.push(*column),
                Some(SeriesKind::XAxis) if x_axis.is_none() => x_axis = Some(*column),
                _ => {}
            }
        }
        x_axis.map(|x_axis| Self { x_axis, lines })
    }
}

/// Slices every dataset column to the visible selection.
#[must_use]
pub fn visible_columns(data: &DataSet, window: SelectionWindow) -> Vec<SeriesSlice<'_>> {
    let range = window.to_index_range(data.column_len());
    data.columns()
        .iter()
        .map(|series| SeriesSlice::cut(series, range))
        .collect()
}
