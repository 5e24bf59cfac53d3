use chrono::DateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::SeriesKind;
use crate::error::{ChartError, ChartResult};

/// Smallest column length that still yields a non-degenerate x ratio
/// (key entry plus two samples).
pub const MIN_COLUMN_LEN: usize = 3;

/// One named series. `values` excludes the leading key entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub key: String,
    pub values: Vec<f64>,
}

impl Series {
    #[must_use]
    pub fn new(key: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            key: key.into(),
            values,
        }
    }

    /// Length counted the way the dataset stores it: key entry plus samples.
    #[must_use]
    pub fn column_len(&self) -> usize {
        self.values.len() + 1
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
enum RawCell {
    Key(String),
    Value(f64),
}

#[derive(Debug, Deserialize)]
struct RawDataSet {
    columns: Vec<Vec<RawCell>>,
    types: IndexMap<String, SeriesKind>,
    #[serde(default)]
    colors: IndexMap<String, String>,
    #[serde(default)]
    names: IndexMap<String, String>,
}

/// Immutable bundle of series plus per-key metadata.
///
/// Construction validates the shape once; paint code relies on these
/// guarantees: exactly one x-axis series, at least one line series, equal
/// column lengths of at least [`MIN_COLUMN_LEN`].
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    columns: Vec<Series>,
    types: IndexMap<String, SeriesKind>,
    colors: IndexMap<String, String>,
    names: IndexMap<String, String>,
}

impl DataSet {
    pub fn new(
        columns: Vec<Series>,
        types: IndexMap<String, SeriesKind>,
        colors: IndexMap<String, String>,
        names: IndexMap<String, String>,
    ) -> ChartResult<Self> {
        let data_set = Self {
            columns,
            types,
            colors,
            names,
        };
        data_set.validate()?;
        debug!(
            columns = data_set.columns.len(),
            column_len = data_set.column_len(),
            "data set loaded"
        );
        Ok(data_set)
    }

    /// Parses the `{ columns, types, colors, names }` JSON layout where each
    /// column is `["key", v1, v2, ...]`.
    pub fn from_json(json: &str) -> ChartResult<Self> {
        let raw: RawDataSet = serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidData(format!("malformed data set json: {err}")))?;

        let mut columns = Vec::with_capacity(raw.columns.len());
        for (idx, column) in raw.columns.into_iter().enumerate() {
            let mut cells = column.into_iter();
            let key = match cells.next() {
                Some(RawCell::Key(key)) => key,
                _ => {
                    return Err(ChartError::InvalidData(format!(
                        "column #{idx} must start with a string key"
                    )));
                }
            };
            let values = cells
                .map(|cell| match cell {
                    RawCell::Value(value) => Ok(value),
                    RawCell::Key(text) => Err(ChartError::InvalidData(format!(
                        "column `{key}` contains non-numeric entry `{text}`"
                    ))),
                })
                .collect::<ChartResult<Vec<_>>>()?;
            columns.push(Series { key, values });
        }

        Self::new(columns, raw.types, raw.colors, raw.names)
    }

    fn validate(&self) -> ChartResult<()> {
        let Some(first) = self.columns.first() else {
            return Err(ChartError::InvalidData(
                "data set must contain at least one column".to_owned(),
            ));
        };
        let column_len = first.column_len();
        if column_len < MIN_COLUMN_LEN {
            return Err(ChartError::InvalidData(format!(
                "columns must hold at least {} samples",
                MIN_COLUMN_LEN - 1
            )));
        }

        let mut x_count = 0usize;
        let mut line_count = 0usize;
        for series in &self.columns {
            if series.column_len() != column_len {
                return Err(ChartError::InvalidData(format!(
                    "column `{}` has length {} but expected {column_len}",
                    series.key,
                    series.column_len()
                )));
            }
            if series.values.iter().any(|value| !value.is_finite()) {
                return Err(ChartError::InvalidData(format!(
                    "column `{}` contains non-finite values",
                    series.key
                )));
            }
            match self.types.get(&series.key) {
                Some(SeriesKind::XAxis) => {
                    if let Some(value) = series
                        .values
                        .iter()
                        .find(|&&value| DateTime::from_timestamp_millis(value as i64).is_none())
                    {
                        return Err(ChartError::InvalidData(format!(
                            "x column `{}` holds timestamp {value} ms outside the date range",
                            series.key
                        )));
                    }
                    x_count += 1;
                }
                Some(SeriesKind::Line) => {
                    if !self.colors.contains_key(&series.key) {
                        return Err(ChartError::InvalidData(format!(
                            "line column `{}` has no color",
                            series.key
                        )));
                    }
                    line_count += 1;
                }
                None => {
                    return Err(ChartError::InvalidData(format!(
                        "column `{}` has no declared type",
                        series.key
                    )));
                }
            }
        }

        if x_count != 1 {
            return Err(ChartError::InvalidData(format!(
                "data set must contain exactly one x column, found {x_count}"
            )));
        }
        if line_count == 0 {
            return Err(ChartError::InvalidData(
                "data set must contain at least one line column".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn columns(&self) -> &[Series] {
        &self.columns
    }

    #[must_use]
    pub fn types(&self) -> &IndexMap<String, SeriesKind> {
        &self.types
    }

    /// Shared column length (key entry included).
    #[must_use]
    pub fn column_len(&self) -> usize {
        self.columns.first().map_or(0, Series::column_len)
    }

    #[must_use]
    pub fn kind_of(&self, key: &str) -> Option<SeriesKind> {
        self.types.get(key).copied()
    }

    #[must_use]
    pub fn color_of(&self, key: &str) -> Option<&str> {
        self.colors.get(key).map(String::as_str)
    }

    /// Human-readable label; falls back to the key when no name is declared.
    #[must_use]
    pub fn name_of<'a>(&'a self, key: &'a str) -> &'a str {
        self.names.get(key).map_or(key, String::as_str)
    }

    #[must_use]
    pub fn line_series(&self) -> impl Iterator<Item = &Series> {
        self.columns
            .iter()
            .filter(|series| self.kind_of(&series.key).is_some_and(SeriesKind::is_line))
    }

    #[must_use]
    pub fn x_series(&self) -> Option<&Series> {
        self.columns
            .iter()
            .find(|series| self.kind_of(&series.key) == Some(SeriesKind::XAxis))
    }
}
