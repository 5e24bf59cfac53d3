use indexmap::IndexMap;

use crate::core::DataSet;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Parsed stroke colors of every line series, keyed by series key.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPalette {
    colors: IndexMap<String, Color>,
}

impl SeriesPalette {
    pub fn from_data(data: &DataSet) -> ChartResult<Self> {
        let mut colors = IndexMap::new();
        for series in data.line_series() {
            let css = data.color_of(&series.key).ok_or_else(|| {
                ChartError::InvalidData(format!("line column `{}` has no color", series.key))
            })?;
            colors.insert(series.key.clone(), Color::from_css_hex(css)?);
        }
        Ok(Self { colors })
    }

    /// Stroke color of `key`; black for keys outside the palette.
    #[must_use]
    pub fn color(&self, key: &str) -> Color {
        self.colors
            .get(key)
            .copied()
            .unwrap_or(Color::rgb(0.0, 0.0, 0.0))
    }
}
