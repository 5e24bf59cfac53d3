use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Visual constants of one chart and its slider.
///
/// Fixed for the lifetime of a chart instance. The type is serializable so
/// hosts can keep a chart setup next to the data it renders; the `Default`
/// impl carries the stock 600x200 layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Logical (CSS) width of the main canvas.
    pub width: f64,
    /// Logical (CSS) height of the main canvas.
    pub height: f64,
    #[serde(default = "default_device_pixel_ratio")]
    pub device_pixel_ratio: f64,
    /// Vertical plot padding in device pixels.
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default = "default_rows_count")]
    pub rows_count: usize,
    #[serde(default = "default_x_label_count")]
    pub x_label_count: usize,
    #[serde(default = "default_circle_radius")]
    pub circle_radius: f64,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default = "default_grid_color")]
    pub grid_color: String,
    #[serde(default = "default_label_color")]
    pub label_color: String,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
    #[serde(default)]
    pub slider: SliderConfig,
}

/// Layout constants of the range slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Logical (CSS) height of the slider canvas.
    pub height: f64,
    /// Padding passed to the trace projection; negative values let the
    /// trace bleed past the canvas bottom.
    pub padding: f64,
    /// Minimum window width as a fraction of the slider width.
    pub min_window_ratio: f64,
    /// Initial right mask width as a fraction of the slider width.
    pub initial_right_mask_ratio: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            height: 40.0,
            padding: -5.0,
            min_window_ratio: 0.05,
            initial_right_mask_ratio: 0.3,
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 200.0,
            device_pixel_ratio: default_device_pixel_ratio(),
            padding: default_padding(),
            rows_count: default_rows_count(),
            x_label_count: default_x_label_count(),
            circle_radius: default_circle_radius(),
            line_width: default_line_width(),
            grid_color: default_grid_color(),
            label_color: default_label_color(),
            label_font_size_px: default_label_font_size_px(),
            slider: SliderConfig::default(),
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> ChartResult<()> {
        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("device_pixel_ratio", self.device_pixel_ratio),
            ("circle_radius", self.circle_radius),
            ("line_width", self.line_width),
            ("label_font_size_px", self.label_font_size_px),
            ("slider.height", self.slider.height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "config `{field}` must be finite and > 0"
                )));
            }
        }
        if !self.padding.is_finite() || self.padding < 0.0 || self.view_height() <= 0.0 {
            return Err(ChartError::InvalidData(
                "config `padding` must leave a positive plot height".to_owned(),
            ));
        }
        if !self.slider.padding.is_finite() {
            return Err(ChartError::InvalidData(
                "config `slider.padding` must be finite".to_owned(),
            ));
        }
        if self.rows_count == 0 || self.x_label_count == 0 {
            return Err(ChartError::InvalidData(
                "config `rows_count` and `x_label_count` must be > 0".to_owned(),
            ));
        }
        for (field, ratio) in [
            ("slider.min_window_ratio", self.slider.min_window_ratio),
            (
                "slider.initial_right_mask_ratio",
                self.slider.initial_right_mask_ratio,
            ),
        ] {
            if !ratio.is_finite() || !(0.0..1.0).contains(&ratio) {
                return Err(ChartError::InvalidData(format!(
                    "config `{field}` must be in [0, 1)"
                )));
            }
        }
        if 1.0 - self.slider.initial_right_mask_ratio < self.slider.min_window_ratio {
            return Err(ChartError::InvalidData(
                "initial slider window is narrower than the minimum window".to_owned(),
            ));
        }
        let viewport = self.viewport();
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.grid_color()?;
        self.label_color()?;
        Ok(())
    }

    #[must_use]
    pub fn dpi_width(&self) -> f64 {
        self.width * self.device_pixel_ratio
    }

    #[must_use]
    pub fn dpi_height(&self) -> f64 {
        self.height * self.device_pixel_ratio
    }

    /// Plot height between top and bottom padding, in device pixels.
    #[must_use]
    pub fn view_height(&self) -> f64 {
        self.dpi_height() - self.padding * 2.0
    }

    #[must_use]
    pub fn view_width(&self) -> f64 {
        self.dpi_width()
    }

    /// Main canvas size in device pixels.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.dpi_width().round() as u32, self.dpi_height().round() as u32)
    }

    /// Slider width in logical pixels (same as the main canvas).
    #[must_use]
    pub fn slider_width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn slider_dpi_height(&self) -> f64 {
        self.slider.height * self.device_pixel_ratio
    }

    /// Slider canvas size in device pixels.
    #[must_use]
    pub fn slider_viewport(&self) -> Viewport {
        Viewport::new(
            self.dpi_width().round() as u32,
            self.slider_dpi_height().round() as u32,
        )
    }

    pub fn grid_color(&self) -> ChartResult<Color> {
        Color::from_css_hex(&self.grid_color)
    }

    pub fn label_color(&self) -> ChartResult<Color> {
        Color::from_css_hex(&self.label_color)
    }
}

fn default_device_pixel_ratio() -> f64 {
    2.0
}

fn default_padding() -> f64 {
    40.0
}

fn default_rows_count() -> usize {
    5
}

fn default_x_label_count() -> usize {
    6
}

fn default_circle_radius() -> f64 {
    8.0
}

fn default_line_width() -> f64 {
    4.0
}

fn default_grid_color() -> String {
    "#bbb".to_owned()
}

fn default_label_color() -> String {
    "#96a2aa".to_owned()
}

fn default_label_font_size_px() -> f64 {
    20.0
}

#[cfg(test)]
mod tests {
    use super::ChartConfig;
    use crate::core::Viewport;

    #[test]
    fn default_config_matches_stock_layout() {
        let config = ChartConfig::default();
        config.validate().expect("default config is valid");
        assert_eq!(config.viewport(), Viewport::new(1200, 400));
        assert_eq!(config.view_height(), 320.0);
        assert_eq!(config.slider_viewport(), Viewport::new(1200, 80));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: ChartConfig =
            serde_json::from_str(r#"{"width": 800.0, "height": 300.0}"#).expect("config");
        assert_eq!(config.rows_count, 5);
        assert_eq!(config.slider.min_window_ratio, 0.05);
        assert_eq!(config.viewport(), Viewport::new(1600, 600));
    }

    #[test]
    fn padding_that_swallows_plot_is_rejected() {
        let config = ChartConfig {
            padding: 250.0,
            ..ChartConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
