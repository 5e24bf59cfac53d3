//! slider-chart: headless time-series line chart with a linked range slider.
//!
//! The crate computes everything a canvas chart needs (visible slice,
//! boundaries, ratios, pixel coordinates, hover hit tests, slider drag
//! geometry) and hands backends a deterministic `RenderFrame` per repaint.
//! Repaints are coalesced: any number of state writes before the next
//! display refresh produce exactly one paint.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{Chart, ChartConfig, Slider};
pub use error::{ChartError, ChartResult};
