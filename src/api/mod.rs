//! Stateful chart surface: the main chart, its range slider and tooltip,
//! and the observable state that couples pointer input to repaints.

mod axis_render_frame_builder;
mod chart;
mod chart_config;
mod frame_scheduler;
mod interaction_controller;
mod line_series_render_frame_builder;
mod reactive_state;
mod render_frame_builder;
mod series_style;
mod slider;
mod tooltip;

pub use chart::{Chart, YAxisTarget};
pub use chart_config::{ChartConfig, SliderConfig};
pub use frame_scheduler::{FrameHandle, FrameScheduler, ManualFrameScheduler};
pub use reactive_state::{ChartState, ReactiveState};
pub use series_style::SeriesPalette;
pub use slider::{PositionUpdate, Slider, SliderLayout};
pub use tooltip::{Tooltip, TooltipContent, TooltipItem, TooltipView};
