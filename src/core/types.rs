use serde::{Deserialize, Serialize};

/// Canvas size in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Closed set of series kinds a dataset may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesKind {
    /// Numeric series plotted as a polyline.
    #[serde(rename = "line")]
    Line,
    /// Shared timestamp axis, in unix milliseconds.
    #[serde(rename = "x")]
    XAxis,
}

impl SeriesKind {
    #[must_use]
    pub fn is_line(self) -> bool {
        matches!(self, Self::Line)
    }
}

/// Hovered pointer position on the main canvas, in device pixels.
///
/// `x == None` means the pointer is outside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HoverState {
    pub x: Option<f64>,
}

impl HoverState {
    #[must_use]
    pub fn at(x: f64) -> Self {
        Self { x: Some(x) }
    }

    #[must_use]
    pub fn absent() -> Self {
        Self { x: None }
    }
}
