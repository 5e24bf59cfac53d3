use serde::{Deserialize, Serialize};

use crate::core::HoverState;

/// Hover state machine of the main chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    #[default]
    Idle,
    Hovering,
}

/// Top-left corner of the canvas in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasOrigin {
    pub left: f64,
    pub top: f64,
}

impl CanvasOrigin {
    #[must_use]
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Tooltip anchor in logical (CSS) pixels relative to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipAnchor {
    pub left: f64,
    pub top: f64,
}

/// Pointer-derived part of the chart state: hover coordinates for hit
/// testing plus the anchor the tooltip is positioned from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerState {
    pub coords: HoverState,
    pub tooltip: Option<TooltipAnchor>,
}

impl PointerState {
    /// Converts a client-space pointer position into canvas state.
    ///
    /// Hover X is scaled to device pixels; the tooltip anchor stays in
    /// logical pixels.
    #[must_use]
    pub fn from_client(
        client_x: f64,
        client_y: f64,
        origin: CanvasOrigin,
        device_pixel_ratio: f64,
    ) -> Self {
        let left = client_x - origin.left;
        let top = client_y - origin.top;
        Self {
            coords: HoverState::at(left * device_pixel_ratio),
            tooltip: Some(TooltipAnchor { left, top }),
        }
    }
}

/// Slider region grabbed by a pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragHandle {
    /// Whole window: moves both edges.
    Window,
    /// Left edge: resizes from the left.
    Left,
    /// Right edge: resizes from the right.
    Right,
}

impl DragHandle {
    /// Maps the overlay element's `data-type` attribute value.
    #[must_use]
    pub fn from_data_type(value: &str) -> Option<Self> {
        match value {
            "window" => Some(Self::Window),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Window offsets in logical slider pixels captured at drag start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowOffsets {
    pub left: f64,
    pub right: f64,
    pub width: f64,
}

/// One in-flight slider drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    pub handle: DragHandle,
    pub start_x: f64,
    pub start: WindowOffsets,
}

impl DragSession {
    #[must_use]
    pub fn new(handle: DragHandle, start_x: f64, start: WindowOffsets) -> Self {
        Self {
            handle,
            start_x,
            start,
        }
    }

    /// Requested `(left, right)` offsets for the pointer at `current_x`.
    ///
    /// `delta = start_x - current_x`. Returns `None` while the pointer has
    /// not moved from the drag origin.
    #[must_use]
    pub fn requested_offsets(&self, current_x: f64, slider_width: f64) -> Option<(f64, f64)> {
        let delta = self.start_x - current_x;
        if delta == 0.0 {
            return None;
        }

        let start = self.start;
        let offsets = match self.handle {
            DragHandle::Window => {
                let left = start.left - delta;
                (left, slider_width - left - start.width)
            }
            DragHandle::Left => {
                let width = start.width + delta;
                let left = slider_width - width - start.right;
                (left, slider_width - width - left)
            }
            DragHandle::Right => (
                start.left,
                slider_width - (start.width - delta) - start.left,
            ),
        };
        Some(offsets)
    }
}
