use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::interaction::TooltipAnchor;

/// One series row of the tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipItem {
    pub name: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipContent {
    pub title: String,
    pub items: SmallVec<[TooltipItem; 4]>,
}

/// What the host should display for the tooltip element, in logical pixels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipView {
    pub visible: bool,
    pub left: f64,
    pub top: f64,
    pub content: Option<TooltipContent>,
}

/// Tooltip placement over a chart of `chart_width` logical pixels.
///
/// The element size is measured by the host and fed back through
/// [`Tooltip::set_measured_size`]; placement uses the last measured size.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    chart_width: f64,
    measured_width: f64,
    measured_height: f64,
    view: TooltipView,
}

impl Tooltip {
    #[must_use]
    pub fn new(chart_width: f64) -> Self {
        Self {
            chart_width,
            measured_width: 0.0,
            measured_height: 0.0,
            view: TooltipView::default(),
        }
    }

    pub fn set_measured_size(&mut self, width: f64, height: f64) {
        self.measured_width = width.max(0.0);
        self.measured_height = height.max(0.0);
    }

    /// Replaces the content and positions the tooltip above `anchor`,
    /// flipping to the anchor's left once it passes the chart midpoint.
    pub fn show(&mut self, anchor: TooltipAnchor, content: TooltipContent) {
        self.view.content = None;

        let (width, height) = (self.measured_width, self.measured_height);
        self.view.visible = true;
        self.view.top = anchor.top - height;
        self.view.left = if self.chart_width / 2.0 > anchor.left {
            anchor.left + width / 4.0
        } else {
            anchor.left - width * 1.2
        };
        self.view.content = Some(content);
    }

    /// Hides the element; content is kept until the next `show`.
    pub fn hide(&mut self) {
        self.view.visible = false;
    }

    #[must_use]
    pub fn view(&self) -> &TooltipView {
        &self.view
    }
}
