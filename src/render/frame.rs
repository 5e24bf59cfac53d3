use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, LinePrimitive, PolylinePrimitive, TextPrimitive};

/// Primitive groups of a frame, one per vector on [`RenderFrame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveLayer {
    Lines,
    Texts,
    Polylines,
    Circles,
}

/// Backend-agnostic scene for one full repaint of one canvas.
///
/// Backends clear the whole canvas, then paint the groups in
/// [`RenderFrame::DRAW_ORDER`]: grid lines and labels sit under the series
/// traces, and hover markers sit on top of every trace.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    pub const DRAW_ORDER: [PrimitiveLayer; 4] = [
        PrimitiveLayer::Lines,
        PrimitiveLayer::Texts,
        PrimitiveLayer::Polylines,
        PrimitiveLayer::Circles,
    ];

    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            polylines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_polyline(mut self, polyline: PolylinePrimitive) -> Self {
        self.polylines.push(polyline);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.polylines.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{PrimitiveLayer, RenderFrame};
    use crate::core::{PixelPoint, Viewport};
    use crate::render::{Color, LinePrimitive, PolylinePrimitive};

    #[test]
    fn frame_with_nan_polyline_fails_validation() {
        let frame = RenderFrame::new(Viewport::new(1200, 400)).with_polyline(
            PolylinePrimitive::new(
                vec![PixelPoint::new(0.0, f64::NAN)],
                4.0,
                Color::rgb(0.0, 0.0, 0.0),
            ),
        );
        assert!(frame.validate().is_err());
    }

    #[test]
    fn empty_frame_on_zero_viewport_is_rejected() {
        let frame = RenderFrame::new(Viewport::new(0, 400));
        assert!(frame.is_empty());
        assert!(frame.validate().is_err());
    }

    #[test]
    fn valid_line_frame_passes() {
        let frame = RenderFrame::new(Viewport::new(1200, 400)).with_line(LinePrimitive::new(
            0.0,
            104.0,
            1200.0,
            104.0,
            1.0,
            Color::rgb(0.5, 0.5, 0.5),
        ));
        assert!(!frame.is_empty());
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn axis_labels_are_painted_before_series_traces() {
        let order = RenderFrame::DRAW_ORDER;
        let position = |layer| order.iter().position(|&candidate| candidate == layer);
        assert!(position(PrimitiveLayer::Texts) < position(PrimitiveLayer::Polylines));
        assert!(position(PrimitiveLayer::Lines) < position(PrimitiveLayer::Polylines));
        assert_eq!(order.last(), Some(&PrimitiveLayer::Circles));
    }
}
