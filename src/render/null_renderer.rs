use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer used by tests and by hosts without a drawing backend.
///
/// It still validates every frame so invalid geometry surfaces as an error,
/// and keeps the last accepted frame for inspection.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl NullRenderer {
    #[must_use]
    pub fn last_line_count(&self) -> usize {
        self.last_frame.as_ref().map_or(0, |frame| frame.lines.len())
    }

    #[must_use]
    pub fn last_text_count(&self) -> usize {
        self.last_frame.as_ref().map_or(0, |frame| frame.texts.len())
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
