use tracing::trace;

use crate::interaction::{CanvasOrigin, InteractionMode, PointerState};
use crate::render::Renderer;

use super::{Chart, FrameScheduler};

impl<R: Renderer, S: FrameScheduler + 'static> Chart<R, S> {
    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.mode
    }

    /// Pointer moved over the main canvas whose top-left corner sits at
    /// `origin` in client coordinates.
    ///
    /// Writes hover and tooltip anchor in one state write, which schedules
    /// the next repaint.
    pub fn pointer_move(&mut self, client_x: f64, client_y: f64, origin: CanvasOrigin) {
        if !self.attached {
            return;
        }
        let pointer = PointerState::from_client(
            client_x,
            client_y,
            origin,
            self.config.device_pixel_ratio,
        );
        trace!(hover_x = ?pointer.coords.x, "pointer move");
        self.state.set_pointer(pointer);
        self.mode = InteractionMode::Hovering;
    }

    /// Pointer left the main canvas: clears hover and hides the tooltip,
    /// which the next paint would not do on its own.
    pub fn pointer_leave(&mut self) {
        if !self.attached {
            return;
        }
        trace!("pointer leave");
        self.state.clear_hover();
        self.tooltip.hide();
        self.mode = InteractionMode::Idle;
    }
}
