use serde::{Deserialize, Serialize};

/// Opaque id of one requested display-refresh callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameHandle(u64);

impl FrameHandle {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Host hook for display-refresh scheduling.
///
/// `request_frame` asks the host to call back (through
/// [`super::Chart::on_animation_frame`]) on its next refresh tick;
/// `cancel_frame` withdraws a request that has not fired yet.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Deterministic scheduler for tests and hosts that drive their own loop.
///
/// It records requests instead of talking to a display; the host polls
/// [`ManualFrameScheduler::take_due`] once per tick.
#[derive(Debug, Default)]
pub struct ManualFrameScheduler {
    next_id: u64,
    pending: Vec<FrameHandle>,
    requested_count: usize,
    cancelled_count: usize,
}

impl ManualFrameScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of frames requested since construction.
    #[must_use]
    pub fn requested_count(&self) -> usize {
        self.requested_count
    }

    #[must_use]
    pub fn cancelled_count(&self) -> usize {
        self.cancelled_count
    }

    #[must_use]
    pub fn pending(&self) -> &[FrameHandle] {
        &self.pending
    }

    /// Drains every request that is due on this tick.
    pub fn take_due(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending)
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle::new(self.next_id);
        self.pending.push(handle);
        self.requested_count += 1;
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.pending.len();
        self.pending.retain(|pending| *pending != handle);
        if self.pending.len() != before {
            self.cancelled_count += 1;
        }
    }
}
