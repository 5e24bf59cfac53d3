//! Observable chart state with coalesced repaint scheduling.
//!
//! Every write through [`ReactiveState::set`] marks the state dirty and asks
//! the [`FrameScheduler`] for one refresh tick, unless a tick is already
//! outstanding. Reads never schedule anything. There is no other
//! invalidation path: a write through this wrapper is what makes the chart
//! dirty.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{HoverState, SelectionWindow};
use crate::interaction::PointerState;

use super::{FrameHandle, FrameScheduler};

/// Mutable view state of one chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartState {
    pub pointer: PointerState,
    pub selection: SelectionWindow,
    /// Latched Y-axis max target; `None` until the first paint.
    pub max: Option<f64>,
}

struct ReactiveInner<T, S> {
    value: T,
    scheduler: S,
    pending: Option<FrameHandle>,
}

/// Shared handle to a state value whose writes schedule repaints.
///
/// Clones share the same value and the same pending frame, so a
/// subscription callback can hold one while the chart holds another.
pub struct ReactiveState<T, S: FrameScheduler> {
    inner: Rc<RefCell<ReactiveInner<T, S>>>,
}

impl<T, S: FrameScheduler> Clone for ReactiveState<T, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T, S: FrameScheduler> ReactiveState<T, S> {
    #[must_use]
    pub fn new(value: T, scheduler: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ReactiveInner {
                value,
                scheduler,
                pending: None,
            })),
        }
    }

    /// Reads through to the wrapped value.
    pub fn get<U>(&self, read: impl FnOnce(&T) -> U) -> U {
        read(&self.inner.borrow().value)
    }

    /// Applies `write` and schedules at most one repaint.
    pub fn set(&self, write: impl FnOnce(&mut T)) {
        let mut inner = self.inner.borrow_mut();
        write(&mut inner.value);
        if inner.pending.is_none() {
            let handle = inner.scheduler.request_frame();
            trace!(frame = handle.id(), "repaint scheduled");
            inner.pending = Some(handle);
        }
    }

    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.inner.borrow().pending
    }

    /// Marks `handle` as fired. Returns `false` for stale or unknown handles.
    pub fn frame_fired(&self, handle: FrameHandle) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.pending == Some(handle) {
            inner.pending = None;
            true
        } else {
            false
        }
    }

    /// Cancels the outstanding repaint, if any.
    pub fn cancel_pending(&self) -> Option<FrameHandle> {
        let mut inner = self.inner.borrow_mut();
        let handle = inner.pending.take()?;
        inner.scheduler.cancel_frame(handle);
        Some(handle)
    }

    pub fn with_scheduler<U>(&self, read: impl FnOnce(&S) -> U) -> U {
        read(&self.inner.borrow().scheduler)
    }

    pub fn with_scheduler_mut<U>(&self, write: impl FnOnce(&mut S) -> U) -> U {
        write(&mut self.inner.borrow_mut().scheduler)
    }
}

impl<T: Clone, S: FrameScheduler> ReactiveState<T, S> {
    #[must_use]
    pub fn snapshot(&self) -> T {
        self.inner.borrow().value.clone()
    }
}

impl<S: FrameScheduler> ReactiveState<ChartState, S> {
    #[must_use]
    pub fn pointer(&self) -> PointerState {
        self.get(|state| state.pointer)
    }

    #[must_use]
    pub fn hover(&self) -> HoverState {
        self.get(|state| state.pointer.coords)
    }

    #[must_use]
    pub fn selection(&self) -> SelectionWindow {
        self.get(|state| state.selection)
    }

    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.get(|state| state.max)
    }

    pub fn set_pointer(&self, pointer: PointerState) {
        self.set(|state| state.pointer = pointer);
    }

    pub fn clear_hover(&self) {
        self.set(|state| state.pointer.coords = HoverState::absent());
    }

    pub fn set_selection(&self, selection: SelectionWindow) {
        self.set(|state| state.selection = selection);
    }

    pub fn set_max(&self, max: f64) {
        self.set(|state| state.max = Some(max));
    }
}
