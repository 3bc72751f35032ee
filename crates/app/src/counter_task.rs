//! Cancellable frame chain for one counter run.
//!
//! A [`CounterTask`] owns the handle of its pending frame. Each frame either
//! requests the next one (replacing the handle) or ends the chain. Cancelling
//! the task cancels the pending frame through the scheduler, and a callback
//! that still fires afterwards finds the task gone or cancelled and does
//! nothing. Dropping the task cancels it, so tearing down the owner is enough
//! to stop the chain.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_domain::counter::CountAnimation;

use crate::ports::FrameScheduler;

/// Receives the value of every frame, the exact target included.
pub type Publish = Rc<dyn Fn(f64)>;

struct TaskState<H> {
    animation: CountAnimation,
    pending: Option<H>,
    cancelled: bool,
}

/// One scheduled run of a [`CountAnimation`].
pub struct CounterTask<S: FrameScheduler> {
    state: Rc<RefCell<TaskState<S::Handle>>>,
    scheduler: S,
}

impl<S> CounterTask<S>
where
    S: FrameScheduler + Clone + 'static,
    S::Handle: 'static,
{
    /// Request the first frame of `animation`.
    ///
    /// The first frame records the start time; `publish` is called once
    /// per frame.
    pub fn start(animation: CountAnimation, scheduler: S, publish: Publish) -> Self {
        tracing::debug!(
            from = animation.start(),
            to = animation.target(),
            duration_ms = animation.duration_ms(),
            "counter task started"
        );
        let state = Rc::new(RefCell::new(TaskState {
            animation,
            pending: None,
            cancelled: false,
        }));
        Self::request_next(&state, &scheduler, &publish);
        Self { state, scheduler }
    }

    fn request_next(
        state: &Rc<RefCell<TaskState<S::Handle>>>,
        scheduler: &S,
        publish: &Publish,
    ) {
        let weak: Weak<RefCell<TaskState<S::Handle>>> = Rc::downgrade(state);
        let next_scheduler = scheduler.clone();
        let next_publish = Rc::clone(publish);
        let handle = scheduler.request_frame(Box::new(move |now| {
            if let Some(state) = weak.upgrade() {
                Self::on_frame(&state, &next_scheduler, &next_publish, now);
            }
        }));
        state.borrow_mut().pending = Some(handle);
    }

    fn on_frame(
        state: &Rc<RefCell<TaskState<S::Handle>>>,
        scheduler: &S,
        publish: &Publish,
        now: f64,
    ) {
        let frame = {
            let mut state = state.borrow_mut();
            if state.cancelled {
                return;
            }
            state.pending = None;
            state.animation.advance(now)
        };

        publish(frame.value);

        if frame.done {
            tracing::debug!(value = frame.value, "counter task finished");
            return;
        }
        // publishing may have torn the task down
        if state.borrow().cancelled {
            return;
        }
        Self::request_next(state, scheduler, publish);
    }
}

impl<S: FrameScheduler> CounterTask<S> {
    /// Stop the chain. Returns `true` if a pending frame was cancelled.
    ///
    /// Only the first call has an effect.
    pub fn cancel(&self) -> bool {
        let pending = {
            let mut state = self.state.borrow_mut();
            if state.cancelled {
                return false;
            }
            state.cancelled = true;
            state.pending.take()
        };
        match pending {
            Some(handle) => {
                self.scheduler.cancel_frame(handle);
                tracing::debug!("counter task cancelled");
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.state.borrow().cancelled
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.borrow().animation.is_finished()
    }

    /// `true` while frames are still being requested.
    #[must_use]
    pub fn is_running(&self) -> bool {
        let state = self.state.borrow();
        !state.cancelled && !state.animation.is_finished()
    }
}

impl<S: FrameScheduler> Drop for CounterTask<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}
