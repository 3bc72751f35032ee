//! In-process frame clock driven by explicit timestamps.

use std::cell::RefCell;
use std::fmt;

use crate::ports::{FrameCallback, FrameScheduler};

/// Handle returned by [`ManualFrameClock::request_frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// A [`FrameScheduler`] whose frames happen only when [`tick`](Self::tick)
/// is called.
///
/// A tick runs every callback queued *before* it started. Callbacks queued
/// while the tick runs (a frame rescheduling itself) wait for the next tick,
/// which matches how a display clock batches work per repaint.
#[derive(Default)]
pub struct ManualFrameClock {
    state: RefCell<ClockState>,
}

#[derive(Default)]
struct ClockState {
    next_id: u64,
    now: f64,
    queue: Vec<(u64, FrameCallback)>,
}

impl ManualFrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Timestamp of the latest tick.
    #[must_use]
    pub fn now(&self) -> f64 {
        self.state.borrow().now
    }

    /// Number of callbacks waiting for a frame.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// Run one frame at `now`; returns how many callbacks ran.
    ///
    /// A callback cancelled by an earlier callback in the same frame does
    /// not run.
    pub fn tick(&self, now: f64) -> usize {
        let cutoff = {
            let mut state = self.state.borrow_mut();
            state.now = now;
            state.next_id
        };
        let mut ran = 0;
        loop {
            let callback = {
                let mut state = self.state.borrow_mut();
                match state.queue.iter().position(|(id, _)| *id < cutoff) {
                    Some(index) => state.queue.remove(index).1,
                    None => break,
                }
            };
            callback(now);
            ran += 1;
        }
        ran
    }

    /// Tick every `step_ms` starting at `start` until nothing is pending or
    /// `max_frames` frames have run. Returns the number of frames.
    pub fn run(&self, start: f64, step_ms: f64, max_frames: usize) -> usize {
        let mut frames = 0;
        let mut now = start;
        while frames < max_frames && self.pending() > 0 {
            self.tick(now);
            frames += 1;
            now += step_ms;
        }
        frames
    }
}

impl FrameScheduler for ManualFrameClock {
    type Handle = FrameHandle;

    fn request_frame(&self, callback: FrameCallback) -> Self::Handle {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.queue.push((id, callback));
        FrameHandle(id)
    }

    fn cancel_frame(&self, handle: Self::Handle) {
        self.state
            .borrow_mut()
            .queue
            .retain(|(id, _)| *id != handle.0);
    }
}

impl fmt::Debug for ManualFrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ManualFrameClock")
            .field("now", &state.now)
            .field("pending", &state.queue.len())
            .finish()
    }
}
