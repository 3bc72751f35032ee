//! `CountAnimation`: interpolation state for one run of a counter.
//!
//! The animation is driven by frame timestamps (milliseconds, as reported by
//! the host's display clock). The first timestamp it sees becomes `t0`; every
//! later one is measured against it.

use super::easing::Easing;

/// Value published for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Value to display for this frame.
    pub value: f64,
    /// `true` on the final frame; `value` is then exactly the target.
    pub done: bool,
}

/// One run of a counter from `start` to `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct CountAnimation {
    start: f64,
    target: f64,
    duration_ms: f64,
    easing: Easing,
    started_at: Option<f64>,
    finished: bool,
}

impl CountAnimation {
    /// Create an animation that has not seen a frame yet.
    ///
    /// A `duration_ms` of zero or less completes on the first frame.
    #[must_use]
    pub fn new(start: f64, target: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            start,
            target,
            duration_ms,
            easing,
            started_at: None,
            finished: false,
        }
    }

    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Timestamp of the first frame, once one has been seen.
    #[must_use]
    pub fn started_at(&self) -> Option<f64> {
        self.started_at
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Elapsed fraction in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || self.duration_ms.is_nan() {
            return 1.0;
        }
        if elapsed_ms.is_nan() {
            return 0.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Value after `elapsed_ms`, snapping to `target` exactly at completion.
    #[must_use]
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        let progress = self.progress(elapsed_ms);
        if progress >= 1.0 {
            return self.target;
        }
        let value = self.start + self.easing.apply(progress) * (self.target - self.start);
        if self.target >= self.start {
            value.clamp(self.start, self.target)
        } else {
            value.clamp(self.target, self.start)
        }
    }

    /// Advance to the frame at `now`.
    ///
    /// Once the animation has finished, every later call returns the
    /// target again with `done` set.
    pub fn advance(&mut self, now: f64) -> Frame {
        if self.finished {
            return Frame {
                value: self.target,
                done: true,
            };
        }
        let t0 = *self.started_at.get_or_insert(now);
        let elapsed = now - t0;
        if self.progress(elapsed) >= 1.0 {
            self.finished = true;
            return Frame {
                value: self.target,
                done: true,
            };
        }
        Frame {
            value: self.value_at(elapsed),
            done: false,
        }
    }
}
