//! Stepped approach counter used by the hero banner.
//!
//! Instead of interpolating over a fixed duration, each tick closes a tenth
//! of the remaining distance (plus one), so the value races early and
//! settles onto the target in single steps.

/// Integer counter that closes in on its target one tick at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepApproach {
    current: i64,
    target: i64,
}

impl StepApproach {
    /// Delay between ticks, in milliseconds.
    pub const INTERVAL_MS: u32 = 50;

    const DIVISOR: i64 = 10;

    /// Start at zero.
    #[must_use]
    pub fn new(target: i64) -> Self {
        Self::starting_at(0, target)
    }

    #[must_use]
    pub fn starting_at(current: i64, target: i64) -> Self {
        Self { current, target }
    }

    #[must_use]
    pub fn current(&self) -> i64 {
        self.current
    }

    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.current == self.target
    }

    /// Take one step; `None` once the target has been reached.
    pub fn tick(&mut self) -> Option<i64> {
        if self.is_done() {
            return None;
        }
        let remaining = self.target.saturating_sub(self.current);
        let step = remaining.saturating_abs() / Self::DIVISOR + 1;
        self.current = if remaining > 0 {
            self.current.saturating_add(step).min(self.target)
        } else {
            self.current.saturating_sub(step).max(self.target)
        };
        Some(self.current)
    }
}
