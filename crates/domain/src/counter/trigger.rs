//! When a counter starts: on mount, or the first time it becomes visible.

/// Start policy for a counter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Start on mount and again on every new target.
    Immediate,
    /// Start the first time at least `threshold` of the element is visible.
    OnVisible { threshold: f64 },
}

impl Trigger {
    /// Visible fraction required by [`Trigger::on_visible`].
    pub const DEFAULT_THRESHOLD: f64 = 0.1;

    /// Visibility-gated trigger with the default threshold.
    #[must_use]
    pub fn on_visible() -> Self {
        Self::OnVisible {
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }
}

impl Default for Trigger {
    fn default() -> Self {
        Self::on_visible()
    }
}

/// One report from the host's viewport observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilitySample {
    pub is_intersecting: bool,
    /// Visible fraction of the element, `0.0..=1.0`.
    pub ratio: f64,
}

impl VisibilitySample {
    #[must_use]
    pub fn visible(ratio: f64) -> Self {
        Self {
            is_intersecting: true,
            ratio,
        }
    }

    #[must_use]
    pub fn hidden() -> Self {
        Self {
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

/// Observers report ratios computed from layout rects, which land a hair
/// under the threshold they were asked to fire on.
const RATIO_TOLERANCE: f64 = 1e-3;

/// Fires at most once: on the first sample that crosses the threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityGate {
    threshold: f64,
    fired: bool,
}

impl VisibilityGate {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            fired: false,
        }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Feed a sample; returns `true` exactly once, when the gate opens.
    pub fn observe(&mut self, sample: VisibilitySample) -> bool {
        if self.fired {
            return false;
        }
        if sample.is_intersecting && sample.ratio + RATIO_TOLERANCE >= self.threshold {
            self.fired = true;
            return true;
        }
        false
    }
}

impl Default for VisibilityGate {
    fn default() -> Self {
        Self::new(Trigger::DEFAULT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_ten_percent_visibility() {
        assert_eq!(Trigger::default(), Trigger::OnVisible { threshold: 0.1 });
    }

    #[test]
    fn should_ignore_hidden_samples() {
        let mut gate = VisibilityGate::default();
        assert!(!gate.observe(VisibilitySample::hidden()));
        assert!(!gate.has_fired());
    }

    #[test]
    fn should_ignore_samples_below_threshold() {
        let mut gate = VisibilityGate::new(0.5);
        assert!(!gate.observe(VisibilitySample::visible(0.2)));
    }

    #[test]
    fn should_fire_once_when_threshold_crossed() {
        let mut gate = VisibilityGate::default();
        assert!(gate.observe(VisibilitySample::visible(0.1)));
        assert!(!gate.observe(VisibilitySample::hidden()));
        assert!(!gate.observe(VisibilitySample::visible(1.0)));
        assert!(gate.has_fired());
    }

    #[test]
    fn should_accept_ratio_just_under_threshold() {
        let mut gate = VisibilityGate::default();
        assert!(gate.observe(VisibilitySample::visible(0.0999)));
    }
}
