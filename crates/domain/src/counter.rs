//! Numeric counter: a number that animates from a start value up to a target.
//!
//! [`CounterSpec`] is the validated configuration of a counter: the numeric
//! target, how long the run lasts, which easing curve it follows and how the
//! value is rendered. Building one parses the target, so a bad content string
//! fails before any frame is scheduled.

pub mod animation;
pub mod approach;
pub mod easing;
pub mod format;
pub mod target;
pub mod trigger;

use serde::{Deserialize, Serialize};

pub use animation::{CountAnimation, Frame};
pub use approach::StepApproach;
pub use easing::Easing;
pub use format::{MAX_DECIMALS, NumberFormat, format_number};
pub use target::{CounterTarget, DecoratedTarget};
pub use trigger::{Trigger, VisibilityGate, VisibilitySample};

use crate::error::ParseError;

/// Where a re-triggered counter starts from.
///
/// The first run of a counter always starts from `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RestartPolicy {
    /// Start over from `0`.
    FromZero,
    /// Continue from the value currently on screen.
    #[default]
    FromCurrent,
}

/// Validated counter configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterSpec {
    target: f64,
    duration_ms: f64,
    easing: Easing,
    format: NumberFormat,
}

impl CounterSpec {
    /// Duration used when the builder is not given one.
    pub const DEFAULT_DURATION_MS: f64 = 2000.0;

    /// Create a builder for constructing a [`CounterSpec`].
    #[must_use]
    pub fn builder() -> CounterSpecBuilder {
        CounterSpecBuilder::default()
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

    #[must_use]
    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    /// Render `value` with this counter's decoration and decimals.
    #[must_use]
    pub fn render(&self, value: f64) -> String {
        self.format.render(value)
    }

    /// Text shown once the run is complete.
    #[must_use]
    pub fn final_text(&self) -> String {
        self.render(self.target)
    }

    /// A fresh run from `start` to this counter's target.
    #[must_use]
    pub fn animation_from(&self, start: f64) -> CountAnimation {
        CountAnimation::new(start, self.target, self.duration_ms, self.easing)
    }
}

/// Step-by-step builder for [`CounterSpec`].
///
/// Prefix, suffix and decimals parsed from a decorated target are used
/// unless set explicitly.
#[derive(Debug, Default, Clone)]
pub struct CounterSpecBuilder {
    target: Option<CounterTarget>,
    duration_ms: Option<f64>,
    easing: Option<Easing>,
    prefix: Option<String>,
    suffix: Option<String>,
    decimals: Option<u32>,
}

impl CounterSpecBuilder {
    #[must_use]
    pub fn target(mut self, target: impl Into<CounterTarget>) -> Self {
        self.target = Some(target.into());
        self
    }

    #[must_use]
    pub fn duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    #[must_use]
    pub fn decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    /// Consume the builder, parse the target and return a [`CounterSpec`].
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if no target was given, the target has no
    /// finite numeric value, or more than [`MAX_DECIMALS`] decimals are
    /// requested.
    pub fn build(self) -> Result<CounterSpec, ParseError> {
        let target = self.target.ok_or_else(|| ParseError::NoDigits {
            input: String::new(),
        })?;
        if let Some(decimals) = self.decimals.filter(|d| *d > MAX_DECIMALS) {
            return Err(ParseError::TooManyDecimals {
                decimals,
                max: MAX_DECIMALS,
            });
        }
        let resolved = target.resolve()?;
        Ok(CounterSpec {
            target: resolved.magnitude,
            duration_ms: self
                .duration_ms
                .unwrap_or(CounterSpec::DEFAULT_DURATION_MS),
            easing: self.easing.unwrap_or_default(),
            format: NumberFormat {
                prefix: self.prefix.unwrap_or(resolved.prefix),
                suffix: self.suffix.unwrap_or(resolved.suffix),
                decimals: self.decimals.unwrap_or(resolved.decimals),
            },
        })
    }
}
