//! Easing curves mapping elapsed fraction to eased fraction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A monotonic `[0, 1] -> [0, 1]` curve with `0 -> 0` and `1 -> 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Progress unchanged.
    #[default]
    Linear,
    /// `1 - (1 - t)^4`: fast start, long settle.
    EaseOutQuart,
}

impl Easing {
    /// Apply the curve. Inputs outside `[0, 1]` are clamped first.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
        }
    }

    /// Config/CLI name of the curve.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseOutQuart => "ease-out-quart",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an easing name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown easing {0:?} (expected \"linear\" or \"ease-out-quart\")")]
pub struct UnknownEasing(pub String);

impl FromStr for Easing {
    type Err = UnknownEasing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Self::Linear),
            "ease-out-quart" => Ok(Self::EaseOutQuart),
            other => Err(UnknownEasing(other.to_string())),
        }
    }
}
