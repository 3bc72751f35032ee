//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.

/// A counter target that cannot be turned into a finite number.
///
/// This is a content bug, reported when the counter is configured and
/// never deferred into the animation loop.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input contains no digit at all.
    #[error("no numeric value found in {input:?}")]
    NoDigits {
        /// The offending input, verbatim.
        input: String,
    },

    /// The digits overflow to an infinite or NaN value.
    #[error("numeric value in {input:?} is not finite")]
    NotFinite {
        /// The offending input, verbatim.
        input: String,
    },

    /// More fractional digits than a counter can display.
    #[error("{decimals} decimal places requested, at most {max} supported")]
    TooManyDecimals { decimals: u32, max: u32 },
}

/// Domain invariant violations in portfolio content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required name or title is empty.
    #[error("{what} must not be empty")]
    Empty {
        /// Which field was empty (e.g. `"metric label"`).
        what: &'static str,
    },

    /// A metric value does not parse as a counter target.
    #[error("invalid metric {label:?} in {section} entry {entry:?}")]
    Metric {
        /// Section name (e.g. `"experience"`).
        section: &'static str,
        /// Title of the entry that owns the metric.
        entry: String,
        /// The metric label.
        label: String,
        /// Why the value was rejected.
        #[source]
        source: ParseError,
    },
}

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("parse error")]
    Parse(#[from] ParseError),

    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("failed to decode content")]
    Decode(#[from] toml::de::Error),
}
