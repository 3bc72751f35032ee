//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `folio.toml` in the working directory unless a path is given.
//! Every field has a sensible default so the file is optional. Environment
//! variables take precedence over file values; CLI flags take precedence
//! over both.

use std::path::{Path, PathBuf};

use folio_domain::counter::{CounterSpec, Easing, RestartPolicy, Trigger};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Counter defaults.
    pub counter: CounterConfig,
    /// Content file location.
    pub content: ContentConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Defaults applied to every counter.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Run length in milliseconds. Zero jumps straight to the target.
    pub duration_ms: f64,
    /// Easing curve (`linear` or `ease-out-quart`).
    pub easing: Easing,
    /// Where a re-triggered counter starts (`from-zero` or `from-current`).
    pub restart: RestartPolicy,
    /// Visible fraction that starts a visibility-gated counter.
    pub visibility_threshold: f64,
}

/// Portfolio content settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Path to the portfolio TOML file.
    pub path: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (or `folio.toml`, if present) then
    /// apply environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if a
    /// value fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_required_file(path)?,
            None => Self::from_file(Path::new("folio.toml"))?,
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn from_required_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(ConfigError::Parse)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("FOLIO_CONTENT") {
            self.content.path = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("FOLIO_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.counter.visibility_threshold;
        if threshold.is_nan() || threshold <= 0.0 || threshold > 1.0 {
            return Err(ConfigError::Validation(format!(
                "visibility_threshold must be in (0, 1], got {threshold}"
            )));
        }
        let duration = self.counter.duration_ms;
        if !duration.is_finite() || duration < 0.0 {
            return Err(ConfigError::Validation(format!(
                "duration_ms must be a non-negative number, got {duration}"
            )));
        }
        Ok(())
    }

    /// Trigger used by visibility-gated counters.
    #[must_use]
    pub fn trigger(&self) -> Trigger {
        Trigger::OnVisible {
            threshold: self.counter.visibility_threshold,
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: CounterSpec::DEFAULT_DURATION_MS,
            easing: Easing::default(),
            restart: RestartPolicy::default(),
            visibility_threshold: Trigger::DEFAULT_THRESHOLD,
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("content/portfolio.toml"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "folio=info,folio_app=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
