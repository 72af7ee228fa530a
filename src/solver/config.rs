//! Solver configuration.
//!
//! Passed to a [`Solver`](super::Solver) alongside the problem data and
//! never merged into it. The crate does not interpret these values; they
//! are handed to the adapter as-is.
//!
//! ```
//! use u_fjsp::SolverConfig;
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     time_limit_secs = 30.0
//!     display = true
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! assert!(config.display);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Options for a single solve.
///
/// Every constructor checks the time limit: [`from_toml_str`](Self::from_toml_str),
/// [`with_time_limit_secs`](Self::with_time_limit_secs) and deserialization.
/// The fields stay public, so [`Model::solve`](crate::Model::solve) checks
/// again with [`validate`](Self::validate) before calling a backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "SolverConfigRepr")]
pub struct SolverConfig {
    /// Wall-clock limit in seconds. `None` = no limit.
    #[serde(default)]
    pub time_limit_secs: Option<f64>,

    /// Whether the backend should print its search log.
    #[serde(default)]
    pub display: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
struct SolverConfigRepr {
    #[serde(default)]
    time_limit_secs: Option<f64>,
    #[serde(default)]
    display: bool,
}

impl TryFrom<SolverConfigRepr> for SolverConfig {
    type Error = ConfigError;

    fn try_from(repr: SolverConfigRepr) -> Result<Self, Self::Error> {
        let config = Self {
            time_limit_secs: repr.time_limit_secs,
            display: repr.display,
        };
        config.validate()?;
        Ok(config)
    }
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time limit in seconds.
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] if `secs` is negative or not finite.
    pub fn with_time_limit_secs(mut self, secs: f64) -> Result<Self, ConfigError> {
        self.time_limit_secs = Some(secs);
        self.validate()?;
        Ok(self)
    }

    pub fn with_display(mut self, display: bool) -> Self {
        self.display = display;
        self
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let repr: SolverConfigRepr = toml::from_str(s)?;
        Self::try_from(repr)
    }

    /// Loads a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// The time limit as a [`Duration`].
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_secs
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    }

    /// Checks that the time limit, if any, is a non-negative finite number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.time_limit_secs {
            Some(secs) if !secs.is_finite() || secs < 0.0 => Err(ConfigError::Invalid(format!(
                "time_limit_secs must be a non-negative number, got {secs}"
            ))),
            _ => Ok(()),
        }
    }
}
