//! Registry configuration.

use std::fmt;
use std::str::FromStr;

/// Library name used in messages unless configured otherwise.
pub const DEFAULT_LIBRARY: &str = "Immutable";

/// Error type for configuration parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown mode `{0}`, expected `development` or `production`")]
    UnknownMode(String),
}

/// Whether checkers run or are stripped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Development,
    /// Every checker fails with a stripped error.
    Production,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Mode::Development),
            "production" | "prod" => Ok(Mode::Production),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

/// Configuration for a [`crate::PropTypes`] registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    /// Name of the collection library, as in `an Immutable.js List`.
    pub library: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            library: DEFAULT_LIBRARY.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn production() -> Self {
        Self::new().with_mode(Mode::Production)
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_library(mut self, library: impl Into<String>) -> Self {
        self.library = library.into();
        self
    }

    pub fn is_production(&self) -> bool {
        self.mode == Mode::Production
    }
}
