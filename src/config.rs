//! Session configuration.
//!
//! Loaded once at startup, either from defaults (local development) or
//! from environment variables. Invalid values are reported as typed
//! errors; missing variables fall back to the defaults.

use std::env;

use thiserror::Error;

/// An environment variable carried an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value for {key}: {message}")]
pub struct ConfigError {
    /// The offending environment variable.
    pub key: String,
    /// Why its value was rejected.
    pub message: String,
}

/// Settings for an editing session.
///
/// # Fields
///
/// - `base_url`: corpus service base URL (no trailing slash)
/// - `window_span`: neighbor slots per side of the context window
/// - `scroll_sensitivity`: scroll delta units per step of neighbor browsing
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Corpus service base URL.
    pub base_url: String,
    /// Neighbor slots per side; deployments use 3 or 5.
    pub window_span: usize,
    /// Scroll delta units per browsing step; must be positive.
    pub scroll_sensitivity: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:18081".to_string(),
            window_span: 3,
            scroll_sensitivity: 2.0,
        }
    }
}

impl Config {
    /// Loads settings from the environment, falling back to defaults for
    /// anything unset.
    ///
    /// # Environment Variables
    ///
    /// - `WORTSCHATZ_API_URL`: corpus service base URL
    /// - `WORTSCHATZ_WINDOW_SPAN`: positive slot count
    /// - `WORTSCHATZ_SCROLL_SENSITIVITY`: positive number
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but does not parse
    /// or is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let base_url = env::var("WORTSCHATZ_API_URL").unwrap_or(defaults.base_url);
        let window_span = match env::var("WORTSCHATZ_WINDOW_SPAN") {
            Ok(raw) => parse_positive(&raw, "WORTSCHATZ_WINDOW_SPAN")?,
            Err(_) => defaults.window_span,
        };
        let scroll_sensitivity = match env::var("WORTSCHATZ_SCROLL_SENSITIVITY") {
            Ok(raw) => parse_sensitivity(&raw)?,
            Err(_) => defaults.scroll_sensitivity,
        };
        Ok(Self {
            base_url,
            window_span,
            scroll_sensitivity,
        })
    }
}

fn parse_positive(raw: &str, key: &str) -> Result<usize, ConfigError> {
    match raw.parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        Ok(_) => Err(ConfigError {
            key: key.to_string(),
            message: "must be greater than zero".to_string(),
        }),
        Err(error) => Err(ConfigError {
            key: key.to_string(),
            message: error.to_string(),
        }),
    }
}

fn parse_sensitivity(raw: &str) -> Result<f64, ConfigError> {
    let key = "WORTSCHATZ_SCROLL_SENSITIVITY";
    match raw.parse::<f64>() {
        Ok(value) if value > 0.0 => Ok(value),
        Ok(_) => Err(ConfigError {
            key: key.to_string(),
            message: "must be greater than zero".to_string(),
        }),
        Err(error) => Err(ConfigError {
            key: key.to_string(),
            message: error.to_string(),
        }),
    }
}
