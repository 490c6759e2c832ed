//! Runtime configuration read from the environment.

use std::env;

use crate::date::TimeInterval;
use crate::error::{Error, Result};
use crate::ports::request::DEFAULT_TIMEOUT;

/// Variable holding the timeout applied to request files that omit one.
pub const DEFAULT_TIMEOUT_VAR: &str = "REFDATE_DEFAULT_TIMEOUT";
/// Variable holding the `tracing` filter directive.
pub const LOG_VAR: &str = "REFDATE_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings shared by the CLI commands.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Timeout, in seconds, for requests that do not set their own.
    pub default_timeout: TimeInterval,
    /// Filter directive for log output.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { default_timeout: DEFAULT_TIMEOUT, log_filter: DEFAULT_LOG_FILTER.to_string() }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Env`] if a `.env` file exists but cannot be read or
    /// parsed, and [`Error::Config`] if a variable is set to an unusable value.
    pub fn load() -> Result<Self> {
        allow_missing(dotenvy::dotenv())?;
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(DEFAULT_TIMEOUT_VAR) {
            config.default_timeout = raw
                .trim()
                .parse::<TimeInterval>()
                .ok()
                .filter(|t| t.is_finite() && *t >= 0.0)
                .ok_or(Error::Config { key: DEFAULT_TIMEOUT_VAR, value: raw })?;
        }

        if let Some(filter) = lookup(LOG_VAR) {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }

        Ok(config)
    }
}

/// Treats a missing `.env` file as success and keeps every other failure.
fn allow_missing<T>(loaded: dotenvy::Result<T>) -> Result<()> {
    match loaded {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(Error::Env(e)),
    }
}
