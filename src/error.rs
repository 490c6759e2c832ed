//! Error type for the request loader and configuration.

use std::path::PathBuf;

use crate::date::TimeInterval;

/// Errors raised outside the date core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A request file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A request description is not valid YAML for a request.
    #[error("failed to parse request: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The request target is not a valid absolute URL.
    #[error("invalid target URL {url:?}: {reason}")]
    InvalidUrl {
        /// The rejected URL text.
        url: String,
        /// Why the URL parser rejected it.
        reason: String,
    },

    /// A timeout is negative or not finite.
    #[error("invalid timeout {0}: must be a finite, non-negative number of seconds")]
    InvalidTimeout(TimeInterval),

    /// A `.env` file exists but could not be loaded.
    #[error("failed to load .env file: {0}")]
    Env(#[from] dotenvy::Error),

    /// An environment variable holds an unusable value.
    #[error("invalid value {value:?} for {key}")]
    Config {
        /// The environment variable name.
        key: &'static str,
        /// The value that was found.
        value: String,
    },
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
