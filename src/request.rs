//! Concrete request descriptions loaded from YAML.

use std::path::Path;
use std::time::Duration;

use reqwest::{Method, Url};
use serde::{Deserialize, Serialize};

use crate::date::{ReferenceDate, TimeInterval};
use crate::error::{Error, Result};
use crate::ports::request::RequestDescriptor;

/// A URL request target paired with its timeout.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    target: Url,
    timeout: TimeInterval,
}

/// On-disk shape of a request file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRequest {
    target: String,
    timeout: Option<TimeInterval>,
}

/// Serializable summary of a request, used for JSON output.
#[derive(Debug, Serialize)]
pub struct RequestSummary {
    /// The request URL.
    pub target: String,
    /// Timeout in seconds.
    pub timeout: TimeInterval,
    /// When the request times out if started at `started`.
    pub deadline: ReferenceDate,
    /// The date the deadline is measured from.
    pub started: ReferenceDate,
}

impl RequestSpec {
    /// Creates a request description as given.
    #[must_use]
    pub fn new(target: Url, timeout: TimeInterval) -> Self {
        Self { target, timeout }
    }

    /// Parses a request description from YAML text.
    ///
    /// A missing `timeout` falls back to `default_timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, the target is not an
    /// absolute URL, or the timeout is negative or not finite.
    pub fn from_yaml_str(text: &str, default_timeout: TimeInterval) -> Result<Self> {
        let raw: RawRequest = serde_yaml::from_str(text)?;
        let target = Url::parse(raw.target.trim())
            .map_err(|e| Error::InvalidUrl { url: raw.target.clone(), reason: e.to_string() })?;
        let timeout = raw.timeout.unwrap_or(default_timeout);
        if !timeout.is_finite() || timeout < 0.0 {
            return Err(Error::InvalidTimeout(timeout));
        }
        tracing::debug!(url = %target, timeout, "parsed request description");
        Ok(Self { target, timeout })
    }

    /// Reads and parses a request file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a valid
    /// request description.
    pub fn load(path: &Path, default_timeout: TimeInterval) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        Self::from_yaml_str(&text, default_timeout)
    }

    /// When a request started at `started` runs out of time.
    #[must_use]
    pub fn deadline(&self, started: ReferenceDate) -> ReferenceDate {
        started.advanced_by(self.timeout)
    }

    /// Summarizes the request relative to `started`.
    #[must_use]
    pub fn summary(&self, started: ReferenceDate) -> RequestSummary {
        RequestSummary {
            target: self.target.to_string(),
            timeout: self.timeout,
            deadline: self.deadline(started),
            started,
        }
    }

    /// Builds an unsent `reqwest` request with this target and timeout.
    ///
    /// Timeouts that cannot be represented as a `Duration` are left unset.
    #[must_use]
    pub fn to_request(&self, method: Method) -> reqwest::Request {
        let mut request = reqwest::Request::new(method, self.target.clone());
        *request.timeout_mut() = Duration::try_from_secs_f64(self.timeout).ok();
        request
    }
}

impl RequestDescriptor for RequestSpec {
    fn target(&self) -> &Url {
        &self.target
    }

    fn timeout(&self) -> TimeInterval {
        self.timeout
    }
}
