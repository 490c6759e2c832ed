//! Request descriptor port for URL requests.

use reqwest::Url;

use crate::date::TimeInterval;

/// Timeout reported for a request that does not set one.
pub const DEFAULT_TIMEOUT: TimeInterval = 60.0;

/// Anything that can be considered a URL request.
///
/// Only the target and the timeout are described here; issuing the request
/// is left to whoever implements it.
pub trait RequestDescriptor {
    /// The URL the request is aimed at.
    fn target(&self) -> &Url;

    /// How long the request may take, in seconds.
    fn timeout(&self) -> TimeInterval;
}

impl RequestDescriptor for reqwest::Request {
    fn target(&self) -> &Url {
        self.url()
    }

    fn timeout(&self) -> TimeInterval {
        reqwest::Request::timeout(self).map_or(DEFAULT_TIMEOUT, std::time::Duration::as_secs_f64)
    }
}
