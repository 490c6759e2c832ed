//! Service context bundling the port implementations a command needs.

use crate::adapters::live::SystemClock;
use crate::config::Config;
use crate::ports::clock::Clock;

/// Bundles the clock and configuration handed to command handlers.
pub struct ServiceContext {
    /// Clock for obtaining the current date.
    pub clock: Box<dyn Clock>,
    /// Settings read from the environment.
    pub config: Config,
}

impl ServiceContext {
    /// Creates a context backed by the system clock.
    #[must_use]
    pub fn live(config: Config) -> Self {
        Self::with_clock(Box::new(SystemClock), config)
    }

    /// Creates a context with an explicit clock, e.g. a fixed one in tests.
    #[must_use]
    pub fn with_clock(clock: Box<dyn Clock>, config: Config) -> Self {
        Self { clock, config }
    }
}
