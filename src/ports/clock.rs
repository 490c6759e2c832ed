//! Clock port for obtaining the current time.

use crate::date::ReferenceDate;

/// Provides the current time on the reference timeline.
///
/// Abstracting time access allows deterministic tests by substituting a
/// fixed or scripted clock for the system clock.
pub trait Clock: Send + Sync {
    /// Returns the current date.
    fn now(&self) -> ReferenceDate;
}
