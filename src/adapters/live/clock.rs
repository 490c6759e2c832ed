//! Live clock using the system clock.

use crate::date::ReferenceDate;
use crate::ports::clock::Clock;

/// Live clock that returns the real current time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ReferenceDate {
        ReferenceDate::now()
    }
}
