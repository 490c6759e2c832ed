//! Deterministic clocks.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::date::ReferenceDate;
use crate::ports::clock::Clock;

/// Clock that always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    date: ReferenceDate,
}

impl FixedClock {
    /// Creates a clock stopped at `date`.
    #[must_use]
    pub const fn new(date: ReferenceDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> ReferenceDate {
        self.date
    }
}

/// Serves a scripted sequence of dates, then keeps repeating the last one.
#[derive(Debug)]
pub struct ScriptedClock {
    script: Mutex<Script>,
}

#[derive(Debug)]
struct Script {
    pending: VecDeque<ReferenceDate>,
    last: ReferenceDate,
}

impl ScriptedClock {
    /// Creates a clock that returns `dates` in order.
    ///
    /// An empty script reports the reference epoch.
    #[must_use]
    pub fn new(dates: impl IntoIterator<Item = ReferenceDate>) -> Self {
        Self {
            script: Mutex::new(Script {
                pending: dates.into_iter().collect(),
                last: ReferenceDate::REFERENCE_EPOCH,
            }),
        }
    }
}

impl Clock for ScriptedClock {
    fn now(&self) -> ReferenceDate {
        // A poisoned lock still holds a consistent script.
        let mut script = self.script.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(next) = script.pending.pop_front() {
            script.last = next;
        }
        script.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_never_moves() {
        let clock = FixedClock::new(ReferenceDate::from_offset(12.0));
        assert_eq!(clock.now().offset(), 12.0);
        assert_eq!(clock.now().offset(), 12.0);
    }

    #[test]
    fn scripted_clock_serves_dates_in_order() {
        let clock = ScriptedClock::new([1.0, 2.0, 3.5].map(ReferenceDate::from_offset));
        assert_eq!(clock.now().offset(), 1.0);
        assert_eq!(clock.now().offset(), 2.0);
        assert_eq!(clock.now().offset(), 3.5);
        assert_eq!(clock.now().offset(), 3.5);
    }

    #[test]
    fn empty_script_reports_reference_epoch() {
        let clock = ScriptedClock::new(Vec::<ReferenceDate>::new());
        assert_eq!(clock.now(), ReferenceDate::REFERENCE_EPOCH);
    }
}
