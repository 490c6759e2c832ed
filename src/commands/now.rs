//! `refdate now` command.

use crate::context::ServiceContext;

/// Reads the context clock and renders the date.
///
/// With `unix` set the date is rendered as seconds since the Unix epoch.
#[must_use]
pub fn run(ctx: &ServiceContext, unix: bool) -> String {
    let now = ctx.clock.now();
    tracing::debug!(offset = now.offset(), "sampled clock");
    if unix {
        now.unix_seconds().to_string()
    } else {
        now.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fixed::FixedClock;
    use crate::config::Config;
    use crate::date::ReferenceDate;

    #[test]
    fn renders_reference_offset() {
        let ctx = ServiceContext::with_clock(
            Box::new(FixedClock::new(ReferenceDate::from_offset(1.25))),
            Config::default(),
        );
        assert_eq!(run(&ctx, false), "1.25");
        assert_eq!(run(&ctx, true), "978307201.25");
    }
}
