//! `refdate diff` and `refdate advance` commands.

use crate::date::ReferenceDate;

/// Seconds elapsed from offset `b` to offset `a`.
#[must_use]
pub fn diff(a: f64, b: f64) -> String {
    ReferenceDate::from_offset(a).difference(ReferenceDate::from_offset(b)).to_string()
}

/// The offset `delta` seconds after `offset`.
#[must_use]
pub fn advance(offset: f64, delta: f64) -> String {
    ReferenceDate::from_offset(offset).advanced_by(delta).to_string()
}
