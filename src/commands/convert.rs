//! `refdate convert` command.

use crate::date::ReferenceDate;

/// Converts Unix seconds to a reference offset, or the reverse.
///
/// # Errors
///
/// Returns an error string unless exactly one direction is given.
pub fn run(from_unix: Option<f64>, to_unix: Option<f64>) -> Result<String, String> {
    match (from_unix, to_unix) {
        (Some(secs), None) => Ok(ReferenceDate::from_unix_seconds(secs).to_string()),
        (None, Some(offset)) => Ok(ReferenceDate::from_offset(offset).unix_seconds().to_string()),
        _ => Err("Specify exactly one of --from-unix or --to-unix".to_string()),
    }
}
