//! `refdate request` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::ports::request::RequestDescriptor;
use crate::request::RequestSpec;

/// Loads a request file and describes it relative to the context clock.
///
/// # Errors
///
/// Returns an error string if the file cannot be loaded or the summary
/// cannot be serialized.
pub fn run(ctx: &ServiceContext, file: &Path, json: bool) -> Result<String, String> {
    let spec = RequestSpec::load(file, ctx.config.default_timeout).map_err(|e| e.to_string())?;
    let started = ctx.clock.now();
    tracing::info!(url = %spec.target(), timeout = spec.timeout(), "loaded request");

    if json {
        let summary = spec.summary(started);
        return serde_json::to_string_pretty(&summary)
            .map_err(|e| format!("Failed to serialize request summary: {e}"));
    }

    Ok(format!(
        "target:   {}\ntimeout:  {}\nstarted:  {}\ndeadline: {}",
        spec.target(),
        spec.timeout(),
        started,
        spec.deadline(started)
    ))
}
