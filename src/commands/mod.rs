//! Command dispatch and handlers.

pub mod arith;
pub mod convert;
pub mod now;
pub mod request;

use crate::cli::Command;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::logging;

/// Dispatch a parsed command to its handler.
///
/// Configuration is read from the environment (and `.env`) first, and log
/// output is set up from it.
///
/// # Errors
///
/// Returns an error string if the configuration is invalid or the selected
/// command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let config = Config::load().map_err(|e| e.to_string())?;
    logging::init(&config.log_filter);
    let ctx = ServiceContext::live(config);
    let output = dispatch_with_context(command, &ctx)?;
    println!("{output}");
    Ok(())
}

/// Run a command against the given context and return its output text.
///
/// # Errors
///
/// Returns an error string if the command handler fails.
pub fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<String, String> {
    tracing::debug!(?command, "dispatching command");
    match command {
        Command::Now { unix } => Ok(now::run(ctx, *unix)),
        Command::Convert { from_unix, to_unix } => convert::run(*from_unix, *to_unix),
        Command::Diff { a, b } => Ok(arith::diff(*a, *b)),
        Command::Advance { offset, delta } => Ok(arith::advance(*offset, *delta)),
        Command::Request { file, json } => request::run(ctx, file, *json),
    }
}
