//! Dates measured from the reference epoch (1 January 2001 UTC), a request
//! descriptor interface, and the `refdate` CLI built on them.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod date;
pub mod error;
pub mod logging;
pub mod ports;
pub mod request;

pub use date::{DateLike, ReferenceDate, TimeInterval, EPOCH_DELTA_SECONDS};
pub use error::Error;
pub use ports::{Clock, RequestDescriptor};
pub use request::RequestSpec;

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command)
}
