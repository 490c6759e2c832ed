//! Binary entrypoint for the `refdate` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match refdate::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
