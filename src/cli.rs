//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `refdate`.
#[derive(Debug, Parser)]
#[command(name = "refdate", version, about = "Work with dates measured from 1 January 2001 UTC")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the current date as seconds from the reference epoch.
    Now {
        /// Print seconds since the Unix epoch instead.
        #[arg(long)]
        unix: bool,
    },
    /// Convert between Unix seconds and reference offsets.
    Convert {
        /// Seconds since the Unix epoch to convert to a reference offset.
        #[arg(
            long,
            value_name = "SECS",
            allow_negative_numbers = true,
            required_unless_present = "to_unix",
            conflicts_with = "to_unix"
        )]
        from_unix: Option<f64>,
        /// Reference offset to convert to Unix seconds.
        #[arg(long, value_name = "OFFSET", allow_negative_numbers = true)]
        to_unix: Option<f64>,
    },
    /// Print the seconds elapsed from offset B to offset A.
    Diff {
        /// Later offset.
        #[arg(allow_negative_numbers = true)]
        a: f64,
        /// Earlier offset.
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Print an offset moved by a number of seconds.
    Advance {
        /// Starting offset.
        #[arg(allow_negative_numbers = true)]
        offset: f64,
        /// Seconds to add; negative moves backwards.
        #[arg(allow_negative_numbers = true)]
        delta: f64,
    },
    /// Describe a request file without sending anything.
    Request {
        /// Path to a YAML file with `target` and optional `timeout`.
        file: PathBuf,
        /// Emit the description as JSON.
        #[arg(long)]
        json: bool,
    },
}
