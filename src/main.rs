//! jobkit: a file-based job search kit.
//!
//! This is the main entry point for the `jobkit` CLI. It parses arguments,
//! sets up logging, dispatches to the appropriate command handler, and maps
//! errors to exit codes.

mod activity;
mod application;
mod cli;
mod commands;
pub mod config;
mod context;
pub mod error;
pub mod exit_codes;
pub mod fs;
mod interview;
mod logging;
mod outreach;
pub mod pipeline;
mod profile;
mod research;
pub mod template;
mod tracker;
mod workspace;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // User-facing message on stderr; details are in the debug log
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
