//! pebble CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use console::style;
use pebble_cli_lib::{dispatch, observability, CliError};
use std::process::ExitCode;

fn main() -> ExitCode {
    observability::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match dispatch(&args) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("{} {err:#}", style("Error:").red().bold());
            if let Some(cli_err) = err.downcast_ref::<CliError>() {
                eprintln!("{}", style(cli_err.hint()).dim());
            }
            ExitCode::FAILURE
        }
    }
}
