//! Core library for `questlog`, a gamified task list.
//!
//! Completing a quest grants experience and gold to the player's hero, who
//! levels up as experience accumulates. [`store::TaskGameStore`] owns the
//! game state; [`session::Session`] drives it the way a user interface
//! would; the `questlog` binary exposes both through a small CLI.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod game;
pub mod logging;
pub mod ports;
pub mod session;
pub mod store;

use clap::error::ErrorKind;
use clap::Parser;

use crate::config::Settings;

/// Run the CLI with the provided arguments and settings from the environment.
///
/// # Errors
///
/// Returns an error string when the environment is misconfigured, argument
/// parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let settings = Settings::from_env()?;
    run_with_settings(args, &settings)
}

/// Run the CLI with explicit settings.
///
/// `--help` and `--version` print to stdout and succeed.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run_with_settings<I, T>(args: I, settings: &Settings) -> Result<(), String>
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
    commands::dispatch(&cli.command, settings)
}
