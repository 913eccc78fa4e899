//! Binary entrypoint for the `questlog` CLI.

use std::process::ExitCode;

use questlog::config::Settings;

fn main() -> ExitCode {
    // A missing .env file is fine; the process environment still applies.
    let _ = dotenvy::dotenv();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    questlog::logging::init(&settings.log_filter);

    match questlog::run_with_settings(std::env::args(), &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = %err, "command failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
