//! Command dispatch and handlers.

pub mod efforts;
pub mod play;
mod render;
pub mod status;

use crate::cli::{Command, SessionArgs};
use crate::config::{Seed, Settings};

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command, settings: &Settings) -> Result<(), String> {
    match command {
        Command::Status { session } => status::run(session, seed_for(session, settings)),
        Command::Efforts => {
            efforts::run();
            Ok(())
        }
        Command::Play { script, session } => play::run(script, session, seed_for(session, settings)),
    }
}

/// `--empty` wins over `QUESTLOG_SEED`.
fn seed_for(args: &SessionArgs, settings: &Settings) -> Seed {
    if args.empty {
        Seed::Empty
    } else {
        settings.seed
    }
}
