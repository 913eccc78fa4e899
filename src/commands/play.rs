//! `questlog play` command.

use std::path::Path;

use serde_json::json;

use super::render;
use crate::cli::SessionArgs;
use crate::config::Seed;
use crate::context::SessionContext;
use crate::session::{load_script, Session};

/// Execute the `play` command.
///
/// Loads the script, runs it against a fresh session and prints one line of
/// feedback per action followed by the final state and the reward journal.
/// With `--json` the same information is printed as a single JSON document.
///
/// # Errors
///
/// Returns an error string if the script cannot be loaded or the report
/// cannot be serialized.
pub fn run(script: &Path, args: &SessionArgs, seed: Seed) -> Result<(), String> {
    let actions = load_script(script)?;
    let mut session = Session::new(SessionContext::live(args.name.clone()), seed.initial_state());
    let feedback = session.run(&actions);

    if args.json {
        let lines: Vec<String> = feedback.iter().map(ToString::to_string).collect();
        let body = json!({
            "session": session.id(),
            "feedback": lines,
            "state": session.state(),
            "summary": session.state().summary(),
            "journal": session.journal(),
        });
        let text = serde_json::to_string_pretty(&body)
            .map_err(|e| format!("Failed to serialize session report: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    for line in &feedback {
        println!("{line}");
    }
    if !feedback.is_empty() {
        println!();
    }
    render::print_hero(session.state());
    println!();
    render::print_tasks(session.state());
    println!();
    render::print_journal(session.journal());
    Ok(())
}
