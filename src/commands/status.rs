//! `questlog status` command.

use serde_json::json;

use super::render;
use crate::cli::SessionArgs;
use crate::config::Seed;
use crate::context::SessionContext;
use crate::game::GameState;
use crate::store::TaskGameStore;

/// Execute the `status` command.
///
/// Shows the hero profile, quest counts and the quest table a new session
/// starts with. The hero is named by the identity provider when one is
/// available.
///
/// # Errors
///
/// Returns an error string if JSON serialization fails.
pub fn run(args: &SessionArgs, seed: Seed) -> Result<(), String> {
    let ctx = SessionContext::live(args.name.clone());
    let state = initial_state(&ctx, seed);

    if args.json {
        let body = json!({ "state": state, "summary": state.summary() });
        let text = serde_json::to_string_pretty(&body)
            .map_err(|e| format!("Failed to serialize status: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    render::print_hero(&state);
    println!();
    render::print_tasks(&state);
    Ok(())
}

fn initial_state(ctx: &SessionContext, seed: Seed) -> GameState {
    let mut store = TaskGameStore::with_state(seed.initial_state());
    if let Some(name) = ctx.identity.display_name() {
        store.set_hero_name(&name);
    }
    store.snapshot()
}
