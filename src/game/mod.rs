//! Domain model for the quest log: tasks, effort levels, the hero and the
//! aggregate game state.
//!
//! Everything here is plain data plus pure functions. Mutation rules live in
//! [`crate::store`].

mod edit;
mod effort;
mod hero;
mod reward;
mod state;
mod task;

pub use edit::EditDraft;
pub use effort::EffortLevel;
pub use hero::{HeroStatus, DEFAULT_HERO_NAME};
pub use reward::{apply_reward, next_threshold, RewardOutcome};
pub use state::{GameState, Summary};
pub use task::{Task, TaskId};

/// Returns `true` when `text` has no non-whitespace character.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
