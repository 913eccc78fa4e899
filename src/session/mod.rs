//! Play session: the presentation-side driver of the store.
//!
//! A [`Session`] turns player [`Action`]s into store operations, applies the
//! same enablement rules the screens do (no blank quests, no blank sign-in,
//! edits only when something changed) and hands back [`Feedback`] for the
//! caller to render. Rewards are recorded in a [`Journal`].

mod journal;
mod script;

use std::fmt;

use tracing::{info, warn};

pub use journal::{Journal, JournalEntry};
pub use script::{load_script, parse_script, Action};

use crate::context::SessionContext;
use crate::game::{is_blank, EditDraft, EffortLevel, GameState, Task, TaskId};
use crate::store::TaskGameStore;

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// The hero now carries this name.
    SignedIn {
        /// Name in effect.
        name: String,
    },
    /// A quest was created.
    Added {
        /// The new quest.
        task: Task,
    },
    /// The selection changed.
    Selected {
        /// Newly selected quest; `None` after deselecting.
        task: Option<Task>,
    },
    /// A quest was completed and its reward granted.
    Completed {
        /// The completed quest.
        task: Task,
        /// The journal line written for it.
        entry: JournalEntry,
    },
    /// A quest's text was saved.
    Edited {
        /// The quest after saving.
        task: Task,
    },
    /// The store absorbed the action without changing anything.
    Ignored {
        /// Why nothing happened.
        reason: String,
    },
    /// The action failed an input check before reaching the store.
    Rejected {
        /// Which check failed.
        reason: String,
    },
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignedIn { name } => write!(f, "Signed in as {name}"),
            Self::Added { task } => write!(
                f,
                "Added quest #{} '{}' ({}, {})",
                task.id,
                task.description,
                task.effort,
                reward_text(task.effort)
            ),
            Self::Selected { task: Some(task) } => {
                write!(f, "Selected quest #{} '{}'", task.id, task.description)
            }
            Self::Selected { task: None } => write!(f, "Selection cleared"),
            Self::Completed { task, entry } => {
                write!(
                    f,
                    "Quest #{} '{}' completed: +{} XP, +{} gold",
                    task.id, task.description, entry.xp, entry.gold
                )?;
                if entry.leveled_up() {
                    write!(f, ". Level up! Now level {}", entry.level_after)?;
                }
                Ok(())
            }
            Self::Edited { task } => write!(f, "Saved quest #{} '{}'", task.id, task.description),
            Self::Ignored { reason } => write!(f, "Ignored: {reason}"),
            Self::Rejected { reason } => write!(f, "Rejected: {reason}"),
        }
    }
}

/// "+X XP, +Y gold" for an effort level.
#[must_use]
pub fn reward_text(effort: EffortLevel) -> String {
    format!("+{} XP, +{} gold", effort.xp(), effort.gold())
}

/// One player's session over a store.
pub struct Session {
    id: String,
    store: TaskGameStore,
    ctx: SessionContext,
    journal: Journal,
}

impl Session {
    /// Starts a session over `state`.
    #[must_use]
    pub fn new(ctx: SessionContext, state: GameState) -> Self {
        let id = ctx.ids.generate_id();
        info!(session_id = %id, tasks = state.tasks.len(), "session started");
        Self { id, store: TaskGameStore::with_state(state), ctx, journal: Journal::default() }
    }

    /// Session identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        self.store.state()
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &TaskGameStore {
        &self.store
    }

    /// Rewards earned so far.
    #[must_use]
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Applies every action in order.
    pub fn run(&mut self, actions: &[Action]) -> Vec<Feedback> {
        actions.iter().map(|action| self.apply(action)).collect()
    }

    /// Applies one action.
    pub fn apply(&mut self, action: &Action) -> Feedback {
        let feedback = match action {
            Action::Login { name } => self.login(name.as_deref()),
            Action::Add { description, effort } => self.add(description, *effort),
            Action::Select { id } => self.select(*id),
            Action::Deselect => {
                self.store.select_task(None);
                Feedback::Selected { task: None }
            }
            Action::Complete { id } => self.complete(*id),
            Action::Edit { id, description, details } => {
                self.edit(*id, description.as_deref(), details.as_deref())
            }
        };
        if let Feedback::Ignored { reason } | Feedback::Rejected { reason } = &feedback {
            warn!(session_id = %self.id, ?action, %reason, "action had no effect");
        }
        feedback
    }

    fn login(&mut self, name: Option<&str>) -> Feedback {
        let name = name
            .filter(|name| !is_blank(name))
            .map(str::to_string)
            .or_else(|| self.ctx.identity.display_name());
        let Some(name) = name.filter(|name| !is_blank(name)) else {
            return Feedback::Rejected { reason: "a hero name is required".into() };
        };
        self.store.set_hero_name(&name);
        info!(session_id = %self.id, hero = %name, "signed in");
        Feedback::SignedIn { name: self.store.hero().hero_name.clone() }
    }

    fn add(&mut self, description: &str, effort: EffortLevel) -> Feedback {
        if is_blank(description) {
            return Feedback::Rejected { reason: "quest description is blank".into() };
        }
        Feedback::Added { task: self.store.add_task(description, effort) }
    }

    fn select(&mut self, id: TaskId) -> Feedback {
        self.store.select_task(Some(id));
        match self.store.state().selected_task() {
            Some(task) if task.id == id => Feedback::Selected { task: Some(task.clone()) },
            _ => Feedback::Ignored { reason: format!("no quest #{id}") },
        }
    }

    fn complete(&mut self, id: TaskId) -> Feedback {
        let level_before = self.store.hero().level;
        let Some(task) = self.store.complete_task(id) else {
            return Feedback::Ignored { reason: self.unchanged_reason(id) };
        };

        let entry = JournalEntry {
            at: self.ctx.clock.now(),
            task_id: task.id,
            description: task.description.clone(),
            xp: task.effort.xp(),
            gold: task.effort.gold(),
            level_before,
            level_after: self.store.hero().level,
        };
        info!(
            session_id = %self.id,
            task_id = %task.id,
            xp = entry.xp,
            gold = entry.gold,
            level = entry.level_after,
            "quest completed"
        );
        self.journal.record(entry.clone());
        Feedback::Completed { task, entry }
    }

    fn edit(&mut self, id: TaskId, description: Option<&str>, details: Option<&str>) -> Feedback {
        let Some(task) = self.store.state().task(id) else {
            return Feedback::Ignored { reason: format!("no quest #{id}") };
        };
        if task.is_completed {
            return Feedback::Ignored { reason: self.unchanged_reason(id) };
        }

        let mut draft = EditDraft::from_task(task);
        if let Some(description) = description {
            draft.description = description.to_string();
        }
        if let Some(details) = details {
            draft.details = details.to_string();
        }
        if !draft.can_save(task) {
            return Feedback::Ignored { reason: format!("nothing to save for quest #{id}") };
        }

        // A blank description never overwrites the stored one.
        if !is_blank(&draft.description) {
            self.store.update_task_description(id, &draft.description);
        }
        self.store.update_task_details(id, &draft.details);

        match self.store.state().task(id) {
            Some(task) => Feedback::Edited { task: task.clone() },
            None => Feedback::Ignored { reason: format!("no quest #{id}") },
        }
    }

    fn unchanged_reason(&self, id: TaskId) -> String {
        match self.store.state().task(id) {
            Some(task) if task.is_completed => format!("quest #{id} is already completed"),
            Some(_) => format!("quest #{id} is still pending"),
            None => format!("no quest #{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn session(name: Option<&str>) -> Session {
        let at = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        Session::new(SessionContext::fixed(at, name.map(str::to_string)), GameState::seeded())
    }

    #[test]
    fn session_gets_an_id() {
        assert_eq!(session(None).id(), "session-1");
    }

    #[test]
    fn login_prefers_typed_name() {
        let mut s = session(Some("Provider"));
        let fb = s.apply(&Action::Login { name: Some("Typed".into()) });
        assert_eq!(fb, Feedback::SignedIn { name: "Typed".into() });
        assert_eq!(s.state().hero.hero_name, "Typed");
    }

    #[test]
    fn login_falls_back_to_provider() {
        let mut s = session(Some("Provider"));
        let fb = s.apply(&Action::Login { name: Some("  ".into()) });
        assert_eq!(fb, Feedback::SignedIn { name: "Provider".into() });
    }

    #[test]
    fn login_without_any_name_is_rejected() {
        let mut s = session(None);
        let fb = s.apply(&Action::Login { name: None });
        assert!(matches!(fb, Feedback::Rejected { .. }));
        assert_eq!(s.state().hero.hero_name, crate::game::DEFAULT_HERO_NAME);
    }

    #[test]
    fn blank_quest_is_rejected_before_the_store() {
        let mut s = session(None);
        let fb = s.apply(&Action::Add { description: " ".into(), effort: EffortLevel::Easy });
        assert!(matches!(fb, Feedback::Rejected { .. }));
        assert_eq!(s.state().tasks.len(), 4);
    }

    #[test]
    fn completing_records_journal_and_message() {
        let mut s = session(None);
        let fb = s.apply(&Action::Complete { id: TaskId(3) });

        let Feedback::Completed { task, entry } = &fb else { panic!("expected completion") };
        assert!(task.is_completed);
        assert_eq!((entry.xp, entry.gold), (30, 15));
        assert_eq!(entry.at, Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap());
        assert_eq!(fb.to_string(), "Quest #3 'Ir ao mercado' completed: +30 XP, +15 gold");
        assert_eq!(s.journal().entries().len(), 1);
    }

    #[test]
    fn level_up_is_announced() {
        let mut s = session(None);
        let fb = s.apply(&Action::Complete { id: TaskId(8) });
        assert!(fb.to_string().ends_with("Level up! Now level 2"), "{fb}");

        let fb = s.apply(&Action::Complete { id: TaskId(1) });
        assert!(!fb.to_string().contains("Level up"), "{fb}");
    }

    #[test]
    fn second_completion_is_ignored() {
        let mut s = session(None);
        s.apply(&Action::Complete { id: TaskId(2) });
        let fb = s.apply(&Action::Complete { id: TaskId(2) });

        assert_eq!(fb, Feedback::Ignored { reason: "quest #2 is already completed".into() });
        assert_eq!(s.journal().entries().len(), 1);
        assert_eq!(s.state().hero.gold, 5);
    }

    #[test]
    fn select_unknown_is_ignored() {
        let mut s = session(None);
        let fb = s.apply(&Action::Select { id: TaskId(5) });
        assert_eq!(fb, Feedback::Ignored { reason: "no quest #5".into() });
    }

    #[test]
    fn edit_saves_changes() {
        let mut s = session(None);
        let fb = s.apply(&Action::Edit {
            id: TaskId(3),
            description: Some("Ir a feira".into()),
            details: Some("Frutas".into()),
        });
        let Feedback::Edited { task } = fb else { panic!("expected edit") };
        assert_eq!(task.description, "Ir a feira");
        assert_eq!(task.details, "Frutas");
    }

    #[test]
    fn edit_with_blank_description_keeps_title() {
        let mut s = session(None);
        s.apply(&Action::Edit {
            id: TaskId(3),
            description: Some(String::new()),
            details: Some("Pao".into()),
        });
        let task = s.state().task(TaskId(3)).unwrap();
        assert_eq!(task.description, "Ir ao mercado");
        assert_eq!(task.details, "Pao");
    }

    #[test]
    fn edit_without_changes_is_ignored() {
        let mut s = session(None);
        let fb = s.apply(&Action::Edit { id: TaskId(1), description: None, details: None });
        assert!(matches!(fb, Feedback::Ignored { .. }));
    }

    #[test]
    fn edit_completed_is_ignored() {
        let mut s = session(None);
        s.apply(&Action::Complete { id: TaskId(1) });
        let fb =
            s.apply(&Action::Edit { id: TaskId(1), description: Some("New".into()), details: None });
        assert_eq!(fb, Feedback::Ignored { reason: "quest #1 is already completed".into() });
    }

    #[test]
    fn run_returns_one_feedback_per_action() {
        let mut s = session(None);
        let feedback = s.run(&[
            Action::Add { description: "Treinar".into(), effort: EffortLevel::Hard },
            Action::Select { id: TaskId(9) },
            Action::Complete { id: TaskId(9) },
            Action::Deselect,
        ]);
        assert_eq!(feedback.len(), 4);
        assert!(matches!(feedback[2], Feedback::Completed { .. }));
        assert_eq!(feedback[3], Feedback::Selected { task: None });
    }
}
