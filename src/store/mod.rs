//! Task game store — the single owner of [`GameState`].
//!
//! Every mutation goes through a `&mut self` method, so there is exactly one
//! writer at a time and an observer holding a [`snapshot`](TaskGameStore::snapshot)
//! never sees a half-applied operation.
//!
//! The store is permissive: invalid requests (blank names, already-completed
//! tasks, unknown ids) are absorbed as no-ops rather than reported as errors.
//! Callers gate user input with their own enablement checks (see
//! [`EditDraft::can_save`](crate::game::EditDraft::can_save)).

use tracing::debug;

use crate::game::{
    apply_reward, is_blank, EffortLevel, GameState, HeroStatus, Task, TaskId, DEFAULT_HERO_NAME,
};

/// Authoritative in-memory store of the hero and the quest log.
#[derive(Debug, Clone)]
pub struct TaskGameStore {
    state: GameState,
}

impl Default for TaskGameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskGameStore {
    /// Creates a store holding the seeded starter state.
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(GameState::seeded())
    }

    /// Creates a store from an explicit initial state.
    #[must_use]
    pub fn with_state(state: GameState) -> Self {
        Self { state }
    }

    /// Borrows the current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns an owned copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Borrows the hero.
    #[must_use]
    pub fn hero(&self) -> &HeroStatus {
        &self.state.hero
    }

    /// Sets the hero's display name. A blank name restores the default.
    pub fn set_hero_name(&mut self, name: &str) {
        self.state.hero.hero_name =
            if is_blank(name) { DEFAULT_HERO_NAME.to_string() } else { name.to_string() };
    }

    /// Selects a task, or clears the selection with `None`.
    ///
    /// Selecting an id that is not in the log leaves the selection unchanged.
    pub fn select_task(&mut self, id: Option<TaskId>) {
        match id {
            Some(id) if self.state.task(id).is_none() => {
                debug!(task_id = %id, "select ignored: no such task");
            }
            _ => self.state.selected = id,
        }
    }

    /// Appends a new pending task and returns it.
    ///
    /// The id is one past the largest existing id. The description is not
    /// validated here.
    pub fn add_task(&mut self, description: &str, effort: EffortLevel) -> Task {
        let task = Task::new(self.state.next_task_id(), description, effort);
        self.state.tasks.push(task.clone());
        debug!(task_id = %task.id, effort = effort.as_str(), "task added");
        task
    }

    /// Marks a task completed and grants its reward.
    ///
    /// Returns the updated task, or `None` when the task is unknown or was
    /// already completed. The reward is therefore granted exactly once.
    pub fn complete_task(&mut self, id: TaskId) -> Option<Task> {
        let Some(task) = self.state.task_mut(id) else {
            debug!(task_id = %id, "complete ignored: no such task");
            return None;
        };
        if task.is_completed {
            debug!(task_id = %id, "complete ignored: already completed");
            return None;
        }
        task.is_completed = true;
        let completed = task.clone();

        let outcome = apply_reward(&mut self.state.hero, completed.effort);
        debug!(
            task_id = %id,
            xp = outcome.xp,
            gold = outcome.gold,
            levels_gained = outcome.levels_gained,
            "task completed"
        );
        Some(completed)
    }

    /// Replaces a pending task's description. Completed tasks are left as is.
    pub fn update_task_description(&mut self, id: TaskId, description: &str) {
        if let Some(task) = self.pending_task_mut(id) {
            task.description = description.to_string();
        }
    }

    /// Replaces a pending task's details. Completed tasks are left as is.
    pub fn update_task_details(&mut self, id: TaskId, details: &str) {
        if let Some(task) = self.pending_task_mut(id) {
            task.details = details.to_string();
        }
    }

    fn pending_task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        match self.state.task_mut(id) {
            Some(task) if !task.is_completed => Some(task),
            Some(_) => {
                debug!(task_id = %id, "edit ignored: task is completed");
                None
            }
            None => {
                debug!(task_id = %id, "edit ignored: no such task");
                None
            }
        }
    }
}
