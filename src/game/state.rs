//! Aggregate game state and read-only queries over it.

use serde::{Deserialize, Serialize};

use super::effort::EffortLevel;
use super::hero::HeroStatus;
use super::task::{Task, TaskId};

/// Hero plus quest log plus the current selection.
///
/// `selected` is held as an id and resolved against `tasks` on every read, so
/// it always reflects the latest version of the selected task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The player's hero.
    pub hero: HeroStatus,
    /// Tasks in insertion order.
    pub tasks: Vec<Task>,
    /// Id of the selected task, if any.
    #[serde(default)]
    pub selected: Option<TaskId>,
}

/// Counts shown on the hero profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Tasks not yet completed.
    pub pending: usize,
    /// Tasks completed.
    pub completed: usize,
    /// Progress toward the next level, in `[0, 1]`.
    pub xp_progress: f32,
}

impl GameState {
    /// Initial state of a new session: default hero and the starter quests.
    #[must_use]
    pub fn seeded() -> Self {
        let tasks = vec![
            Task::new(TaskId(1), "Finalizar projeto baiao", EffortLevel::Hard)
                .with_details("Entregar a versão final"),
            Task::new(TaskId(2), "Ir no psicologo", EffortLevel::Easy)
                .with_details("To ficando maluco"),
            Task::new(TaskId(3), "Ir ao mercado", EffortLevel::Medium).with_details("Comprar cafe"),
            Task::new(TaskId(8), "Fazer API", EffortLevel::Critical)
                .with_details("Assistir as aulas e fazer a API"),
        ];
        Self { hero: HeroStatus::default(), tasks, selected: None }
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub(crate) fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    /// The selected task, resolved against the current collection.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.selected.and_then(|id| self.task(id))
    }

    /// Id the next added task will receive: one past the largest existing id.
    #[must_use]
    pub fn next_task_id(&self) -> TaskId {
        let max = self.tasks.iter().map(|task| task.id.0).max().unwrap_or(0);
        TaskId(max + 1)
    }

    /// Tasks still to do, in insertion order.
    pub fn pending_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| !task.is_completed)
    }

    /// Completed tasks, in insertion order.
    pub fn completed_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| task.is_completed)
    }

    /// Pending/completed counts and level progress.
    #[must_use]
    pub fn summary(&self) -> Summary {
        let completed = self.completed_tasks().count();
        Summary {
            pending: self.tasks.len() - completed,
            completed,
            xp_progress: self.hero.xp_progress(),
        }
    }
}
