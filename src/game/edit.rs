//! Edit drafts and the rule deciding when they may be saved.

use serde::{Deserialize, Serialize};

use super::task::Task;

/// Pending edits to a task's text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDraft {
    /// Proposed description.
    pub description: String,
    /// Proposed details.
    pub details: String,
}

impl EditDraft {
    /// Starts a draft from the task's current text.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self { description: task.description.clone(), details: task.details.clone() }
    }

    /// Whether saving this draft would change `task`.
    ///
    /// Completed tasks are read-only. A description only counts when it is
    /// non-blank; details may be cleared.
    #[must_use]
    pub fn can_save(&self, task: &Task) -> bool {
        if task.is_completed {
            return false;
        }
        let description_changed =
            !super::is_blank(&self.description) && self.description != task.description;
        description_changed || self.details != task.details
    }
}
