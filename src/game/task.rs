//! Task (quest) type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::effort::EffortLevel;

/// Identifier of a task. Assigned once, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single quest in the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier.
    pub id: TaskId,
    /// Short title.
    pub description: String,
    /// Optional free-form notes.
    #[serde(default)]
    pub details: String,
    /// Set once the reward has been granted. Never reverts.
    #[serde(default)]
    pub is_completed: bool,
    /// Difficulty, fixed at creation.
    #[serde(default)]
    pub effort: EffortLevel,
}

impl Task {
    /// Creates a pending task with empty details.
    #[must_use]
    pub fn new(id: TaskId, description: impl Into<String>, effort: EffortLevel) -> Self {
        Self { id, description: description.into(), details: String::new(), is_completed: false, effort }
    }

    /// Builder-style setter for `details`.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_pending_without_details() {
        let task = Task::new(TaskId(4), "Water plants", EffortLevel::Easy);
        assert!(!task.is_completed);
        assert!(task.details.is_empty());
        assert_eq!(task.id.to_string(), "4");
    }

    #[test]
    fn deserializes_with_defaults() {
        let task: Task = serde_json::from_str(r#"{"id": 7, "description": "Read"}"#).unwrap();
        assert_eq!(task.id, TaskId(7));
        assert_eq!(task.effort, EffortLevel::Medium);
        assert!(!task.is_completed);
    }
}
