//! Scripted player actions.
//!
//! A script is a YAML list of actions, each tagged with `action`:
//!
//! ```yaml
//! - action: login
//!   name: Aria
//! - action: add
//!   description: Write the report
//!   effort: hard
//! - action: complete
//!   id: 9
//! ```

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::game::{EffortLevel, TaskId};

/// A user event, as the presentation layer would emit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Sign in. Without a name, the identity provider's name is used.
    Login {
        /// Name typed by the player.
        #[serde(default)]
        name: Option<String>,
    },
    /// Create a quest.
    Add {
        /// Quest title.
        description: String,
        /// Difficulty; medium when omitted.
        #[serde(default)]
        effort: EffortLevel,
    },
    /// Open a quest's details.
    Select {
        /// Quest to open.
        id: TaskId,
    },
    /// Close the details view.
    Deselect,
    /// Finish a quest and claim its reward.
    Complete {
        /// Quest to finish.
        id: TaskId,
    },
    /// Save edits from the details view. Omitted fields keep their text.
    Edit {
        /// Quest to edit.
        id: TaskId,
        /// New description.
        #[serde(default)]
        description: Option<String>,
        /// New details.
        #[serde(default)]
        details: Option<String>,
    },
}

/// Parses a YAML script. An empty document is an empty script.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or names an unknown action.
pub fn parse_script(yaml: &str) -> Result<Vec<Action>, String> {
    if yaml.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse script: {e}"))
}

/// Loads a script from `path`, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns an error if the script cannot be read or parsed.
pub fn load_script(path: &Path) -> Result<Vec<Action>, String> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("Failed to read script from stdin: {e}"))?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read script {}: {e}", path.display()))?
    };
    parse_script(&contents)
}
