//! Effort levels and their fixed rewards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Difficulty category of a task. Determines the XP and gold it grants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffortLevel {
    /// Quick chores.
    Easy,
    /// The default.
    #[default]
    Medium,
    /// Demanding work.
    Hard,
    /// Major undertakings.
    Critical,
}

impl EffortLevel {
    /// All levels, cheapest first.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Critical];

    /// Experience granted on completion.
    #[must_use]
    pub const fn xp(self) -> u32 {
        match self {
            Self::Easy => 10,
            Self::Medium => 30,
            Self::Hard => 50,
            Self::Critical => 100,
        }
    }

    /// Gold granted on completion.
    #[must_use]
    pub const fn gold(self) -> u32 {
        match self {
            Self::Easy => 5,
            Self::Medium => 15,
            Self::Hard => 25,
            Self::Critical => 50,
        }
    }

    /// Display label shown to players.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Fácil",
            Self::Medium => "Médio",
            Self::Hard => "Difícil",
            Self::Critical => "Crítico",
        }
    }

    /// Stable machine name, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for EffortLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EffortLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == wanted)
            .ok_or_else(|| format!("Unknown effort level '{s}' (expected easy, medium, hard or critical)"))
    }
}
