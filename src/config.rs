//! Runtime settings read from the environment.
//!
//! `main` loads a `.env` file first (via `dotenvy`), so every variable here
//! may also come from there. Command-line flags take precedence.

use std::str::FromStr;

use crate::game::GameState;

/// Player name used by the environment identity adapter.
pub const HERO_NAME_VAR: &str = "QUESTLOG_HERO_NAME";
/// Initial quest log: `default` (starter quests) or `empty`.
pub const SEED_VAR: &str = "QUESTLOG_SEED";
/// `tracing` filter directive.
pub const LOG_VAR: &str = "QUESTLOG_LOG";
/// Filter used when `QUESTLOG_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "questlog=warn";

/// Which quests a new session starts with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Seed {
    /// The built-in starter quests.
    #[default]
    Starter,
    /// No quests at all.
    Empty,
}

impl Seed {
    /// Builds the initial game state for this seed.
    #[must_use]
    pub fn initial_state(self) -> GameState {
        match self {
            Self::Starter => GameState::seeded(),
            Self::Empty => GameState::default(),
        }
    }
}

impl FromStr for Seed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "default" | "starter" => Ok(Self::Starter),
            "empty" | "none" => Ok(Self::Empty),
            other => Err(format!("Invalid {SEED_VAR} value '{other}' (expected 'default' or 'empty')")),
        }
    }
}

/// Settings shared by all commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Initial quest log.
    pub seed: Seed,
    /// Log filter directive.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self { seed: Seed::default(), log_filter: DEFAULT_LOG_FILTER.to_string() }
    }
}

impl Settings {
    /// Reads settings from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, treating blank values as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let seed =
            get(SEED_VAR).map(|value| value.parse::<Seed>()).transpose()?.unwrap_or_default();
        let log_filter = get(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self { seed, log_filter })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn reads_seed_and_filter() {
        let settings =
            Settings::from_lookup(lookup_from(&[(SEED_VAR, "empty"), (LOG_VAR, "questlog=debug")]))
                .unwrap();
        assert_eq!(settings.seed, Seed::Empty);
        assert_eq!(settings.log_filter, "questlog=debug");
    }

    #[test]
    fn blank_values_fall_back() {
        let settings =
            Settings::from_lookup(lookup_from(&[(SEED_VAR, "  "), (LOG_VAR, "")])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn rejects_unknown_seed() {
        let err = Settings::from_lookup(lookup_from(&[(SEED_VAR, "random")])).unwrap_err();
        assert!(err.contains(SEED_VAR));
    }

    #[test]
    fn seed_builds_state() {
        assert_eq!(Seed::Starter.initial_state().tasks.len(), 4);
        assert!(Seed::Empty.initial_state().tasks.is_empty());
    }
}
