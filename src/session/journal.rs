//! Record of rewards earned during a session.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::game::TaskId;

/// One completed quest and what it paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalEntry {
    /// When the quest was completed.
    pub at: DateTime<Utc>,
    /// The completed quest.
    pub task_id: TaskId,
    /// Its description at completion time.
    pub description: String,
    /// Experience granted.
    pub xp: u32,
    /// Gold granted.
    pub gold: u32,
    /// Hero level before the reward.
    pub level_before: u32,
    /// Hero level after the reward.
    pub level_after: u32,
}

impl JournalEntry {
    /// Whether this reward crossed at least one level boundary.
    #[must_use]
    pub fn leveled_up(&self) -> bool {
        self.level_after > self.level_before
    }
}

/// Append-only list of journal entries.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Appends an entry.
    pub fn record(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Entries in completion order.
    #[must_use]
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Sum of experience granted.
    #[must_use]
    pub fn total_xp(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.xp)).sum()
    }

    /// Sum of gold granted.
    #[must_use]
    pub fn total_gold(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.gold)).sum()
    }

    /// `true` when nothing has been completed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(xp: u32, gold: u32, levels: (u32, u32)) -> JournalEntry {
        JournalEntry {
            at: Utc::now(),
            task_id: TaskId(1),
            description: "Quest".into(),
            xp,
            gold,
            level_before: levels.0,
            level_after: levels.1,
        }
    }

    #[test]
    fn totals_accumulate() {
        let mut journal = Journal::default();
        assert!(journal.is_empty());

        journal.record(entry(30, 15, (1, 1)));
        journal.record(entry(100, 50, (1, 2)));

        assert_eq!(journal.entries().len(), 2);
        assert_eq!(journal.total_xp(), 130);
        assert_eq!(journal.total_gold(), 65);
        assert!(!journal.entries()[0].leveled_up());
        assert!(journal.entries()[1].leveled_up());
    }
}
