//! Clock port for timestamping journal entries.

use chrono::{DateTime, Utc};

/// Provides the current time.
///
/// Tests substitute a fixed clock so journal output is deterministic.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
