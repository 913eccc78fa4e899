//! ID generator port for session identifiers.

/// Generates unique identifiers.
///
/// Task ids are not drawn from here; they follow the store's `max + 1` rule.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
