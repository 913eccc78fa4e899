//! Service context bundling the port trait objects a session needs.

use chrono::{DateTime, Utc};

use crate::adapters::fixed::{FixedClock, FixedIdentity, SequentialIdGenerator};
use crate::adapters::live::{EnvIdentity, LiveClock, LiveIdGenerator};
use crate::ports::{Clock, IdGenerator, IdentityProvider};

/// Bundles the external boundaries of a play session.
pub struct SessionContext {
    /// Timestamps journal entries.
    pub clock: Box<dyn Clock>,
    /// Names sessions.
    pub ids: Box<dyn IdGenerator>,
    /// Supplies the signed-in player's name.
    pub identity: Box<dyn IdentityProvider>,
}

impl SessionContext {
    /// Live adapters. `name` overrides the environment identity when given.
    #[must_use]
    pub fn live(name: Option<String>) -> Self {
        let identity: Box<dyn IdentityProvider> = match name {
            Some(name) => Box::new(FixedIdentity::named(name)),
            None => Box::new(EnvIdentity),
        };
        Self { clock: Box::new(LiveClock), ids: Box::new(LiveIdGenerator), identity }
    }

    /// Fully deterministic adapters: frozen clock, sequential ids.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>, name: Option<String>) -> Self {
        Self {
            clock: Box::new(FixedClock(at)),
            ids: Box::new(SequentialIdGenerator::new("session")),
            identity: Box::new(FixedIdentity(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_context_is_deterministic() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let ctx = SessionContext::fixed(at, Some("Aria".into()));
        assert_eq!(ctx.clock.now(), at);
        assert_eq!(ctx.ids.generate_id(), "session-1");
        assert_eq!(ctx.identity.display_name().as_deref(), Some("Aria"));
    }

    #[test]
    fn live_context_prefers_explicit_name() {
        let ctx = SessionContext::live(Some("Bruno".into()));
        assert_eq!(ctx.identity.display_name().as_deref(), Some("Bruno"));
    }
}
