//! Identity port supplying the player's display name.

/// Supplies the name the player signed in with.
///
/// Sign-in is simulated: there is no authentication, only a name.
pub trait IdentityProvider: Send + Sync {
    /// Returns the display name, or `None` when nobody has signed in.
    fn display_name(&self) -> Option<String>;
}
