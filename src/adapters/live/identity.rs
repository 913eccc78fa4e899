//! Identity taken from the environment.

use crate::config::HERO_NAME_VAR;
use crate::game::is_blank;
use crate::ports::IdentityProvider;

/// Reads the player name from `QUESTLOG_HERO_NAME`.
#[derive(Default)]
pub struct EnvIdentity;

impl IdentityProvider for EnvIdentity {
    fn display_name(&self) -> Option<String> {
        std::env::var(HERO_NAME_VAR).ok().filter(|name| !is_blank(name))
    }
}
