//! Hero progression status.

use serde::{Deserialize, Serialize};

/// Name used until the player logs in with a non-blank one.
pub const DEFAULT_HERO_NAME: &str = "Herói";

/// Level, experience and gold of the single player hero.
///
/// After any reward `current_xp < xp_to_next_level` holds; see
/// [`apply_reward`](super::apply_reward).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroStatus {
    /// Current level, starting at 1.
    pub level: u32,
    /// Experience accumulated toward the next level.
    pub current_xp: u32,
    /// Experience threshold for the next level-up. Always positive.
    pub xp_to_next_level: u32,
    /// Gold collected. Never decreases.
    pub gold: u32,
    /// Display name.
    pub hero_name: String,
}

impl Default for HeroStatus {
    fn default() -> Self {
        Self {
            level: 1,
            current_xp: 0,
            xp_to_next_level: 100,
            gold: 0,
            hero_name: DEFAULT_HERO_NAME.to_string(),
        }
    }
}

impl HeroStatus {
    /// Fraction of the way to the next level, clamped to `[0, 1]`.
    #[must_use]
    pub fn xp_progress(&self) -> f32 {
        if self.xp_to_next_level == 0 {
            return 1.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.current_xp as f32 / self.xp_to_next_level as f32;
        ratio.clamp(0.0, 1.0)
    }
}
