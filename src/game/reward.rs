//! Reward and level-up arithmetic.

use serde::{Deserialize, Serialize};

use super::effort::EffortLevel;
use super::hero::HeroStatus;

/// What a single reward did to the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardOutcome {
    /// Experience granted.
    pub xp: u32,
    /// Gold granted.
    pub gold: u32,
    /// Number of level boundaries crossed (may exceed one).
    pub levels_gained: u32,
}

/// Threshold for the level after one with `threshold`: `floor(threshold * 1.25)`.
///
/// Computed as `threshold * 5 / 4` in integer arithmetic, which truncates
/// exactly like the floating-point floor for every `u32` input.
#[must_use]
pub fn next_threshold(threshold: u32) -> u32 {
    let grown = u64::from(threshold) * 5 / 4;
    u32::try_from(grown).unwrap_or(u32::MAX)
}

/// Grants the reward for `effort` to `hero`.
pub fn apply_reward(hero: &mut HeroStatus, effort: EffortLevel) -> RewardOutcome {
    grant(hero, effort.xp(), effort.gold())
}

/// Grants raw `xp` and `gold`, levelling up as many times as the experience
/// allows. Afterwards `current_xp < xp_to_next_level`.
pub(crate) fn grant(hero: &mut HeroStatus, xp: u32, gold: u32) -> RewardOutcome {
    let mut new_xp = hero.current_xp.saturating_add(xp);
    let new_gold = hero.gold.saturating_add(gold);
    let mut new_level = hero.level;
    // A zero threshold would never terminate.
    let mut threshold = hero.xp_to_next_level.max(1);

    while new_xp >= threshold {
        new_level = new_level.saturating_add(1);
        new_xp -= threshold;
        threshold = next_threshold(threshold);
    }

    let levels_gained = new_level - hero.level;
    hero.level = new_level;
    hero.current_xp = new_xp;
    hero.xp_to_next_level = threshold;
    hero.gold = new_gold;

    RewardOutcome { xp, gold, levels_gained }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero_at(current_xp: u32, xp_to_next_level: u32) -> HeroStatus {
        HeroStatus { current_xp, xp_to_next_level, ..HeroStatus::default() }
    }

    #[test]
    fn threshold_growth_truncates() {
        assert_eq!(next_threshold(100), 125);
        assert_eq!(next_threshold(125), 156);
        assert_eq!(next_threshold(156), 195);
        assert_eq!(next_threshold(1), 1);
        assert_eq!(next_threshold(u32::MAX), u32::MAX);
    }

    #[test]
    fn reward_below_threshold_only_accumulates() {
        let mut hero = hero_at(0, 100);
        let outcome = apply_reward(&mut hero, EffortLevel::Medium);

        assert_eq!(outcome, RewardOutcome { xp: 30, gold: 15, levels_gained: 0 });
        assert_eq!((hero.level, hero.current_xp, hero.xp_to_next_level, hero.gold), (1, 30, 100, 15));
    }

    #[test]
    fn critical_reward_levels_up_once() {
        let mut hero = hero_at(90, 100);
        let outcome = apply_reward(&mut hero, EffortLevel::Critical);

        assert_eq!(outcome.levels_gained, 1);
        assert_eq!(hero.level, 2);
        assert_eq!(hero.current_xp, 90);
        assert_eq!(hero.xp_to_next_level, 125);
        assert_eq!(hero.gold, 50);
    }

    #[test]
    fn large_reward_crosses_several_levels() {
        let mut hero = hero_at(90, 100);
        let outcome = grant(&mut hero, 300, 0);

        assert_eq!(outcome.levels_gained, 3);
        assert_eq!(hero.level, 4);
        assert_eq!(hero.current_xp, 9);
        assert_eq!(hero.xp_to_next_level, 195);
    }

    #[test]
    fn exact_threshold_levels_up() {
        let mut hero = hero_at(70, 100);
        apply_reward(&mut hero, EffortLevel::Medium);

        assert_eq!(hero.level, 2);
        assert_eq!(hero.current_xp, 0);
        assert_eq!(hero.xp_to_next_level, 125);
    }

    #[test]
    fn xp_stays_below_threshold_over_many_rewards() {
        let mut hero = HeroStatus::default();
        let mut gold = 0;
        for round in 0..200 {
            let effort = EffortLevel::ALL[round % EffortLevel::ALL.len()];
            apply_reward(&mut hero, effort);
            gold += effort.gold();
            assert!(hero.current_xp < hero.xp_to_next_level);
        }
        assert_eq!(hero.gold, gold);
        assert!(hero.level > 1);
    }

    #[test]
    fn zero_threshold_does_not_hang() {
        let mut hero = hero_at(0, 0);
        grant(&mut hero, 3, 0);
        assert!(hero.current_xp < hero.xp_to_next_level);
        assert_eq!(hero.level, 4);
    }
}
