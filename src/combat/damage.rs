//! Damage roll for a single hit
//!
//! Defense halves into mitigation, the remainder swings by a variance window
//! and may crit. A hit always lands for at least one point, so no defense
//! value can stall a fight.

use serde::{Deserialize, Serialize};

use crate::combat::constants::{
    CRIT_MULTIPLIER, DAMAGE_VARIANCE_MAX, DAMAGE_VARIANCE_MIN, DEFENSE_MITIGATION, MIN_DAMAGE,
};
use crate::core::RandomSource;

/// Outcome of one damage roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRoll {
    /// Always >= 1
    pub amount: u32,
    pub crit: bool,
}

/// Damage before variance and crit: `max(1, attack - floor(defense / 2))`
pub fn base_damage(attack: u32, defense: u32) -> u32 {
    let mitigation = (defense as f64 * DEFENSE_MITIGATION).floor() as i64;
    (attack as i64 - mitigation).max(MIN_DAMAGE as i64) as u32
}

/// Roll one hit
///
/// Consumes two draws in order: the variance multiplier, then the crit test.
pub fn compute_damage<R: RandomSource + ?Sized>(
    attack: u32,
    defense: u32,
    crit_chance: f64,
    rng: &mut R,
) -> DamageRoll {
    let base = base_damage(attack, defense);

    let variance = rng.uniform(DAMAGE_VARIANCE_MIN, DAMAGE_VARIANCE_MAX);
    let mut raw = base as f64 * variance;

    let crit = rng.unit() < crit_chance;
    if crit {
        raw *= CRIT_MULTIPLIER;
    }

    let amount = (raw.floor() as u32).max(MIN_DAMAGE);
    debug_assert!(amount >= MIN_DAMAGE);

    tracing::trace!(attack, defense, base, variance, crit, amount, "damage roll");

    DamageRoll { amount, crit }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{seeded, ScriptedRolls};

    #[test]
    fn test_base_damage_halves_defense() {
        assert_eq!(base_damage(18, 6), 15);
        assert_eq!(base_damage(18, 7), 15);
        assert_eq!(base_damage(10, 100), 1);
        assert_eq!(base_damage(0, 0), 1);
    }

    #[test]
    fn test_variance_bounds() {
        // lowest variance: 15 * 0.85 = 12.75
        let mut low = ScriptedRolls::new([0.0, 0.99]);
        assert_eq!(compute_damage(18, 6, 0.0, &mut low).amount, 12);

        // highest variance: 15 * 1.15 = 17.25
        let mut high = ScriptedRolls::new([1.0, 0.99]);
        assert_eq!(compute_damage(18, 6, 0.0, &mut high).amount, 17);
    }

    #[test]
    fn test_crit_multiplies() {
        // 15 * 1.0 * 1.8 = 27
        let mut rolls = ScriptedRolls::new([0.5, 0.0]);
        let roll = compute_damage(18, 6, 0.12, &mut rolls);
        assert!(roll.crit);
        assert_eq!(roll.amount, 27);
    }

    #[test]
    fn test_crit_chance_zero_never_crits() {
        let mut rng = seeded(3);
        for _ in 0..500 {
            let roll = compute_damage(18, 6, 0.0, &mut rng);
            assert!(!roll.crit);
            assert!((12..=17).contains(&roll.amount));
        }
    }

    #[test]
    fn test_overwhelming_defense_still_hurts() {
        let mut rng = seeded(11);
        for _ in 0..200 {
            let roll = compute_damage(1, 10_000, 0.5, &mut rng);
            assert!(roll.amount >= 1);
        }
    }
}
