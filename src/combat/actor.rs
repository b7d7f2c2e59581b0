//! Shared stat block for the runner and the ICE it fights
//!
//! `alive` is a latch: it drops when hp reaches zero and nothing in the game
//! ever raises it again.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    pub hp_max: u32,
    hp: u32,
    pub attack: u32,
    pub defense: u32,
    /// Chance in [0, 1] that one of this actor's hits is critical
    pub crit_chance: f64,
    alive: bool,
}

impl Actor {
    /// A fresh actor at full health
    pub fn new(
        name: impl Into<String>,
        hp_max: u32,
        attack: u32,
        defense: u32,
        crit_chance: f64,
    ) -> Self {
        let hp_max = hp_max.max(1);
        Self {
            name: name.into(),
            hp_max,
            hp: hp_max,
            attack,
            defense,
            crit_chance: crit_chance.clamp(0.0, 1.0),
            alive: true,
        }
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    /// Subtract `amount` (negative counts as zero) and return what was applied
    ///
    /// The returned value is the clamped request, which can exceed the hp
    /// that was actually left on an overkill.
    pub fn take_damage(&mut self, amount: i64) -> u32 {
        let dealt = amount.clamp(0, u32::MAX as i64) as u32;
        self.hp = self.hp.saturating_sub(dealt);
        if self.hp == 0 {
            self.alive = false;
        }
        dealt
    }

    /// Add `amount` to hp, clamped to `[0, hp_max]`. A downed actor stays at 0.
    pub fn heal(&mut self, amount: i64) {
        if !self.alive {
            return;
        }
        let hp = (self.hp as i64).saturating_add(amount);
        self.hp = hp.clamp(0, self.hp_max as i64) as u32;
        if self.hp == 0 {
            self.alive = false;
        }
    }

    /// Refill hp to `hp_max`
    pub fn restore_full(&mut self) {
        self.hp = self.hp_max;
    }

    pub fn is_alive(&self) -> bool {
        self.alive && self.hp > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ice() -> Actor {
        Actor::new("Black ICE", 80, 14, 6, 0.05)
    }

    #[test]
    fn test_new_actor_full_health() {
        let actor = ice();
        assert_eq!(actor.hp(), 80);
        assert!(actor.is_alive());
    }

    #[test]
    fn test_take_damage_reduces_hp() {
        let mut actor = ice();
        assert_eq!(actor.take_damage(30), 30);
        assert_eq!(actor.hp(), 50);
        assert!(actor.is_alive());
    }

    #[test]
    fn test_negative_damage_is_ignored() {
        let mut actor = ice();
        assert_eq!(actor.take_damage(-12), 0);
        assert_eq!(actor.hp(), 80);
    }

    #[test]
    fn test_overkill_defeats_actor() {
        let mut actor = ice();
        let dealt = actor.take_damage(actor.hp_max as i64 * 2);
        assert_eq!(dealt, 160);
        assert_eq!(actor.hp(), 0);
        assert!(!actor.is_alive());
    }

    #[test]
    fn test_heal_clamped_to_max() {
        let mut actor = ice();
        actor.take_damage(10);
        actor.heal(500);
        assert_eq!(actor.hp(), 80);

        actor.heal(-500);
        assert_eq!(actor.hp(), 0);
        assert!(!actor.is_alive());
    }

    #[test]
    fn test_heal_does_not_revive() {
        let mut actor = ice();
        actor.take_damage(80);
        actor.heal(40);
        assert_eq!(actor.hp(), 0);
        assert!(!actor.is_alive());
    }

    #[test]
    fn test_crit_chance_clamped_on_creation() {
        let actor = Actor::new("glitch", 0, 1, 1, 3.0);
        assert_eq!(actor.crit_chance, 1.0);
        assert_eq!(actor.hp_max, 1);
    }
}
