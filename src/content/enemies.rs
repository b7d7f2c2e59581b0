//! ICE archetypes and the generators that scale them
//!
//! Danger multiplies every stat of a regular archetype; the boss ignores it.

use crate::combat::Actor;
use crate::core::RandomSource;
use crate::entity::Enemy;

/// Base stat record for one kind of ICE
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Archetype {
    pub name: &'static str,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub crit_chance: f64,
    pub xp_reward: u32,
}

pub const ARCHETYPES: [Archetype; 4] = [
    Archetype {
        name: "Minor Firewall",
        hp: 60,
        attack: 10,
        defense: 4,
        crit_chance: 0.03,
        xp_reward: 20,
    },
    Archetype {
        name: "Black ICE",
        hp: 80,
        attack: 14,
        defense: 6,
        crit_chance: 0.05,
        xp_reward: 35,
    },
    Archetype {
        name: "Sentinel AI",
        hp: 100,
        attack: 18,
        defense: 8,
        crit_chance: 0.07,
        xp_reward: 60,
    },
    Archetype {
        name: "Trace Hunter",
        hp: 120,
        attack: 22,
        defense: 10,
        crit_chance: 0.10,
        xp_reward: 80,
    },
];

pub const BOSS: Archetype = Archetype {
    name: "Core Security AI (BOSS)",
    hp: 220,
    attack: 28,
    defense: 12,
    crit_chance: 0.12,
    xp_reward: 200,
};

// Growth per danger level above 1
pub const HP_GROWTH: f64 = 0.15;
pub const ATTACK_GROWTH: f64 = 0.12;
pub const DEFENSE_GROWTH: f64 = 0.10;
pub const XP_GROWTH: f64 = 0.20;

fn scale(value: u32, growth: f64, danger: u32) -> u32 {
    (value as f64 * (1.0 + growth * (danger - 1) as f64)) as u32
}

impl Archetype {
    /// Instantiate at `danger` (values below 1 count as 1)
    pub fn spawn(&self, danger: u32) -> Enemy {
        let danger = danger.max(1);
        let actor = Actor::new(
            self.name,
            scale(self.hp, HP_GROWTH, danger),
            scale(self.attack, ATTACK_GROWTH, danger),
            scale(self.defense, DEFENSE_GROWTH, danger),
            self.crit_chance,
        );
        Enemy::new(actor, scale(self.xp_reward, XP_GROWTH, danger))
    }
}

/// Random archetype scaled to `danger`
pub fn make_enemy<R: RandomSource + ?Sized>(danger: u32, rng: &mut R) -> Enemy {
    let archetype = &ARCHETYPES[rng.pick(ARCHETYPES.len())];
    let enemy = archetype.spawn(danger);
    tracing::debug!(
        name = archetype.name,
        danger,
        hp = enemy.actor.hp_max,
        attack = enemy.actor.attack,
        defense = enemy.actor.defense,
        xp = enemy.xp_reward,
        "spawned enemy"
    );
    enemy
}

/// The Core Security AI. Fixed stats; draws nothing from `rng`.
pub fn make_boss<R: RandomSource + ?Sized>(_rng: &mut R) -> Enemy {
    let actor = Actor::new(BOSS.name, BOSS.hp, BOSS.attack, BOSS.defense, BOSS.crit_chance);
    Enemy::boss(actor, BOSS.xp_reward)
}
