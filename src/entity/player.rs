//! The runner: stat block, class, progression and carried state
//!
//! A player outlives individual encounters. Its base stats only change on
//! level up; temporary bonuses sit in `effects`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::combat::effects::{ActiveEffects, EffectKind, Stat};
use crate::combat::Actor;
use crate::core::error::RunnerError;
use crate::entity::inventory::Inventory;
use crate::entity::progression::xp_for_level;

/// Netrunner specialization, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    /// High crit, fragile
    Infiltrator = 0,
    /// Tank: more hp and defense
    Engineer = 1,
    /// Highest crit chance
    Analyst = 2,
    /// Fallback for unrecognised selections
    Default = 3,
}

/// Base stat record for one class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassStats {
    pub hp_max: u32,
    pub attack: u32,
    pub defense: u32,
    pub crit_chance: f64,
}

/// Indexed by `ClassKind` discriminant
const CLASS_STATS: [ClassStats; 4] = [
    ClassStats {
        hp_max: 90,
        attack: 18,
        defense: 6,
        crit_chance: 0.12,
    },
    ClassStats {
        hp_max: 120,
        attack: 12,
        defense: 10,
        crit_chance: 0.06,
    },
    ClassStats {
        hp_max: 100,
        attack: 14,
        defense: 8,
        crit_chance: 0.15,
    },
    ClassStats {
        hp_max: 100,
        attack: 14,
        defense: 8,
        crit_chance: 0.08,
    },
];

impl ClassKind {
    /// The selectable classes, in menu order
    pub fn selectable() -> &'static [ClassKind] {
        &[ClassKind::Infiltrator, ClassKind::Engineer, ClassKind::Analyst]
    }

    pub fn base_stats(self) -> &'static ClassStats {
        &CLASS_STATS[self as usize]
    }

    pub fn blurb(self) -> &'static str {
        match self {
            ClassKind::Infiltrator => "high critical damage, fragile defenses",
            ClassKind::Engineer => "technical tank, more HP and defense",
            ClassKind::Analyst => "high crit chance, precise attacks",
            ClassKind::Default => "balanced generalist",
        }
    }

    /// Lenient parse: anything unrecognised becomes `Default`
    pub fn parse_or_default(input: &str) -> Self {
        input.parse().unwrap_or(ClassKind::Default)
    }
}

impl FromStr for ClassKind {
    type Err = RunnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "infiltrator" => Ok(ClassKind::Infiltrator),
            "2" | "engineer" => Ok(ClassKind::Engineer),
            "3" | "analyst" => Ok(ClassKind::Analyst),
            "default" => Ok(ClassKind::Default),
            other => Err(RunnerError::Config(format!("unknown class '{}'", other))),
        }
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClassKind::Infiltrator => "Infiltrator",
            ClassKind::Engineer => "Engineer",
            ClassKind::Analyst => "Analyst",
            ClassKind::Default => "Runner",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub actor: Actor,
    pub class_kind: ClassKind,
    pub level: u32,
    pub xp: u32,
    pub xp_to_next: u32,
    pub inventory: Inventory,
    pub effects: ActiveEffects,
    /// Set by a Proxy, spent by the next flee attempt
    pub proxy_active: bool,
}

impl Player {
    pub fn new(handle: impl Into<String>, class_kind: ClassKind, inventory: Inventory) -> Self {
        let stats = class_kind.base_stats();
        Self {
            actor: Actor::new(
                handle,
                stats.hp_max,
                stats.attack,
                stats.defense,
                stats.crit_chance,
            ),
            class_kind,
            level: 1,
            xp: 0,
            xp_to_next: xp_for_level(1),
            inventory,
            effects: ActiveEffects::new(),
            proxy_active: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.actor.name
    }

    pub fn is_alive(&self) -> bool {
        self.actor.is_alive()
    }

    /// Base attack plus the Overclock bonus
    pub fn effective_attack(&self) -> u32 {
        apply_modifier(self.actor.attack, self.effects.modifier(Stat::Attack))
    }

    /// Base defense plus the Fortify bonus
    pub fn effective_defense(&self) -> u32 {
        apply_modifier(self.actor.defense, self.effects.modifier(Stat::Defense))
    }

    /// Live Overclock bonus, 0 when none
    pub fn buff_attack(&self) -> u32 {
        self.effects
            .get(EffectKind::Overclock)
            .map(|e| e.modifier.max(0) as u32)
            .unwrap_or(0)
    }

    /// Rounds the Overclock bonus has left, 0 when none
    pub fn buff_turns_remaining(&self) -> u32 {
        self.effects
            .get(EffectKind::Overclock)
            .map(|e| e.rounds_remaining)
            .unwrap_or(0)
    }
}

fn apply_modifier(base: u32, modifier: i32) -> u32 {
    (base as i64 + modifier as i64).max(0) as u32
}

/// New level-1 runner with the starter kit
pub fn create_player(handle: impl Into<String>, class_kind: ClassKind) -> Player {
    Player::new(handle, class_kind, Inventory::starter())
}
