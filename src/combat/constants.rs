//! Combat tuning values - all in one place
//!
//! Numeric tuning is content. Tests pin the formulas, not the balance.

// Damage roll
pub const DEFENSE_MITIGATION: f64 = 0.5;
pub const DAMAGE_VARIANCE_MIN: f64 = 0.85;
pub const DAMAGE_VARIANCE_MAX: f64 = 1.15;
pub const CRIT_MULTIPLIER: f64 = 1.8;
pub const MIN_DAMAGE: u32 = 1;

// Fortify lasts for the enemy counter-attack of the same round only
pub const FORTIFY_DEFENSE_BONUS: i32 = 6;
pub const FORTIFY_ROUNDS: u32 = 1;

// Items
pub const PATCH_HEAL_RATIO: f64 = 0.35;
pub const OVERCLOCK_ATTACK_RATIO: f64 = 0.5;
pub const OVERCLOCK_ROUNDS: u32 = 3;
pub const PROXY_FLEE_BONUS: f64 = 0.25;

// Flee chance
pub const FLEE_BASE_CHANCE: f64 = 0.45;
pub const FLEE_CHANCE_PER_LEVEL: f64 = 0.03;
pub const FLEE_THREAT_WEIGHT: f64 = 0.1;
pub const FLEE_THREAT_SCALE: f64 = 100.0;
pub const FLEE_CHANCE_MIN: f64 = 0.10;
pub const FLEE_CHANCE_MAX: f64 = 0.90;
