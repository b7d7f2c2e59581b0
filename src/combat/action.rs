//! Player action resolution
//!
//! One chosen action is applied to the player and enemy. Rejections (an item
//! with no units left) leave every piece of state untouched.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::combat::constants::{
    FLEE_BASE_CHANCE, FLEE_CHANCE_MAX, FLEE_CHANCE_MIN, FLEE_CHANCE_PER_LEVEL,
    FLEE_THREAT_SCALE, FLEE_THREAT_WEIGHT, OVERCLOCK_ATTACK_RATIO, PATCH_HEAL_RATIO,
    PROXY_FLEE_BONUS,
};
use crate::combat::damage::compute_damage;
use crate::combat::effects::TimedEffect;
use crate::core::error::{Result, RunnerError};
use crate::core::RandomSource;
use crate::entity::{Enemy, ItemKind, Player};

/// What the player does with their turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Exploit: hit the enemy
    Attack,
    /// Raise defense for the enemy's counter-attack this round
    Fortify,
    UseItem(ItemKind),
    Flee,
}

impl FromStr for Action {
    type Err = RunnerError;

    /// Accepts menu numbers (`1`, `2`, `4`), verbs, and item names
    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim().to_ascii_lowercase();
        let mut words = token.split_whitespace();
        let head = words.next().unwrap_or("");
        let action = match head {
            "1" | "attack" | "exploit" => Action::Attack,
            "2" | "fortify" | "defend" => Action::Fortify,
            "4" | "flee" | "run" => Action::Flee,
            "3" | "use" | "item" => match words.next() {
                Some(item) => Action::UseItem(parse_item(item)?),
                None => return Err(RunnerError::InvalidAction("choose an item to use".into())),
            },
            other => Action::UseItem(parse_item(other)?),
        };
        Ok(action)
    }
}

fn parse_item(token: &str) -> Result<ItemKind> {
    match token {
        "patch" => Ok(ItemKind::Patch),
        "overclock" => Ok(ItemKind::Overclock),
        "proxy" => Ok(ItemKind::Proxy),
        other => Err(RunnerError::InvalidAction(other.to_string())),
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Attack => f.write_str("attack"),
            Action::Fortify => f.write_str("fortify"),
            Action::UseItem(item) => write!(f, "use {}", item),
            Action::Flee => f.write_str("flee"),
        }
    }
}

/// Visible effect of a consumed item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemEffect {
    /// HP actually restored
    Healed(u32),
    /// Attack bonus now active
    Overclocked(u32),
    ProxyArmed,
}

/// Result of one resolved player action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Attacked { damage: u32, crit: bool },
    Fortified,
    ItemUsed { item: ItemKind, effect: ItemEffect },
    Fled,
    FailedFlee,
}

/// Chance that a flee attempt succeeds, always within `[0.10, 0.90]`
///
/// The Proxy bonus is added before clamping, so against heavy ICE it can be
/// swallowed by the bounds.
pub fn flee_chance(level: u32, enemy_threat: u32, proxy_active: bool) -> f64 {
    let mut chance = FLEE_BASE_CHANCE + FLEE_CHANCE_PER_LEVEL * level.saturating_sub(1) as f64
        - FLEE_THREAT_WEIGHT * (enemy_threat as f64 / FLEE_THREAT_SCALE);
    if proxy_active {
        chance += PROXY_FLEE_BONUS;
    }
    chance.clamp(FLEE_CHANCE_MIN, FLEE_CHANCE_MAX)
}

/// Apply one player action
///
/// # Errors
/// `ItemUnavailable` when the chosen item has no units left. Nothing is
/// mutated and no randomness is consumed in that case.
pub fn resolve_action<R: RandomSource + ?Sized>(
    player: &mut Player,
    enemy: &mut Enemy,
    action: Action,
    rng: &mut R,
) -> Result<ActionOutcome> {
    let outcome = match action {
        Action::Attack => {
            let roll = compute_damage(
                player.effective_attack(),
                enemy.actor.defense,
                player.actor.crit_chance,
                rng,
            );
            let damage = enemy.actor.take_damage(roll.amount as i64);
            ActionOutcome::Attacked {
                damage,
                crit: roll.crit,
            }
        }
        Action::Fortify => {
            player.effects.apply(TimedEffect::fortify());
            ActionOutcome::Fortified
        }
        Action::UseItem(item) => {
            if !player.inventory.take(item) {
                return Err(RunnerError::ItemUnavailable(item));
            }
            let effect = apply_item(player, item);
            ActionOutcome::ItemUsed { item, effect }
        }
        Action::Flee => {
            let chance = flee_chance(player.level, enemy.threat(), player.proxy_active);
            player.proxy_active = false;
            if rng.unit() < chance {
                ActionOutcome::Fled
            } else {
                ActionOutcome::FailedFlee
            }
        }
    };

    tracing::debug!(player = %player.actor.name, %action, ?outcome, "player action");
    Ok(outcome)
}

fn apply_item(player: &mut Player, item: ItemKind) -> ItemEffect {
    match item {
        ItemKind::Patch => {
            let before = player.actor.hp();
            let amount = (player.actor.hp_max as f64 * PATCH_HEAL_RATIO).floor() as i64;
            player.actor.heal(amount);
            ItemEffect::Healed(player.actor.hp() - before)
        }
        ItemKind::Overclock => {
            let bonus = (player.actor.attack as f64 * OVERCLOCK_ATTACK_RATIO).floor() as u32;
            player.effects.apply(TimedEffect::overclock(bonus));
            ItemEffect::Overclocked(bonus)
        }
        ItemKind::Proxy => {
            player.proxy_active = true;
            ItemEffect::ProxyArmed
        }
    }
}
