//! Experience and leveling

use crate::entity::player::Player;

pub const XP_BASE: u32 = 50;
pub const XP_PER_LEVEL: u32 = 50;

pub const LEVEL_UP_HP: u32 = 10;
pub const LEVEL_UP_ATTACK: u32 = 2;
pub const LEVEL_UP_DEFENSE: u32 = 1;

/// XP needed to advance out of `level`
pub fn xp_for_level(level: u32) -> u32 {
    XP_BASE + XP_PER_LEVEL * level.saturating_sub(1)
}

/// Add XP, handling any number of level ups
///
/// Returns true if at least one level was gained.
pub fn award_xp(player: &mut Player, amount: u32) -> bool {
    player.xp = player.xp.saturating_add(amount);
    let mut leveled_up = false;
    while player.xp >= player.xp_to_next {
        player.xp -= player.xp_to_next;
        level_up(player);
        leveled_up = true;
    }
    leveled_up
}

fn level_up(player: &mut Player) {
    player.level += 1;
    player.xp_to_next = xp_for_level(player.level);

    let actor = &mut player.actor;
    actor.hp_max += LEVEL_UP_HP;
    actor.attack += LEVEL_UP_ATTACK;
    actor.defense += LEVEL_UP_DEFENSE;
    actor.restore_full();

    tracing::debug!(
        player = %actor.name,
        level = player.level,
        hp_max = actor.hp_max,
        attack = actor.attack,
        defense = actor.defense,
        "level up"
    );
}
