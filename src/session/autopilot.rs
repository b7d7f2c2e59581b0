//! Scripted decision policies for headless runs

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::combat::{Action, ActionProvider, BattleView};
use crate::core::error::RunnerError;
use crate::entity::ItemKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    /// Overclock early, patch late, never run
    Aggressive,
    /// Patch early, spend a Proxy and flee when nearly flatlined
    Cautious,
}

impl FromStr for Policy {
    type Err = RunnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aggressive" => Ok(Policy::Aggressive),
            "cautious" => Ok(Policy::Cautious),
            other => Err(RunnerError::Config(format!("unknown policy '{}'", other))),
        }
    }
}

/// Action provider driven by a [`Policy`]. Never picks an empty item slot.
#[derive(Debug, Clone, Copy)]
pub struct AutoPilot {
    pub policy: Policy,
}

impl AutoPilot {
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }
}

impl ActionProvider for AutoPilot {
    fn choose_action(&mut self, view: BattleView<'_>) -> Action {
        let player = view.player;
        let inventory = &player.inventory;
        let hp_ratio = player.actor.hp() as f64 / player.actor.hp_max as f64;
        let has = |item: ItemKind| inventory.count(item) > 0;

        match self.policy {
            Policy::Aggressive => {
                if hp_ratio < 0.3 && has(ItemKind::Patch) {
                    Action::UseItem(ItemKind::Patch)
                } else if player.buff_turns_remaining() == 0 && has(ItemKind::Overclock) {
                    Action::UseItem(ItemKind::Overclock)
                } else {
                    Action::Attack
                }
            }
            Policy::Cautious => {
                if hp_ratio < 0.5 && has(ItemKind::Patch) {
                    Action::UseItem(ItemKind::Patch)
                } else if hp_ratio < 0.25 {
                    if !player.proxy_active && has(ItemKind::Proxy) {
                        Action::UseItem(ItemKind::Proxy)
                    } else {
                        Action::Flee
                    }
                } else if view.enemy.actor.attack > player.effective_attack() {
                    // trade blows behind a raised firewall on alternate rounds
                    if view.round % 2 == 0 {
                        Action::Fortify
                    } else {
                        Action::Attack
                    }
                } else {
                    Action::Attack
                }
            }
        }
    }
}
