//! Opposing ICE for a single encounter

use serde::{Deserialize, Serialize};

use crate::combat::Actor;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub actor: Actor,
    pub xp_reward: u32,
    /// Defeating a boss ends the run in victory
    pub is_boss: bool,
}

impl Enemy {
    pub fn new(actor: Actor, xp_reward: u32) -> Self {
        Self {
            actor,
            xp_reward,
            is_boss: false,
        }
    }

    pub fn boss(actor: Actor, xp_reward: u32) -> Self {
        Self {
            actor,
            xp_reward,
            is_boss: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.actor.name
    }

    pub fn is_alive(&self) -> bool {
        self.actor.is_alive()
    }

    /// Attack plus defense, the figure flee odds are weighed against
    pub fn threat(&self) -> u32 {
        self.actor.attack + self.actor.defense
    }
}
