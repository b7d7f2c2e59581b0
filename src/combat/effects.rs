//! Timed stat modifiers
//!
//! Temporary bonuses are records with a round counter instead of raw
//! add/subtract pairs on the stat block. The base stats never change; the
//! effective value is base plus every live modifier for that stat.

use serde::{Deserialize, Serialize};

use crate::combat::constants::{FORTIFY_DEFENSE_BONUS, FORTIFY_ROUNDS, OVERCLOCK_ROUNDS};

/// Stat a timed effect modifies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Attack,
    Defense,
}

/// Source of a timed effect. One live effect per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    /// Attack boost from the Overclock item
    Overclock,
    /// Defense boost from the Fortify action
    Fortify,
}

impl EffectKind {
    pub fn stat(&self) -> Stat {
        match self {
            EffectKind::Overclock => Stat::Attack,
            EffectKind::Fortify => Stat::Defense,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedEffect {
    pub kind: EffectKind,
    pub modifier: i32,
    pub rounds_remaining: u32,
}

impl TimedEffect {
    pub fn overclock(bonus: u32) -> Self {
        Self {
            kind: EffectKind::Overclock,
            modifier: bonus as i32,
            rounds_remaining: OVERCLOCK_ROUNDS,
        }
    }

    pub fn fortify() -> Self {
        Self {
            kind: EffectKind::Fortify,
            modifier: FORTIFY_DEFENSE_BONUS,
            rounds_remaining: FORTIFY_ROUNDS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffects {
    effects: Vec<TimedEffect>,
}

impl ActiveEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an effect, overwriting any live effect of the same kind
    pub fn apply(&mut self, effect: TimedEffect) {
        if effect.rounds_remaining == 0 {
            self.remove(effect.kind);
            return;
        }
        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == effect.kind) {
            *existing = effect;
        } else {
            self.effects.push(effect);
        }
    }

    pub fn get(&self, kind: EffectKind) -> Option<&TimedEffect> {
        self.effects.iter().find(|e| e.kind == kind)
    }

    pub fn remove(&mut self, kind: EffectKind) -> Option<TimedEffect> {
        let idx = self.effects.iter().position(|e| e.kind == kind)?;
        Some(self.effects.remove(idx))
    }

    /// Sum of live modifiers on `stat`
    pub fn modifier(&self, stat: Stat) -> i32 {
        self.effects
            .iter()
            .filter(|e| e.kind.stat() == stat)
            .map(|e| e.modifier)
            .sum()
    }

    /// Count every effect down by one round and drop the ones that ran out
    ///
    /// Returns the kinds that expired this tick.
    pub fn tick(&mut self) -> Vec<EffectKind> {
        let mut expired = Vec::new();
        self.effects.retain_mut(|effect| {
            effect.rounds_remaining = effect.rounds_remaining.saturating_sub(1);
            if effect.rounds_remaining == 0 {
                expired.push(effect.kind);
                false
            } else {
                true
            }
        });
        expired
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimedEffect> {
        self.effects.iter()
    }
}
