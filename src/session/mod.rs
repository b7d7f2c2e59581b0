//! Encounter chain for one run
//!
//! Picks the next opponent, feeds encounter results into progression and
//! loot, and decides when the run is over. Presentation and the
//! continue/stop prompt stay with the caller.

pub mod autopilot;
pub mod scores;

use serde::{Deserialize, Serialize};

use crate::combat::{run_encounter, ActionProvider, BattleEvent, EncounterResult, EventSink};
use crate::content::{make_boss, make_enemy};
use crate::core::{GameConfig, RandomSource};
use crate::entity::{award_xp, ClassKind, Enemy, ItemKind, Player};

pub use autopilot::{AutoPilot, Policy};
pub use scores::{ScoreEntry, ScoreLog};

/// What the caller should do after an encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStep {
    /// Offer the player another encounter
    Continue,
    /// The boss went down; the run is won
    Victory,
    /// The runner flatlined
    Defeated,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub player: Player,
    pub config: GameConfig,
    pub score: u32,
    pub encounters: u32,
    pub difficulty: u32,
    finished: bool,
}

impl Session {
    pub fn new(player: Player, config: GameConfig) -> Self {
        let difficulty = config.starting_difficulty.max(1);
        Self {
            player,
            config,
            score: 0,
            encounters: 0,
            difficulty,
            finished: false,
        }
    }

    /// Fresh level-1 runner carrying the configured starting items
    pub fn start(handle: impl Into<String>, class_kind: ClassKind, config: GameConfig) -> Self {
        let player = Player::new(handle, class_kind, config.starting_items);
        Self::new(player, config)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance the encounter counter and generate the opponent
    pub fn next_enemy<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Enemy {
        self.encounters += 1;
        if self.encounters % self.config.difficulty_interval.max(1) == 0 {
            self.difficulty += 1;
            tracing::debug!(difficulty = self.difficulty, "danger level raised");
        }

        if self.encounters == self.config.boss_encounter {
            tracing::info!(encounter = self.encounters, "boss encounter");
            make_boss(rng)
        } else {
            make_enemy(self.difficulty, rng)
        }
    }

    /// Fold an encounter result into the run
    pub fn record<R, S>(
        &mut self,
        enemy: &Enemy,
        result: &EncounterResult,
        rng: &mut R,
        sink: &mut S,
    ) -> SessionStep
    where
        R: RandomSource + ?Sized,
        S: EventSink + ?Sized,
    {
        if !result.continued {
            self.finished = true;
            return SessionStep::Defeated;
        }

        self.score += result.xp_awarded;
        if award_xp(&mut self.player, result.xp_awarded) {
            sink.emit(BattleEvent::LevelUp {
                level: self.player.level,
            });
        }

        if rng.unit() < self.config.loot_chance {
            let items = ItemKind::all();
            let found = items[rng.pick(items.len())];
            self.player.inventory.add(found, 1);
            sink.emit(BattleEvent::ItemFound(found));
        }

        if enemy.is_boss && !enemy.is_alive() {
            self.finished = true;
            return SessionStep::Victory;
        }

        SessionStep::Continue
    }

    /// Generate an opponent, fight it, and record the outcome
    pub fn play_encounter<P, R, S>(
        &mut self,
        provider: &mut P,
        rng: &mut R,
        sink: &mut S,
    ) -> (EncounterResult, SessionStep)
    where
        P: ActionProvider + ?Sized,
        R: RandomSource + ?Sized,
        S: EventSink + ?Sized,
    {
        let mut enemy = self.next_enemy(rng);
        let result = run_encounter(&mut self.player, &mut enemy, provider, rng, sink);
        let step = self.record(&enemy, &result, rng, sink);
        (result, step)
    }

    /// Close the run and produce its score line
    pub fn finish(&mut self) -> ScoreEntry {
        self.finished = true;
        tracing::info!(
            handle = %self.player.name(),
            score = self.score,
            level = self.player.level,
            encounters = self.encounters,
            "session finished"
        );
        ScoreEntry::now(self.player.name(), self.score, self.player.level)
    }
}
