//! Encounter state machine
//!
//! `Ongoing` until the player dies (`PlayerLost`), the enemy dies
//! (`PlayerWon`) or a flee succeeds (`Escaped`). Each round: the player acts,
//! a surviving enemy counter-attacks, timed effects tick, terminal states are
//! checked.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::combat::action::{resolve_action, Action, ActionOutcome, ItemEffect};
use crate::combat::damage::compute_damage;
use crate::combat::effects::EffectKind;
use crate::core::RandomSource;
use crate::entity::{Enemy, ItemKind, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleState {
    Ongoing,
    PlayerWon,
    PlayerLost,
    Escaped,
}

impl BattleState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BattleState::Ongoing)
    }
}

/// Notifications for the presentation layer. Advisory only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BattleEvent {
    EncounterStarted { enemy: String, hp: u32, hp_max: u32, boss: bool },
    ActionRejected { reason: String },
    PlayerAttacked { damage: u32, crit: bool },
    Fortified { defense: u32 },
    ItemUsed { item: ItemKind, effect: ItemEffect },
    FleeFailed,
    Escaped,
    EnemyAttacked { enemy: String, damage: u32, crit: bool },
    EffectExpired(EffectKind),
    EnemyDefeated { enemy: String, xp_reward: u32 },
    PlayerDefeated,
    LevelUp { level: u32 },
    ItemFound(ItemKind),
}

/// Receiver of battle notifications
pub trait EventSink {
    fn emit(&mut self, event: BattleEvent);
}

impl EventSink for Vec<BattleEvent> {
    fn emit(&mut self, event: BattleEvent) {
        self.push(event);
    }
}

/// Sink that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: BattleEvent) {}
}

/// Read-only view handed to the action provider
#[derive(Debug, Clone, Copy)]
pub struct BattleView<'a> {
    pub player: &'a Player,
    pub enemy: &'a Enemy,
    pub round: u32,
}

/// Supplies the player's choice each time one is needed
///
/// Called again after a rejected choice, in the same round.
pub trait ActionProvider {
    fn choose_action(&mut self, view: BattleView<'_>) -> Action;
}

/// Plays a fixed list of actions, then attacks forever
#[derive(Debug, Clone, Default)]
pub struct ScriptedActions {
    actions: VecDeque<Action>,
}

impl ScriptedActions {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }
}

impl ActionProvider for ScriptedActions {
    fn choose_action(&mut self, _view: BattleView<'_>) -> Action {
        self.actions.pop_front().unwrap_or(Action::Attack)
    }
}

/// How an encounter ended, in the shape the session loop consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterResult {
    pub outcome: BattleState,
    /// False only when the player was defeated
    pub continued: bool,
    pub xp_awarded: u32,
    pub rounds: u32,
}

impl EncounterResult {
    pub fn as_tuple(&self) -> (bool, u32) {
        (self.continued, self.xp_awarded)
    }
}

/// One encounter between the player and a single enemy
pub struct Battle<'a> {
    player: &'a mut Player,
    enemy: &'a mut Enemy,
    state: BattleState,
    round: u32,
}

impl<'a> Battle<'a> {
    pub fn new(player: &'a mut Player, enemy: &'a mut Enemy) -> Self {
        Self {
            player,
            enemy,
            state: BattleState::Ongoing,
            round: 0,
        }
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    /// Rounds played so far
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn player(&self) -> &Player {
        self.player
    }

    pub fn enemy(&self) -> &Enemy {
        self.enemy
    }

    /// Play one round; no-op once the battle is over
    pub fn play_round<P, R, S>(
        &mut self,
        provider: &mut P,
        rng: &mut R,
        sink: &mut S,
    ) -> BattleState
    where
        P: ActionProvider + ?Sized,
        R: RandomSource + ?Sized,
        S: EventSink + ?Sized,
    {
        if self.state.is_terminal() {
            return self.state;
        }
        self.round += 1;

        let outcome = self.player_turn(provider, rng, sink);
        if outcome == ActionOutcome::Fled {
            sink.emit(BattleEvent::Escaped);
            self.state = BattleState::Escaped;
            return self.state;
        }

        if self.enemy.is_alive() {
            self.enemy_turn(rng, sink);
        }

        // Overclock counts down, Fortify lapses after the counter-attack
        for expired in self.player.effects.tick() {
            sink.emit(BattleEvent::EffectExpired(expired));
        }

        if !self.player.is_alive() {
            sink.emit(BattleEvent::PlayerDefeated);
            self.state = BattleState::PlayerLost;
        } else if !self.enemy.is_alive() {
            sink.emit(BattleEvent::EnemyDefeated {
                enemy: self.enemy.name().to_string(),
                xp_reward: self.enemy.xp_reward,
            });
            self.state = BattleState::PlayerWon;
        }

        tracing::debug!(
            round = self.round,
            player_hp = self.player.actor.hp(),
            enemy_hp = self.enemy.actor.hp(),
            state = ?self.state,
            "round resolved"
        );
        self.state
    }

    fn player_turn<P, R, S>(&mut self, provider: &mut P, rng: &mut R, sink: &mut S) -> ActionOutcome
    where
        P: ActionProvider + ?Sized,
        R: RandomSource + ?Sized,
        S: EventSink + ?Sized,
    {
        loop {
            let view = BattleView {
                player: self.player,
                enemy: self.enemy,
                round: self.round,
            };
            let action = provider.choose_action(view);

            match resolve_action(self.player, self.enemy, action, rng) {
                Ok(outcome) => {
                    if let Some(event) = self.describe(outcome) {
                        sink.emit(event);
                    }
                    return outcome;
                }
                Err(e) => sink.emit(BattleEvent::ActionRejected {
                    reason: e.to_string(),
                }),
            }
        }
    }

    fn describe(&self, outcome: ActionOutcome) -> Option<BattleEvent> {
        let event = match outcome {
            ActionOutcome::Attacked { damage, crit } => {
                BattleEvent::PlayerAttacked { damage, crit }
            }
            ActionOutcome::Fortified => BattleEvent::Fortified {
                defense: self.player.effective_defense(),
            },
            ActionOutcome::ItemUsed { item, effect } => BattleEvent::ItemUsed { item, effect },
            ActionOutcome::FailedFlee => BattleEvent::FleeFailed,
            // reported as `Escaped` once the state flips
            ActionOutcome::Fled => return None,
        };
        Some(event)
    }

    fn enemy_turn<R, S>(&mut self, rng: &mut R, sink: &mut S)
    where
        R: RandomSource + ?Sized,
        S: EventSink + ?Sized,
    {
        let roll = compute_damage(
            self.enemy.actor.attack,
            self.player.effective_defense(),
            self.enemy.actor.crit_chance,
            rng,
        );
        let damage = self.player.actor.take_damage(roll.amount as i64);
        sink.emit(BattleEvent::EnemyAttacked {
            enemy: self.enemy.name().to_string(),
            damage,
            crit: roll.crit,
        });
    }

    /// Play rounds until a terminal state
    pub fn run<P, R, S>(mut self, provider: &mut P, rng: &mut R, sink: &mut S) -> EncounterResult
    where
        P: ActionProvider + ?Sized,
        R: RandomSource + ?Sized,
        S: EventSink + ?Sized,
    {
        sink.emit(BattleEvent::EncounterStarted {
            enemy: self.enemy.name().to_string(),
            hp: self.enemy.actor.hp(),
            hp_max: self.enemy.actor.hp_max,
            boss: self.enemy.is_boss,
        });

        while !self.state.is_terminal() {
            self.play_round(provider, rng, sink);
        }
        self.result()
    }

    /// Result for the current state; `continued` is meaningless while ongoing
    pub fn result(&self) -> EncounterResult {
        let (continued, xp_awarded) = match self.state {
            BattleState::PlayerLost => (false, 0),
            BattleState::Escaped | BattleState::Ongoing => (true, 0),
            BattleState::PlayerWon => (true, self.enemy.xp_reward),
        };
        EncounterResult {
            outcome: self.state,
            continued,
            xp_awarded,
            rounds: self.round,
        }
    }
}

/// Run a whole encounter
pub fn run_encounter<P, R, S>(
    player: &mut Player,
    enemy: &mut Enemy,
    provider: &mut P,
    rng: &mut R,
    sink: &mut S,
) -> EncounterResult
where
    P: ActionProvider + ?Sized,
    R: RandomSource + ?Sized,
    S: EventSink + ?Sized,
{
    let result = Battle::new(player, enemy).run(provider, rng, sink);
    tracing::info!(
        outcome = ?result.outcome,
        rounds = result.rounds,
        xp = result.xp_awarded,
        "encounter finished"
    );
    result
}
