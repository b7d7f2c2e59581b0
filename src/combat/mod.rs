//! Turn-based combat: stat blocks, damage, actions and the encounter loop

pub mod action;
pub mod actor;
pub mod battle;
pub mod constants;
pub mod damage;
pub mod effects;

pub use action::{flee_chance, resolve_action, Action, ActionOutcome, ItemEffect};
pub use actor::Actor;
pub use battle::{
    run_encounter, ActionProvider, Battle, BattleEvent, BattleState, BattleView, EncounterResult,
    EventSink, NullSink, ScriptedActions,
};
pub use damage::{base_damage, compute_damage, DamageRoll};
pub use effects::{ActiveEffects, EffectKind, Stat, TimedEffect};
pub use crate::entity::ItemKind;
