pub mod enemies;

pub use enemies::{make_boss, make_enemy, Archetype, ARCHETYPES, BOSS};
