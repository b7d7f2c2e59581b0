pub mod enemy;
pub mod inventory;
pub mod player;
pub mod progression;

pub use enemy::Enemy;
pub use inventory::{Inventory, ItemKind};
pub use player::{create_player, ClassKind, ClassStats, Player};
pub use progression::{award_xp, xp_for_level};
