pub mod config;
pub mod error;
pub mod rng;

pub use config::GameConfig;
pub use error::{Result, RunnerError};
pub use rng::{seeded, RandomSource};
