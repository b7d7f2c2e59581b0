//! Session configuration with documented defaults
//!
//! Only the encounter-chain pacing lives here. Combat tuning values are
//! content and stay in `combat::constants` / `content::enemies`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, RunnerError};
use crate::entity::Inventory;

/// Configuration for one play session
///
/// Loaded from TOML; every field falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Encounter number (1-based) that spawns the Core Security AI
    pub boss_encounter: u32,

    /// Every N-th encounter raises the danger level by one
    ///
    /// Danger is applied before the enemy is generated, so with the default
    /// of 5 the fifth encounter is the first at danger 2.
    pub difficulty_interval: u32,

    /// Danger level of the first encounter
    pub starting_difficulty: u32,

    /// Chance of scavenging an item after an encounter the player survives
    pub loot_chance: f64,

    /// Inventory every new runner starts with
    pub starting_items: Inventory,

    /// Append-only score log
    pub scores_file: PathBuf,

    /// Per-character delay of terminal narration (0 disables the effect)
    pub text_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            boss_encounter: 7,
            difficulty_interval: 5,
            starting_difficulty: 1,
            loot_chance: 0.25,
            starting_items: Inventory::starter(),
            scores_file: PathBuf::from("scores.txt"),
            text_delay_ms: 5,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load `path`, falling back to defaults with a warning when it cannot
    /// be read, parsed or validated
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("using default config, could not load {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.loot_chance) {
            return Err(RunnerError::Config(format!(
                "loot_chance ({}) must be within [0, 1]",
                self.loot_chance
            )));
        }

        if self.difficulty_interval == 0 {
            return Err(RunnerError::Config(
                "difficulty_interval must be at least 1".into(),
            ));
        }

        if self.boss_encounter == 0 {
            return Err(RunnerError::Config("boss_encounter must be at least 1".into()));
        }

        if self.starting_difficulty == 0 {
            return Err(RunnerError::Config(
                "starting_difficulty must be at least 1".into(),
            ));
        }

        Ok(())
    }
}
