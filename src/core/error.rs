use thiserror::Error;

use crate::combat::ItemKind;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("No {0} left in inventory")]
    ItemUnavailable(ItemKind),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
