//! Neon Runner - turn-based netrunner combat and progression engine

pub mod combat;
pub mod content;
pub mod core;
pub mod entity;
pub mod session;
pub mod ui;
