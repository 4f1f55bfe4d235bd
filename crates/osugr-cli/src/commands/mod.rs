//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod ar;
pub mod config;
pub mod judge;
pub mod mods;
pub mod od;

use std::path::Path;

use anyhow::{Context, Result};
use osugr_core::{Config, GameRules, ModFlags, Mods};
use tracing::info;

/// Build game rules from the config file, or the defaults without one.
pub fn load_rules(path: Option<&Path>) -> Result<GameRules> {
    let Some(path) = path else {
        return Ok(GameRules::default());
    };

    let config = Config::load(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    info!("Loaded config from {:?}", path);
    Ok(GameRules::new(config))
}

/// Parse a mod list argument into mods at the given speed.
pub fn parse_mods(list: Option<&str>, speed: f32) -> Result<Mods> {
    let flags = match list {
        Some(list) => list
            .parse::<ModFlags>()
            .with_context(|| format!("Invalid mod list: {list}"))?,
        None => ModFlags::empty(),
    };
    Ok(Mods::new(flags, speed))
}
