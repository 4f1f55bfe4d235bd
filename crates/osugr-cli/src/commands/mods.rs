//! Legacy mod translation commands.

use anyhow::{Context, Result};
use osugr_core::{LegacyMods, Mods};

use super::parse_mods;

/// Mod list -> legacy bits
pub fn encode(list: &str, speed: f32) -> Result<()> {
    let mods = parse_mods(Some(list), speed)?;
    let legacy = mods.to_legacy();

    println!("{} (0x{:08X}) {}", legacy.bits(), legacy.bits(), legacy);
    Ok(())
}

/// Legacy bits -> mod list
pub fn decode(bits: &str) -> Result<()> {
    let legacy: LegacyMods = bits
        .parse()
        .with_context(|| format!("Invalid legacy bits: {bits}"))?;
    let mods = Mods::from_legacy(legacy);

    println!("{} @ {}x", mods.flags, mods.speed);
    Ok(())
}
