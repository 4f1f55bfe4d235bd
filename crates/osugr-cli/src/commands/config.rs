//! Config command.

use anyhow::Result;
use osugr_core::GameRules;

/// Print the effective config
pub fn run(rules: &GameRules, json: bool) -> Result<()> {
    let config = rules.config();
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        print!("{}", toml::to_string(config)?);
    }
    Ok(())
}
