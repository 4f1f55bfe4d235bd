//! Judge command.

use anyhow::Result;
use osugr_core::{BeatmapDifficulty, GameRules, HitPolicy, MID_RATING, classify};
use tracing::debug;

use super::parse_mods;

/// Run the judge command
pub fn run(
    rules: &GameRules,
    delta: f32,
    od: f32,
    mods: Option<&str>,
    stable: bool,
) -> Result<()> {
    let mods = parse_mods(mods, 1.0)?;
    let diff = BeatmapDifficulty::new(MID_RATING, MID_RATING, od, MID_RATING);
    let effective_od = rules.difficulty_with_mods(&diff, &mods).od;

    let mut windows = rules.hit_windows(effective_od);
    if stable {
        windows = windows.stable_like();
    }
    let policy = HitPolicy::from_mods(&mods);
    debug!(?windows, ?policy, "Judging");

    let result = classify(delta, &windows, &policy);
    println!("{} ({})", result, result.short_name());

    Ok(())
}
