//! Approach rate command.

use anyhow::Result;
use osugr_core::{BeatmapDifficulty, GameRules, MID_RATING};
use serde::Serialize;

use super::parse_mods;

#[derive(Serialize)]
struct ArReport {
    ar: f32,
    effective_ar: f32,
    approach_time_ms: f32,
    stacking_approach_time_ms: f32,
    speed: f32,
    ar_for_speed: f32,
    constant_ar_for_speed: f32,
    fade_out_time_s: f32,
}

/// Run the ar command
pub fn run(rules: &GameRules, rating: f32, mods: Option<&str>, speed: f32, json: bool) -> Result<()> {
    let mods = parse_mods(mods, speed)?;

    // Only AR matters here, the other axes are placeholders.
    let diff = BeatmapDifficulty::new(rating, MID_RATING, MID_RATING, MID_RATING);
    let effective_ar = rules.difficulty_with_mods(&diff, &mods).ar;

    let report = ArReport {
        ar: rating,
        effective_ar,
        approach_time_ms: rules.approach_time(effective_ar, &mods),
        stacking_approach_time_ms: rules.approach_time_for_stacking(effective_ar, &mods),
        speed,
        ar_for_speed: rules.approach_rate_for_speed_multiplier(effective_ar, &mods),
        constant_ar_for_speed: rules.constant_approach_rate_for_speed_multiplier(effective_ar, &mods),
        fade_out_time_s: rules.fade_out_time(speed),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("AR {} ({})", report.ar, mods.flags);
    println!("  Effective AR:     {:.2}", report.effective_ar);
    println!("  Approach time:    {:.1} ms", report.approach_time_ms);
    println!("  Stacking time:    {:.1} ms", report.stacking_approach_time_ms);
    println!("  AR at {}x:       {:.2}", report.speed, report.ar_for_speed);
    println!("  Constant AR:      {:.2}", report.constant_ar_for_speed);
    println!("  Fade out:         {:.3} s", report.fade_out_time_s);

    Ok(())
}
