//! Overall difficulty command.

use anyhow::Result;
use osugr_core::{BeatmapDifficulty, GameRules, HitWindows, MID_RATING, Mods};
use serde::Serialize;

use super::parse_mods;

#[derive(Debug, Serialize)]
struct OdReport {
    od: f32,
    effective_od: f32,
    windows: HitWindows,
    speed: f32,
    od_for_speed: f32,
    constant_od_for_speed: f32,
    spinner_spins_per_second: f32,
}

fn build_report(rules: &GameRules, rating: f32, mods: &Mods, stable: bool) -> OdReport {
    // Only OD matters here, the other axes are placeholders.
    let diff = BeatmapDifficulty::new(MID_RATING, MID_RATING, rating, MID_RATING);
    let effective_od = rules.difficulty_with_mods(&diff, mods).od;

    let mut windows = rules.hit_windows(effective_od);
    if stable {
        windows = windows.stable_like();
    }

    OdReport {
        od: rating,
        effective_od,
        windows,
        speed: mods.speed,
        od_for_speed: rules.overall_difficulty_for_speed_multiplier(effective_od, mods.speed),
        constant_od_for_speed: rules
            .constant_overall_difficulty_for_speed_multiplier(effective_od, mods.speed),
        spinner_spins_per_second: rules.spinner_spins_per_second(effective_od),
    }
}

/// Run the od command
pub fn run(
    rules: &GameRules,
    rating: f32,
    mods: Option<&str>,
    speed: f32,
    stable: bool,
    json: bool,
) -> Result<()> {
    let mods = parse_mods(mods, speed)?;
    let report = build_report(rules, rating, &mods, stable);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let windows = report.windows;
    println!("OD {} ({})", report.od, mods.flags);
    println!("  Effective OD:  {:.2}", report.effective_od);
    println!("  300:  ±{:.1} ms", windows.w300);
    println!("  100:  ±{:.1} ms", windows.w100);
    println!("  50:   ±{:.1} ms", windows.w50);
    println!("  Miss: ±{:.1} ms", windows.miss);
    println!("  OD at {}x:    {:.2}", report.speed, report.od_for_speed);
    println!("  Constant OD:   {:.2}", report.constant_od_for_speed);
    println!("  Spinner:       {:.2} spins/s", report.spinner_spins_per_second);

    Ok(())
}
