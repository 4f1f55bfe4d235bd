//! Difficulty rating to timing conversions.
//!
//! This module contains:
//! - `map_difficulty_range` / `map_difficulty_range_inv` - the piecewise linear mapping
//! - `DifficultyCalibration` - one {min, mid, max} triple per axis
//! - `GameRules` - approach times, hit windows and their speed adjusted variants
//! - `BeatmapDifficulty` - AR/CS/OD/HP after mods and overrides

mod beatmap;
mod calibration;
mod range;
mod rules;

pub use beatmap::*;
pub use calibration::*;
pub use range::*;
pub use rules::*;
