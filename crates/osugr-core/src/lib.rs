pub mod config;
pub mod difficulty;
pub mod error;
pub mod judgement;
pub mod mods;

pub use config::Config;
pub use difficulty::{
    BeatmapDifficulty, DifficultyCalibration, GameRules, LegacyBeatmapValues, MID_RATING,
    map_difficulty_range, map_difficulty_range_f64, map_difficulty_range_inv,
};
pub use error::{Error, Result};
pub use judgement::{HitPolicy, HitResult, HitWindows, JudgementMode, classify};
pub use mods::{LegacyMods, Mod, ModFlags, Mods};
