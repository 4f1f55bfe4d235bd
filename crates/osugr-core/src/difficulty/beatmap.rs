use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::mods::{LegacyMods, Mods};

const MIN_RATING: f32 = 0.0;
const MAX_RATING: f32 = 10.0;

/// Difficulty settings of a beatmap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeatmapDifficulty {
    pub ar: f32,
    pub cs: f32,
    pub od: f32,
    pub hp: f32,
}

/// Beatmap values after applying legacy mods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegacyBeatmapValues {
    pub ar: f32,
    pub cs: f32,
    pub od: f32,
    pub hp: f32,
    pub speed_multiplier: f32,
    pub difficulty_multiplier: f32,
    pub cs_difficulty_multiplier: f32,
}

impl BeatmapDifficulty {
    pub fn new(ar: f32, cs: f32, od: f32, hp: f32) -> Self {
        Self { ar, cs, od, hp }
    }

    /// Apply the speed and difficulty multipliers implied by legacy bits.
    ///
    /// Results are clamped to 0-10. Easy wins over hard rock.
    pub fn with_legacy_mods(&self, legacy: LegacyMods) -> LegacyBeatmapValues {
        let speed_multiplier = if legacy.intersects(LegacyMods::DOUBLE_TIME | LegacyMods::NIGHTCORE)
        {
            defaults::LEGACY_FASTER_SPEED
        } else if legacy.contains(LegacyMods::HALF_TIME) {
            defaults::LEGACY_SLOWER_SPEED
        } else {
            1.0
        };

        let (difficulty_multiplier, cs_difficulty_multiplier) =
            if legacy.contains(LegacyMods::EASY) {
                (0.5, 0.5)
            } else if legacy.contains(LegacyMods::HARD_ROCK) {
                (1.4, 1.3)
            } else {
                (1.0, 1.0)
            };

        LegacyBeatmapValues {
            ar: clamp_rating(self.ar * difficulty_multiplier),
            cs: clamp_rating(self.cs * cs_difficulty_multiplier),
            od: clamp_rating(self.od * difficulty_multiplier),
            hp: clamp_rating(self.hp * difficulty_multiplier),
            speed_multiplier,
            difficulty_multiplier,
            cs_difficulty_multiplier,
        }
    }

    /// Apply mod multipliers, then any enabled overrides.
    ///
    /// Multiplied values are clamped to 0-10, override values are taken as is.
    /// The AR/OD locks need timing calibrations and are applied by
    /// [`GameRules::difficulty_with_mods`](super::GameRules::difficulty_with_mods).
    pub fn with_mods(&self, mods: &Mods) -> Self {
        let multiplier = mods.difficulty_multiplier();
        let cs_multiplier = mods.cs_difficulty_multiplier();

        Self {
            ar: mods
                .ar_override()
                .unwrap_or_else(|| clamp_rating(self.ar * multiplier)),
            cs: mods
                .cs_override()
                .unwrap_or_else(|| clamp_rating(self.cs * cs_multiplier)),
            od: mods
                .od_override()
                .unwrap_or_else(|| clamp_rating(self.od * multiplier)),
            hp: mods
                .hp_override()
                .unwrap_or_else(|| clamp_rating(self.hp * multiplier)),
        }
    }
}

fn clamp_rating(value: f32) -> f32 {
    value.clamp(MIN_RATING, MAX_RATING)
}
