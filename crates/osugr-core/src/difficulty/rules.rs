use super::{BeatmapDifficulty, DifficultyCalibration};
use crate::config::Config;
use crate::judgement::HitWindows;
use crate::mods::{ModFlags, Mods};

/// Difficulty and timing rules, parameterised by a [`Config`].
///
/// "Raw" methods ignore all mods and overrides.
#[derive(Debug, Clone, Default)]
pub struct GameRules {
    config: Config,
}

impl GameRules {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Approach time calibration with Millhioref applied.
    pub fn approach_calibration(&self, mods: &Mods) -> DifficultyCalibration {
        if mods.has(ModFlags::MILLHIOREF) {
            self.config
                .approach_time
                .scaled(self.config.millhioref_multiplier)
        } else {
            self.config.approach_time
        }
    }

    /// AR -> approach time (ms)
    pub fn raw_approach_time(&self, ar: f32) -> f32 {
        self.config.approach_time.map(ar)
    }

    pub fn approach_time(&self, ar: f32, mods: &Mods) -> f32 {
        self.approach_calibration(mods).map(ar)
    }

    /// Approach time used for stacking. The configured stacking AR override
    /// replaces `ar` when enabled.
    pub fn approach_time_for_stacking(&self, ar: f32, mods: &Mods) -> f32 {
        let ar = self.config.stacking_ar_override().unwrap_or(ar);
        self.approach_calibration(mods).map(ar)
    }

    /// OD -> 300 window (ms)
    pub fn raw_hit_window_300(&self, od: f32) -> f32 {
        self.config.hit_window_300.map(od)
    }

    pub fn hit_window_300(&self, od: f32) -> f32 {
        self.config.hit_window_300.map(od)
    }

    pub fn hit_window_100(&self, od: f32) -> f32 {
        self.config.hit_window_100.map(od)
    }

    pub fn hit_window_50(&self, od: f32) -> f32 {
        self.config.hit_window_50.map(od)
    }

    pub fn hit_window_miss(&self) -> f32 {
        self.config.hit_window_miss
    }

    pub fn hit_windows(&self, od: f32) -> HitWindows {
        HitWindows::new(
            self.hit_window_300(od),
            self.hit_window_100(od),
            self.hit_window_50(od),
            self.hit_window_miss(),
        )
    }

    /// Approach time (ms) -> AR, with the speed multiplier folded into the
    /// rating (DT makes AR 9 read as AR ~10.33).
    pub fn raw_approach_rate_for_speed_multiplier(&self, approach_time: f32, speed: f32) -> f32 {
        self.config.approach_time.inverse(approach_time * (1.0 / speed))
    }

    /// Approach time (ms) -> AR, keeping AR constant through speed changes.
    pub fn raw_constant_approach_rate_for_speed_multiplier(
        &self,
        approach_time: f32,
        speed: f32,
    ) -> f32 {
        self.config.approach_time.inverse(approach_time * speed)
    }

    /// 300 window (ms) -> OD, with the speed multiplier folded in.
    pub fn raw_overall_difficulty_for_speed_multiplier(
        &self,
        hit_window_300: f32,
        speed: f32,
    ) -> f32 {
        self.config.hit_window_300.inverse(hit_window_300 * (1.0 / speed))
    }

    /// 300 window (ms) -> OD, keeping OD constant through speed changes.
    pub fn raw_constant_overall_difficulty_for_speed_multiplier(
        &self,
        hit_window_300: f32,
        speed: f32,
    ) -> f32 {
        self.config.hit_window_300.inverse(hit_window_300 * speed)
    }

    /// AR as perceived at the current speed, mods applied.
    pub fn approach_rate_for_speed_multiplier(&self, ar: f32, mods: &Mods) -> f32 {
        self.raw_approach_rate_for_speed_multiplier(self.approach_time(ar, mods), mods.speed)
    }

    pub fn constant_approach_rate_for_speed_multiplier(&self, ar: f32, mods: &Mods) -> f32 {
        self.raw_constant_approach_rate_for_speed_multiplier(self.approach_time(ar, mods), mods.speed)
    }

    /// OD as perceived at the current speed.
    pub fn overall_difficulty_for_speed_multiplier(&self, od: f32, speed: f32) -> f32 {
        self.raw_overall_difficulty_for_speed_multiplier(self.hit_window_300(od), speed)
    }

    pub fn constant_overall_difficulty_for_speed_multiplier(&self, od: f32, speed: f32) -> f32 {
        self.raw_constant_overall_difficulty_for_speed_multiplier(self.hit_window_300(od), speed)
    }

    /// Beatmap difficulty after mod multipliers, overrides and the AR/OD
    /// locks.
    ///
    /// A lock keeps the rating's real timing constant through speed changes,
    /// so locked AR 9 at 1.5x plays like AR 9 at 1x and reads as AR 7.
    pub fn difficulty_with_mods(
        &self,
        diff: &BeatmapDifficulty,
        mods: &Mods,
    ) -> BeatmapDifficulty {
        let mut result = diff.with_mods(mods);

        if mods.has(ModFlags::AR_OVERRIDE_LOCK) {
            result.ar = self.raw_constant_approach_rate_for_speed_multiplier(
                self.raw_approach_time(result.ar),
                mods.speed,
            );
        }
        if mods.has(ModFlags::OD_OVERRIDE_LOCK) {
            result.od = self.raw_constant_overall_difficulty_for_speed_multiplier(
                self.raw_hit_window_300(result.od),
                mods.speed,
            );
        }

        result
    }

    /// Raw spins required per second.
    pub fn spinner_spins_per_second(&self, od: f32) -> f32 {
        self.config.spinner_spins_per_second.map(od)
    }

    /// Rotations required to clear a spinner. Half of the raw spin count, and
    /// never more than at normal speed.
    pub fn spinner_rotations_for_speed_multiplier(
        &self,
        od: f32,
        duration_ms: i64,
        speed: f32,
    ) -> i32 {
        let spins = duration_ms as f32 / 1000.0 * self.spinner_spins_per_second(od);
        (spins * 0.5 * (1.0 / speed).min(1.0)) as i32
    }

    /// Hit object fade out duration (seconds), scaled with the speed multiplier.
    pub fn fade_out_time(&self, speed: f32) -> f32 {
        let multiplier_min = self.config.fade_out_time_speed_multiplier_min;
        self.config.fade_out_time * (1.0 / speed.max(multiplier_min))
    }
}
