//! Game rule configuration.
//!
//! This module contains:
//! - `defaults` - locked default game rule values
//! - `Config` - overridable calibration values, loaded from TOML

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::difficulty::DifficultyCalibration;
use crate::error::{Error, Result};
use crate::judgement::HitWindows;

/// OD values at which the hit windows must nest.
const NESTING_CHECK_RATINGS: [f32; 3] = [0.0, 5.0, 10.0];

/// Default calibration values. All times are in milliseconds unless noted.
pub mod defaults {
    use crate::difficulty::DifficultyCalibration;

    /// AR 0 / 5 / 10
    pub const APPROACH_TIME: DifficultyCalibration =
        DifficultyCalibration::new(1800.0, 1200.0, 450.0);

    /// OD 0 / 5 / 10
    pub const HIT_WINDOW_300: DifficultyCalibration = DifficultyCalibration::new(80.0, 50.0, 20.0);
    pub const HIT_WINDOW_100: DifficultyCalibration =
        DifficultyCalibration::new(140.0, 100.0, 60.0);
    pub const HIT_WINDOW_50: DifficultyCalibration =
        DifficultyCalibration::new(200.0, 150.0, 100.0);

    /// Beyond this delta an action is not judged at all.
    pub const HIT_WINDOW_MISS: f32 = 400.0;

    /// Spins per second at OD 0 / 5 / 10.
    pub const SPINNER_SPINS_PER_SECOND: DifficultyCalibration =
        DifficultyCalibration::new(3.0, 5.0, 7.5);

    pub const MILLHIOREF_MULTIPLIER: f32 = 2.0;

    /// Negative disables the override.
    pub const STACKING_AR_OVERRIDE: f32 = -1.0;

    /// In seconds (!)
    pub const FADE_OUT_TIME: f32 = 0.293;
    pub const FADE_OUT_TIME_SPEED_MULTIPLIER_MIN: f32 = 0.5;

    /// Speed used when decoding the legacy DT/NC bits.
    pub const LEGACY_FASTER_SPEED: f32 = 1.5;
    /// Speed used when decoding the legacy HT bit.
    pub const LEGACY_SLOWER_SPEED: f32 = 0.75;
}

/// Overridable game rule values.
///
/// Every field falls back to [`defaults`] when missing from the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub approach_time: DifficultyCalibration,
    pub hit_window_300: DifficultyCalibration,
    pub hit_window_100: DifficultyCalibration,
    pub hit_window_50: DifficultyCalibration,
    pub hit_window_miss: f32,
    pub spinner_spins_per_second: DifficultyCalibration,
    pub millhioref_multiplier: f32,
    pub stacking_ar_override: f32,
    pub fade_out_time: f32,
    pub fade_out_time_speed_multiplier_min: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            approach_time: defaults::APPROACH_TIME,
            hit_window_300: defaults::HIT_WINDOW_300,
            hit_window_100: defaults::HIT_WINDOW_100,
            hit_window_50: defaults::HIT_WINDOW_50,
            hit_window_miss: defaults::HIT_WINDOW_MISS,
            spinner_spins_per_second: defaults::SPINNER_SPINS_PER_SECOND,
            millhioref_multiplier: defaults::MILLHIOREF_MULTIPLIER,
            stacking_ar_override: defaults::STACKING_AR_OVERRIDE,
            fade_out_time: defaults::FADE_OUT_TIME,
            fade_out_time_speed_multiplier_min: defaults::FADE_OUT_TIME_SPEED_MULTIPLIER_MIN,
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse config from TOML content and validate every calibration
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        debug!(?config, "Loaded game rule config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.approach_time.validate("approach_time")?;
        self.hit_window_300.validate("hit_window_300")?;
        self.hit_window_100.validate("hit_window_100")?;
        self.hit_window_50.validate("hit_window_50")?;
        self.spinner_spins_per_second
            .validate("spinner_spins_per_second")?;

        if self.hit_window_miss.is_nan() || self.hit_window_miss <= 0.0 {
            warn!(miss = self.hit_window_miss, "Rejected miss window");
            return Err(Error::InvalidMissWindow(self.hit_window_miss));
        }

        for od in NESTING_CHECK_RATINGS {
            let windows = HitWindows::new(
                self.hit_window_300.map(od),
                self.hit_window_100.map(od),
                self.hit_window_50.map(od),
                self.hit_window_miss,
            );
            if !windows.is_nested() {
                warn!(od, ?windows, "Rejected hit windows");
                return Err(Error::UnnestedHitWindows {
                    od,
                    w300: windows.w300,
                    w100: windows.w100,
                    w50: windows.w50,
                    miss: windows.miss,
                });
            }
        }

        Ok(())
    }

    /// Stacking AR override, if enabled.
    pub fn stacking_ar_override(&self) -> Option<f32> {
        (self.stacking_ar_override >= 0.0).then_some(self.stacking_ar_override)
    }
}
