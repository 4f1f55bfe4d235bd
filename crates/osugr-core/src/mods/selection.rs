use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{LegacyMods, ModFlags};
use crate::config::defaults;
use crate::difficulty::{BeatmapDifficulty, GameRules};

/// Wide flags to legacy bits, for every mod with a 1:1 legacy equivalent.
const LEGACY_EQUIVALENTS: [(ModFlags, LegacyMods); 12] = [
    (ModFlags::NO_FAIL, LegacyMods::NO_FAIL),
    (ModFlags::EASY, LegacyMods::EASY),
    (ModFlags::TOUCH_DEVICE, LegacyMods::TOUCH_DEVICE),
    (ModFlags::HIDDEN, LegacyMods::HIDDEN),
    (ModFlags::HARD_ROCK, LegacyMods::HARD_ROCK),
    (ModFlags::SUDDEN_DEATH, LegacyMods::SUDDEN_DEATH),
    (ModFlags::RELAX, LegacyMods::RELAX),
    (ModFlags::FLASHLIGHT, LegacyMods::FLASHLIGHT),
    (ModFlags::SPUN_OUT, LegacyMods::SPUN_OUT),
    (ModFlags::AUTOPILOT, LegacyMods::AUTOPILOT),
    (ModFlags::TARGET, LegacyMods::TARGET),
    (ModFlags::SCORE_V2, LegacyMods::SCORE_V2),
];

/// Active mod state of a play: flags plus their tuning parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mods {
    pub flags: ModFlags,

    pub speed: f32,
    pub notelock_type: i32,
    pub autopilot_lenience: f32,
    /// Negative means no override
    pub ar_override: f32,
    /// Wins over `ar_override` when negative
    pub ar_override_negative: f32,
    pub cs_override: f32,
    pub cs_override_negative: f32,
    pub hp_override: f32,
    pub od_override: f32,
    pub timewarp_multiplier: f32,
    pub minimize_multiplier: f32,
    pub artimewarp_multiplier: f32,
    pub arwobble_strength: f32,
    pub arwobble_interval: f32,
    pub wobble_strength: f32,
    pub wobble_frequency: f32,
    pub wobble_rotation_speed: f32,
    pub jigsaw_followcircle_radius_factor: f32,
    pub shirone_combo: f32,
}

impl Default for Mods {
    fn default() -> Self {
        Self {
            flags: ModFlags::empty(),
            speed: 1.0,
            notelock_type: 2,
            autopilot_lenience: 0.75,
            ar_override: -1.0,
            ar_override_negative: 0.0,
            cs_override: -1.0,
            cs_override_negative: 0.0,
            hp_override: -1.0,
            od_override: -1.0,
            timewarp_multiplier: 1.5,
            minimize_multiplier: 0.5,
            artimewarp_multiplier: 0.5,
            arwobble_strength: 1.0,
            arwobble_interval: 7.0,
            wobble_strength: 25.0,
            wobble_frequency: 1.0,
            wobble_rotation_speed: 1.0,
            jigsaw_followcircle_radius_factor: 0.0,
            shirone_combo: 20.0,
        }
    }
}

impl Mods {
    pub fn new(flags: ModFlags, speed: f32) -> Self {
        Self {
            flags,
            speed,
            ..Default::default()
        }
    }

    pub fn has(&self, flags: ModFlags) -> bool {
        self.flags.contains(flags)
    }

    /// AR/OD/HP multiplier. Easy wins over hard rock when both are set.
    pub fn difficulty_multiplier(&self) -> f32 {
        if self.has(ModFlags::EASY) {
            0.5
        } else if self.has(ModFlags::HARD_ROCK) {
            1.4
        } else {
            1.0
        }
    }

    /// CS multiplier, hard rock is weaker here than for the other axes.
    pub fn cs_difficulty_multiplier(&self) -> f32 {
        if self.has(ModFlags::EASY) {
            0.5
        } else if self.has(ModFlags::HARD_ROCK) {
            1.3
        } else {
            1.0
        }
    }

    /// A negative override wins over the regular one.
    pub fn ar_override(&self) -> Option<f32> {
        if self.ar_override_negative < 0.0 {
            Some(self.ar_override_negative)
        } else if self.ar_override >= 0.0 {
            Some(self.ar_override)
        } else {
            None
        }
    }

    pub fn cs_override(&self) -> Option<f32> {
        if self.cs_override_negative < 0.0 {
            Some(self.cs_override_negative)
        } else if self.cs_override >= 0.0 {
            Some(self.cs_override)
        } else {
            None
        }
    }

    pub fn od_override(&self) -> Option<f32> {
        (self.od_override >= 0.0).then_some(self.od_override)
    }

    pub fn hp_override(&self) -> Option<f32> {
        (self.hp_override >= 0.0).then_some(self.hp_override)
    }

    /// AR after multipliers, overrides and the AR lock. Mods that vary AR
    /// during play (timewarp, AR wobble, ...) are not simulated.
    pub fn naive_ar(&self, rules: &GameRules, diff: &BeatmapDifficulty) -> f32 {
        rules.difficulty_with_mods(diff, self).ar
    }

    /// OD after multipliers, overrides and the OD lock.
    pub fn naive_od(&self, rules: &GameRules, diff: &BeatmapDifficulty) -> f32 {
        rules.difficulty_with_mods(diff, self).od
    }

    /// Encode into the legacy 32 bit format.
    ///
    /// Mods without a legacy bit are dropped. Autoplay overrides relax and
    /// autopilot.
    pub fn to_legacy(&self) -> LegacyMods {
        let mut legacy = LegacyMods::empty();

        if self.speed > 1.0 {
            legacy |= LegacyMods::DOUBLE_TIME;
            if self.has(ModFlags::NO_PITCH_CORRECTION) {
                legacy |= LegacyMods::NIGHTCORE;
            }
        } else if self.speed < 1.0 {
            legacy |= LegacyMods::HALF_TIME;
        }

        let mut encoded = ModFlags::NO_PITCH_CORRECTION;
        for (wide, bit) in LEGACY_EQUIVALENTS {
            if self.has(wide) {
                legacy |= bit;
                encoded |= wide;
            }
        }

        if self.has(ModFlags::PERFECT) {
            legacy |= LegacyMods::SUDDEN_DEATH | LegacyMods::PERFECT;
            encoded |= ModFlags::PERFECT;
        }

        let mirror = ModFlags::MIRROR_HORIZONTAL | ModFlags::MIRROR_VERTICAL;
        if self.flags.intersects(mirror) {
            legacy |= LegacyMods::MIRROR;
            encoded |= mirror;
        }

        if self.has(ModFlags::AUTOPLAY) {
            legacy.remove(LegacyMods::RELAX | LegacyMods::AUTOPILOT);
            legacy |= LegacyMods::AUTOPLAY;
            encoded |= ModFlags::AUTOPLAY;
        }

        let dropped = self.flags - encoded;
        if !dropped.is_empty() {
            debug!(%dropped, "Mods without legacy equivalent dropped");
        }

        legacy
    }

    /// Decode legacy bits. Every parameter other than speed gets its default.
    ///
    /// The mirror axis is not stored in legacy bits, so both axes are set.
    pub fn from_legacy(legacy: LegacyMods) -> Self {
        let mut mods = Self::default();

        if legacy.intersects(LegacyMods::DOUBLE_TIME | LegacyMods::NIGHTCORE) {
            mods.speed = defaults::LEGACY_FASTER_SPEED;
        } else if legacy.contains(LegacyMods::HALF_TIME) {
            mods.speed = defaults::LEGACY_SLOWER_SPEED;
        }

        if legacy.contains(LegacyMods::NIGHTCORE) {
            mods.flags |= ModFlags::NO_PITCH_CORRECTION;
        }

        for (wide, bit) in LEGACY_EQUIVALENTS {
            if legacy.contains(bit) {
                mods.flags |= wide;
            }
        }

        if legacy.contains(LegacyMods::PERFECT) {
            mods.flags |= ModFlags::PERFECT;
        }

        if legacy.contains(LegacyMods::MIRROR) {
            mods.flags |= ModFlags::MIRROR_HORIZONTAL | ModFlags::MIRROR_VERTICAL;
        }

        if legacy.contains(LegacyMods::AUTOPLAY) {
            mods.flags.remove(ModFlags::RELAX | ModFlags::AUTOPILOT);
            mods.flags |= ModFlags::AUTOPLAY;
        }

        mods
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let mods = Mods::default();
        assert!(mods.flags.is_empty());
        assert_eq!(mods.speed, 1.0);
        assert_eq!(mods.notelock_type, 2);
        assert!(mods.ar_override().is_none());
        assert!(mods.cs_override().is_none());
        assert!(mods.od_override().is_none());
        assert!(mods.hp_override().is_none());
        assert_eq!(mods.to_legacy(), LegacyMods::empty());
    }

    #[test]
    fn test_to_legacy_one_to_one() {
        let mods = Mods::new(ModFlags::HIDDEN | ModFlags::HARD_ROCK | ModFlags::SCORE_V2, 1.0);
        assert_eq!(
            mods.to_legacy(),
            LegacyMods::HIDDEN | LegacyMods::HARD_ROCK | LegacyMods::SCORE_V2
        );
    }

    #[test]
    fn test_to_legacy_speed() {
        assert_eq!(
            Mods::new(ModFlags::empty(), 1.5).to_legacy(),
            LegacyMods::DOUBLE_TIME
        );
        assert_eq!(
            Mods::new(ModFlags::empty(), 1.05).to_legacy(),
            LegacyMods::DOUBLE_TIME
        );
        assert_eq!(
            Mods::new(ModFlags::empty(), 0.75).to_legacy(),
            LegacyMods::HALF_TIME
        );
        assert_eq!(
            Mods::new(ModFlags::NO_PITCH_CORRECTION, 1.5).to_legacy(),
            LegacyMods::DOUBLE_TIME | LegacyMods::NIGHTCORE
        );
        // no daycore bit
        assert_eq!(
            Mods::new(ModFlags::NO_PITCH_CORRECTION, 0.75).to_legacy(),
            LegacyMods::HALF_TIME
        );
    }

    #[test]
    fn test_to_legacy_autoplay_overrides_relax_and_autopilot() {
        let mods = Mods::new(
            ModFlags::AUTOPLAY | ModFlags::RELAX | ModFlags::AUTOPILOT,
            1.0,
        );
        let legacy = mods.to_legacy();
        assert!(legacy.contains(LegacyMods::AUTOPLAY));
        assert!(!legacy.contains(LegacyMods::RELAX));
        assert!(!legacy.contains(LegacyMods::AUTOPILOT));
    }

    #[test]
    fn test_to_legacy_drops_wide_only_mods() {
        let mods = Mods::new(
            ModFlags::HIDDEN | ModFlags::MING3012 | ModFlags::WOBBLE1 | ModFlags::NIGHTMARE,
            1.0,
        );
        assert_eq!(mods.to_legacy(), LegacyMods::HIDDEN);
    }

    #[test]
    fn test_to_legacy_perfect_and_mirror() {
        let mods = Mods::new(ModFlags::PERFECT | ModFlags::MIRROR_VERTICAL, 1.0);
        assert_eq!(
            mods.to_legacy(),
            LegacyMods::SUDDEN_DEATH | LegacyMods::PERFECT | LegacyMods::MIRROR
        );
    }

    #[test]
    fn test_from_legacy_speed() {
        assert_eq!(Mods::from_legacy(LegacyMods::DOUBLE_TIME).speed, 1.5);
        assert_eq!(Mods::from_legacy(LegacyMods::HALF_TIME).speed, 0.75);
        assert_eq!(Mods::from_legacy(LegacyMods::HIDDEN).speed, 1.0);

        let nc = Mods::from_legacy(LegacyMods::DOUBLE_TIME | LegacyMods::NIGHTCORE);
        assert_eq!(nc.speed, 1.5);
        assert!(nc.has(ModFlags::NO_PITCH_CORRECTION));
    }

    #[test]
    fn test_from_legacy_mirror_expands_both_axes() {
        let mods = Mods::from_legacy(LegacyMods::MIRROR);
        assert!(mods.has(ModFlags::MIRROR_HORIZONTAL));
        assert!(mods.has(ModFlags::MIRROR_VERTICAL));
    }

    #[test]
    fn test_from_legacy_autoplay_overrides_relax() {
        let mods = Mods::from_legacy(LegacyMods::AUTOPLAY | LegacyMods::RELAX | LegacyMods::AUTOPILOT);
        assert_eq!(mods.flags, ModFlags::AUTOPLAY);
    }

    #[test]
    fn test_from_legacy_perfect() {
        let mods = Mods::from_legacy(LegacyMods::SUDDEN_DEATH | LegacyMods::PERFECT);
        assert_eq!(mods.flags, ModFlags::PERFECT);
    }

    #[test]
    fn test_round_trip_is_lossy() {
        // wide -> legacy -> wide loses wide-only mods and widens mirror
        let wide = Mods::new(ModFlags::MIRROR_HORIZONTAL | ModFlags::NO_50S, 1.0);
        let back = Mods::from_legacy(wide.to_legacy());
        assert!(!back.has(ModFlags::NO_50S));
        assert!(back.has(ModFlags::MIRROR_VERTICAL));

        // non-standard speeds snap to the legacy constants
        let wide = Mods::new(ModFlags::empty(), 1.2);
        assert_eq!(Mods::from_legacy(wide.to_legacy()).speed, 1.5);
    }

    #[test]
    fn test_legacy_round_trip_keeps_legacy_bits() {
        let legacy = LegacyMods::HIDDEN
            | LegacyMods::DOUBLE_TIME
            | LegacyMods::NIGHTCORE
            | LegacyMods::FLASHLIGHT
            | LegacyMods::MIRROR;
        assert_eq!(Mods::from_legacy(legacy).to_legacy(), legacy);
    }

    #[test]
    fn test_difficulty_multipliers() {
        let hr = Mods::new(ModFlags::HARD_ROCK, 1.0);
        assert_eq!(hr.difficulty_multiplier(), 1.4);
        assert_eq!(hr.cs_difficulty_multiplier(), 1.3);

        let ez = Mods::new(ModFlags::EASY | ModFlags::HARD_ROCK, 1.0);
        assert_eq!(ez.difficulty_multiplier(), 0.5);
        assert_eq!(ez.cs_difficulty_multiplier(), 0.5);
    }

    #[test]
    fn test_override_sentinels() {
        let mods = Mods {
            ar_override: 9.5,
            od_override: 0.0,
            ..Default::default()
        };
        assert_eq!(mods.ar_override(), Some(9.5));
        assert_eq!(mods.od_override(), Some(0.0));

        let negative = Mods {
            ar_override_negative: -3.0,
            ..Default::default()
        };
        assert_eq!(negative.ar_override(), Some(-3.0));
    }

    #[test]
    fn test_negative_override_wins() {
        let mods = Mods {
            ar_override: 9.5,
            ar_override_negative: -3.0,
            cs_override: 4.0,
            cs_override_negative: -2.0,
            ..Default::default()
        };
        assert_eq!(mods.ar_override(), Some(-3.0));
        assert_eq!(mods.cs_override(), Some(-2.0));

        let result = BeatmapDifficulty::new(9.0, 4.0, 8.0, 6.0).with_mods(&mods);
        assert_eq!(result.ar, -3.0);
        assert_eq!(result.cs, -2.0);
    }

    #[test]
    fn test_naive_values_ignore_time_varying_mods() {
        let rules = GameRules::default();
        let diff = BeatmapDifficulty::new(9.0, 4.0, 8.0, 6.0);
        let plain = Mods::new(ModFlags::empty(), 1.5);
        let warped = Mods::new(
            ModFlags::TIMEWARP | ModFlags::AR_TIMEWARP | ModFlags::AR_WOBBLE | ModFlags::MINIMIZE,
            1.5,
        );
        assert_eq!(warped.naive_ar(&rules, &diff), plain.naive_ar(&rules, &diff));
        assert_eq!(warped.naive_od(&rules, &diff), plain.naive_od(&rules, &diff));
    }

    #[test]
    fn test_naive_values_apply_locks() {
        let rules = GameRules::default();
        let diff = BeatmapDifficulty::new(9.0, 4.0, 8.0, 6.0);
        let locked = Mods::new(ModFlags::AR_OVERRIDE_LOCK | ModFlags::OD_OVERRIDE_LOCK, 1.5);
        assert!((locked.naive_ar(&rules, &diff) - 7.0).abs() < 1e-3);
        assert!((locked.naive_od(&rules, &diff) - 16.0 / 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_serde_defaults_missing_fields() {
        let mods: Mods = serde_json::from_str(r#"{"flags": 16, "speed": 1.5}"#).unwrap();
        assert_eq!(mods.flags, ModFlags::HIDDEN);
        assert_eq!(mods.speed, 1.5);
        assert_eq!(mods.shirone_combo, 20.0);
    }
}
