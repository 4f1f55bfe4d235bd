use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

use crate::mods::{ModFlags, Mods};

use super::HitResult;

/// Which grades a hit can receive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Display,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum JudgementMode {
    /// 300 -> 100 -> 50 -> miss
    #[default]
    Default,
    /// 300 -> 50 -> miss
    Ming3012,
    /// 300 -> miss
    No100s,
    /// 300 -> 100 -> miss
    No50s,
}

impl JudgementMode {
    /// Resolve the active mode. Only the first of
    /// ming3012, no100s, no50s that is set applies.
    pub fn from_flags(flags: ModFlags) -> Self {
        if flags.contains(ModFlags::MING3012) {
            Self::Ming3012
        } else if flags.contains(ModFlags::NO_100S) {
            Self::No100s
        } else if flags.contains(ModFlags::NO_50S) {
            Self::No50s
        } else {
            Self::Default
        }
    }

    /// Graded tiers, tightest first.
    pub fn tiers(self) -> &'static [HitResult] {
        match self {
            Self::Default => &[HitResult::Hit300, HitResult::Hit100, HitResult::Hit50],
            Self::Ming3012 => &[HitResult::Hit300, HitResult::Hit50],
            Self::No100s => &[HitResult::Hit300],
            Self::No50s => &[HitResult::Hit300, HitResult::Hit100],
        }
    }
}

/// Mod derived switches consulted by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HitPolicy {
    /// Late hits inside the miss window are misses
    pub half_window: bool,
    /// With `half_window`, late hits inside the 300 window are still judged
    pub half_window_allow_300s: bool,
    pub mode: JudgementMode,
}

impl HitPolicy {
    pub fn from_flags(flags: ModFlags) -> Self {
        Self {
            half_window: flags.contains(ModFlags::HALF_WINDOW),
            half_window_allow_300s: flags.contains(ModFlags::HALF_WINDOW_ALLOW_300S),
            mode: JudgementMode::from_flags(flags),
        }
    }

    pub fn from_mods(mods: &Mods) -> Self {
        Self::from_flags(mods.flags)
    }
}
