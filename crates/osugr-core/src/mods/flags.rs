use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::error::Error;

/// Wide mod flag set.
///
/// Bit positions are part of the stored score format and must not move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModFlags(u64);

impl ModFlags {
    // Green mods
    pub const NO_FAIL: Self = Self(1 << 0);
    pub const EASY: Self = Self(1 << 1);
    pub const AUTOPILOT: Self = Self(1 << 2);
    pub const RELAX: Self = Self(1 << 3);

    // Red mods
    pub const HIDDEN: Self = Self(1 << 4);
    pub const HARD_ROCK: Self = Self(1 << 5);
    pub const FLASHLIGHT: Self = Self(1 << 6);
    pub const SUDDEN_DEATH: Self = Self(1 << 7);
    /// Always includes sudden death.
    pub const PERFECT: Self = Self(Self::SUDDEN_DEATH.0 | 1 << 8);
    pub const NIGHTMARE: Self = Self(1 << 9);

    // Special mods
    pub const NO_PITCH_CORRECTION: Self = Self(1 << 10);
    pub const TOUCH_DEVICE: Self = Self(1 << 11);
    pub const SPUN_OUT: Self = Self(1 << 12);
    pub const SCORE_V2: Self = Self(1 << 13);
    pub const FPOSU: Self = Self(1 << 14);
    pub const TARGET: Self = Self(1 << 15);

    // Experimental mods
    pub const AR_OVERRIDE_LOCK: Self = Self(1 << 16);
    pub const OD_OVERRIDE_LOCK: Self = Self(1 << 17);
    pub const TIMEWARP: Self = Self(1 << 18);
    pub const AR_TIMEWARP: Self = Self(1 << 19);
    pub const MINIMIZE: Self = Self(1 << 20);
    pub const JIGSAW1: Self = Self(1 << 21);
    pub const JIGSAW2: Self = Self(1 << 22);
    pub const WOBBLE1: Self = Self(1 << 23);
    pub const WOBBLE2: Self = Self(1 << 24);
    pub const AR_WOBBLE: Self = Self(1 << 25);
    pub const FULL_ALTERNATE: Self = Self(1 << 26);
    pub const SHIRONE: Self = Self(1 << 27);
    pub const MAFHAM: Self = Self(1 << 28);
    pub const HALF_WINDOW: Self = Self(1 << 29);
    pub const HALF_WINDOW_ALLOW_300S: Self = Self(1 << 30);
    pub const MING3012: Self = Self(1 << 31);
    pub const NO_100S: Self = Self(1 << 32);
    pub const NO_50S: Self = Self(1 << 33);
    pub const MIRROR_HORIZONTAL: Self = Self(1 << 34);
    pub const MIRROR_VERTICAL: Self = Self(1 << 35);
    pub const FPOSU_STRAFING: Self = Self(1 << 36);
    pub const FADING_CURSOR: Self = Self(1 << 37);
    pub const FPS: Self = Self(1 << 38);
    pub const REVERSE_SLIDERS: Self = Self(1 << 39);
    pub const MILLHIOREF: Self = Self(1 << 40);
    pub const STRICT_TRACKING: Self = Self(1 << 41);
    pub const APPROACH_DIFFERENT: Self = Self(1 << 42);

    // Non-submittable
    pub const AUTOPLAY: Self = Self(1 << 63);

    /// Every bit below 43 plus autoplay.
    pub const ALL: Self = Self((1 << 43) - 1 | Self::AUTOPLAY.0);

    /// Named mods contained in this set.
    ///
    /// Sudden death is folded into perfect when both are present.
    pub fn iter(self) -> impl Iterator<Item = Mod> {
        Mod::iter().filter(move |m| {
            self.contains(m.flags())
                && !(*m == Mod::SuddenDeath && self.contains(Self::PERFECT))
        })
    }
}

impl_bit_set!(ModFlags, u64);

impl From<Mod> for ModFlags {
    fn from(m: Mod) -> Self {
        m.flags()
    }
}

impl FromIterator<Mod> for ModFlags {
    fn from_iter<I: IntoIterator<Item = Mod>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |acc, m| acc | m.flags())
    }
}

impl fmt::Display for ModFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NM");
        }

        let names: Vec<&'static str> = self.iter().map(Mod::acronym).collect();
        f.write_str(&names.join(","))
    }
}

/// Parses a list such as `"HD,HR"`, `"hidden+relax"` or `"HD HR"`.
///
/// `"NM"` and the empty string both give an empty set.
impl FromStr for ModFlags {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Self::empty();

        for token in s
            .split(|c: char| c == ',' || c == '+' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            if token.eq_ignore_ascii_case("NM") {
                continue;
            }
            let m = Mod::from_str(token).map_err(|_| Error::UnknownMod(token.to_string()))?;
            flags |= m.flags();
        }

        Ok(flags)
    }
}

/// A single named mod.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, Display)]
#[strum(ascii_case_insensitive)]
pub enum Mod {
    #[strum(to_string = "NF", serialize = "nofail")]
    NoFail,
    #[strum(to_string = "EZ", serialize = "easy")]
    Easy,
    #[strum(to_string = "AP", serialize = "autopilot")]
    Autopilot,
    #[strum(to_string = "RX", serialize = "relax")]
    Relax,
    #[strum(to_string = "HD", serialize = "hidden")]
    Hidden,
    #[strum(to_string = "HR", serialize = "hardrock")]
    HardRock,
    #[strum(to_string = "FL", serialize = "flashlight")]
    Flashlight,
    #[strum(to_string = "SD", serialize = "suddendeath")]
    SuddenDeath,
    #[strum(to_string = "PF", serialize = "perfect")]
    Perfect,
    #[strum(to_string = "NIGHTMARE")]
    Nightmare,
    #[strum(to_string = "NPC", serialize = "nopitchcorrection")]
    NoPitchCorrection,
    #[strum(to_string = "TD", serialize = "touchdevice")]
    TouchDevice,
    #[strum(to_string = "SO", serialize = "spunout")]
    SpunOut,
    #[strum(to_string = "V2", serialize = "scorev2")]
    ScoreV2,
    #[strum(to_string = "FPOSU")]
    FPoSu,
    #[strum(to_string = "TP", serialize = "target")]
    Target,
    #[strum(to_string = "ARLOCK", serialize = "aroverridelock")]
    ArOverrideLock,
    #[strum(to_string = "ODLOCK", serialize = "odoverridelock")]
    OdOverrideLock,
    #[strum(to_string = "TW", serialize = "timewarp")]
    Timewarp,
    #[strum(to_string = "ARTW", serialize = "artimewarp")]
    ArTimewarp,
    #[strum(to_string = "MIN", serialize = "minimize")]
    Minimize,
    #[strum(to_string = "JIG1", serialize = "jigsaw1")]
    Jigsaw1,
    #[strum(to_string = "JIG2", serialize = "jigsaw2")]
    Jigsaw2,
    #[strum(to_string = "WOB1", serialize = "wobble1")]
    Wobble1,
    #[strum(to_string = "WOB2", serialize = "wobble2")]
    Wobble2,
    #[strum(to_string = "ARWOB", serialize = "arwobble")]
    ArWobble,
    #[strum(to_string = "FA", serialize = "fullalternate")]
    FullAlternate,
    #[strum(to_string = "SHIRONE")]
    Shirone,
    #[strum(to_string = "MAFHAM")]
    Mafham,
    #[strum(to_string = "HW", serialize = "halfwindow")]
    HalfWindow,
    #[strum(to_string = "HW300", serialize = "halfwindowallow300s")]
    HalfWindowAllow300s,
    #[strum(to_string = "MING3012")]
    Ming3012,
    #[strum(to_string = "NO100", serialize = "no100s")]
    No100s,
    #[strum(to_string = "NO50", serialize = "no50s")]
    No50s,
    #[strum(to_string = "MRH", serialize = "mirrorhorizontal")]
    MirrorHorizontal,
    #[strum(to_string = "MRV", serialize = "mirrorvertical")]
    MirrorVertical,
    #[strum(to_string = "STRAFE", serialize = "fposustrafing")]
    FPoSuStrafing,
    #[strum(to_string = "FCUR", serialize = "fadingcursor")]
    FadingCursor,
    #[strum(to_string = "FPS")]
    Fps,
    #[strum(to_string = "RS", serialize = "reversesliders")]
    ReverseSliders,
    #[strum(to_string = "MILL", serialize = "millhioref")]
    Millhioref,
    #[strum(to_string = "ST", serialize = "stricttracking")]
    StrictTracking,
    #[strum(to_string = "AD", serialize = "approachdifferent")]
    ApproachDifferent,
    #[strum(to_string = "AT", serialize = "autoplay")]
    Autoplay,
}

impl Mod {
    pub fn acronym(self) -> &'static str {
        self.into()
    }

    pub fn flags(self) -> ModFlags {
        match self {
            Self::NoFail => ModFlags::NO_FAIL,
            Self::Easy => ModFlags::EASY,
            Self::Autopilot => ModFlags::AUTOPILOT,
            Self::Relax => ModFlags::RELAX,
            Self::Hidden => ModFlags::HIDDEN,
            Self::HardRock => ModFlags::HARD_ROCK,
            Self::Flashlight => ModFlags::FLASHLIGHT,
            Self::SuddenDeath => ModFlags::SUDDEN_DEATH,
            Self::Perfect => ModFlags::PERFECT,
            Self::Nightmare => ModFlags::NIGHTMARE,
            Self::NoPitchCorrection => ModFlags::NO_PITCH_CORRECTION,
            Self::TouchDevice => ModFlags::TOUCH_DEVICE,
            Self::SpunOut => ModFlags::SPUN_OUT,
            Self::ScoreV2 => ModFlags::SCORE_V2,
            Self::FPoSu => ModFlags::FPOSU,
            Self::Target => ModFlags::TARGET,
            Self::ArOverrideLock => ModFlags::AR_OVERRIDE_LOCK,
            Self::OdOverrideLock => ModFlags::OD_OVERRIDE_LOCK,
            Self::Timewarp => ModFlags::TIMEWARP,
            Self::ArTimewarp => ModFlags::AR_TIMEWARP,
            Self::Minimize => ModFlags::MINIMIZE,
            Self::Jigsaw1 => ModFlags::JIGSAW1,
            Self::Jigsaw2 => ModFlags::JIGSAW2,
            Self::Wobble1 => ModFlags::WOBBLE1,
            Self::Wobble2 => ModFlags::WOBBLE2,
            Self::ArWobble => ModFlags::AR_WOBBLE,
            Self::FullAlternate => ModFlags::FULL_ALTERNATE,
            Self::Shirone => ModFlags::SHIRONE,
            Self::Mafham => ModFlags::MAFHAM,
            Self::HalfWindow => ModFlags::HALF_WINDOW,
            Self::HalfWindowAllow300s => ModFlags::HALF_WINDOW_ALLOW_300S,
            Self::Ming3012 => ModFlags::MING3012,
            Self::No100s => ModFlags::NO_100S,
            Self::No50s => ModFlags::NO_50S,
            Self::MirrorHorizontal => ModFlags::MIRROR_HORIZONTAL,
            Self::MirrorVertical => ModFlags::MIRROR_VERTICAL,
            Self::FPoSuStrafing => ModFlags::FPOSU_STRAFING,
            Self::FadingCursor => ModFlags::FADING_CURSOR,
            Self::Fps => ModFlags::FPS,
            Self::ReverseSliders => ModFlags::REVERSE_SLIDERS,
            Self::Millhioref => ModFlags::MILLHIOREF,
            Self::StrictTracking => ModFlags::STRICT_TRACKING,
            Self::ApproachDifferent => ModFlags::APPROACH_DIFFERENT,
            Self::Autoplay => ModFlags::AUTOPLAY,
        }
    }
}
