use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Legacy 32 bit mod mask, as stored in replays and score submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LegacyMods(u32);

impl LegacyMods {
    pub const NO_FAIL: Self = Self(1 << 0);
    pub const EASY: Self = Self(1 << 1);
    pub const TOUCH_DEVICE: Self = Self(1 << 2);
    pub const HIDDEN: Self = Self(1 << 3);
    pub const HARD_ROCK: Self = Self(1 << 4);
    pub const SUDDEN_DEATH: Self = Self(1 << 5);
    pub const DOUBLE_TIME: Self = Self(1 << 6);
    pub const RELAX: Self = Self(1 << 7);
    pub const HALF_TIME: Self = Self(1 << 8);
    /// Only valid together with double time.
    pub const NIGHTCORE: Self = Self(1 << 9);
    pub const FLASHLIGHT: Self = Self(1 << 10);
    pub const AUTOPLAY: Self = Self(1 << 11);
    pub const SPUN_OUT: Self = Self(1 << 12);
    pub const AUTOPILOT: Self = Self(1 << 13);
    /// Only valid together with sudden death.
    pub const PERFECT: Self = Self(1 << 14);
    pub const TARGET: Self = Self(1 << 23);
    pub const SCORE_V2: Self = Self(1 << 29);
    /// Axis is not recorded.
    pub const MIRROR: Self = Self(1 << 30);

    pub const ALL: Self = Self(
        Self::NO_FAIL.0
            | Self::EASY.0
            | Self::TOUCH_DEVICE.0
            | Self::HIDDEN.0
            | Self::HARD_ROCK.0
            | Self::SUDDEN_DEATH.0
            | Self::DOUBLE_TIME.0
            | Self::RELAX.0
            | Self::HALF_TIME.0
            | Self::NIGHTCORE.0
            | Self::FLASHLIGHT.0
            | Self::AUTOPLAY.0
            | Self::SPUN_OUT.0
            | Self::AUTOPILOT.0
            | Self::PERFECT.0
            | Self::TARGET.0
            | Self::SCORE_V2.0
            | Self::MIRROR.0,
    );

    /// Acronyms in display order. Nightcore and perfect hide the bit they imply.
    const NAMES: [(Self, &'static str); 18] = [
        (Self::NO_FAIL, "NF"),
        (Self::EASY, "EZ"),
        (Self::TOUCH_DEVICE, "TD"),
        (Self::HIDDEN, "HD"),
        (Self::HARD_ROCK, "HR"),
        (Self::SUDDEN_DEATH, "SD"),
        (Self::DOUBLE_TIME, "DT"),
        (Self::RELAX, "RX"),
        (Self::HALF_TIME, "HT"),
        (Self::NIGHTCORE, "NC"),
        (Self::FLASHLIGHT, "FL"),
        (Self::AUTOPLAY, "AT"),
        (Self::SPUN_OUT, "SO"),
        (Self::AUTOPILOT, "AP"),
        (Self::PERFECT, "PF"),
        (Self::TARGET, "TP"),
        (Self::SCORE_V2, "V2"),
        (Self::MIRROR, "MR"),
    ];

    /// Check if any speed changing bit is set.
    pub const fn changes_speed(self) -> bool {
        self.intersects(Self(Self::DOUBLE_TIME.0 | Self::NIGHTCORE.0 | Self::HALF_TIME.0))
    }

    /// Check if any bit changes AR/CS/OD/HP.
    pub const fn changes_map(self) -> bool {
        self.changes_speed() || self.intersects(Self(Self::HARD_ROCK.0 | Self::EASY.0))
    }
}

impl_bit_set!(LegacyMods, u32);

impl From<u32> for LegacyMods {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl From<LegacyMods> for u32 {
    fn from(mods: LegacyMods) -> Self {
        mods.bits()
    }
}

impl fmt::Display for LegacyMods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NM");
        }

        for (flag, name) in Self::NAMES {
            if !self.contains(flag) {
                continue;
            }
            if flag == Self::DOUBLE_TIME && self.contains(Self::NIGHTCORE) {
                continue;
            }
            if flag == Self::SUDDEN_DEATH && self.contains(Self::PERFECT) {
                continue;
            }
            f.write_str(name)?;
        }

        Ok(())
    }
}

/// Parses a decimal (`"72"`) or hexadecimal (`"0x48"`) mask.
///
/// Unknown bits are dropped, as they are for wire values.
impl FromStr for LegacyMods {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => s.parse::<u32>(),
        };

        parsed
            .map(Self::from_bits_truncate)
            .map_err(|e| Error::InvalidLegacyBits(format!("{s}: {e}")))
    }
}
