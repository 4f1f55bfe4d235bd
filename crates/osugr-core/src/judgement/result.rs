use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

/// Judgement of a single player action, ordered worst to best.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum HitResult {
    /// Too far from the object to be judged at all
    #[default]
    #[strum(serialize = "-")]
    Null,
    #[strum(serialize = "miss")]
    Miss,
    #[strum(serialize = "50")]
    Hit50,
    #[strum(serialize = "100")]
    Hit100,
    #[strum(serialize = "300")]
    Hit300,
}

impl HitResult {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Check if this counts as a hit (not a miss or non-event)
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit50 | Self::Hit100 | Self::Hit300)
    }

    /// Check if this result is reported to scoring at all
    pub fn is_judged(&self) -> bool {
        *self != Self::Null
    }
}

impl fmt::Display for HitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "NULL",
            Self::Miss => "MISS",
            Self::Hit50 => "HIT50",
            Self::Hit100 => "HIT100",
            Self::Hit300 => "HIT300",
        };
        f.write_str(name)
    }
}
