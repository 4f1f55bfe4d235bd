use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Degenerate {axis} calibration: min={min}, mid={mid}, max={max}")]
    DegenerateCalibration {
        axis: &'static str,
        min: f32,
        mid: f32,
        max: f32,
    },

    #[error("Hit windows not nested at OD {od}: 300={w300}, 100={w100}, 50={w50}, miss={miss}")]
    UnnestedHitWindows {
        od: f32,
        w300: f32,
        w100: f32,
        w50: f32,
        miss: f32,
    },

    #[error("Miss window must be positive, got {0}")]
    InvalidMissWindow(f32),

    #[error("Unknown mod: {0}")]
    UnknownMod(String),

    #[error("Invalid legacy mod bits: {0}")]
    InvalidLegacyBits(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
