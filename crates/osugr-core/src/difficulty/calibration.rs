use serde::{Deserialize, Serialize};
use tracing::warn;

use super::range::{map_difficulty_range, map_difficulty_range_inv};
use crate::error::{Error, Result};

/// Domain values (milliseconds) for difficulty ratings 0, 5 and 10.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyCalibration {
    pub min: f32,
    pub mid: f32,
    pub max: f32,
}

impl DifficultyCalibration {
    pub const fn new(min: f32, mid: f32, max: f32) -> Self {
        Self { min, mid, max }
    }

    /// Rating -> domain value
    pub fn map(&self, rating: f32) -> f32 {
        map_difficulty_range(rating, self.min, self.mid, self.max)
    }

    /// Domain value -> rating
    pub fn inverse(&self, value: f32) -> f32 {
        map_difficulty_range_inv(value, self.min, self.mid, self.max)
    }

    /// Multiply every calibration point, e.g. for approach time mods.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            min: self.min * factor,
            mid: self.mid * factor,
            max: self.max * factor,
        }
    }

    /// Check if either segment has zero width.
    pub fn is_degenerate(&self) -> bool {
        self.mid == self.min || self.mid == self.max
    }

    /// Check if the three points move in one direction.
    pub fn is_monotonic(&self) -> bool {
        (self.min > self.mid && self.mid > self.max) || (self.min < self.mid && self.mid < self.max)
    }

    /// Reject calibrations the inverse mapping cannot handle.
    pub fn validate(&self, axis: &'static str) -> Result<()> {
        if self.is_degenerate() || !self.is_monotonic() {
            warn!(axis, calibration = ?self, "Rejected calibration");
            return Err(Error::DegenerateCalibration {
                axis,
                min: self.min,
                mid: self.mid,
                max: self.max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_and_inverse() {
        let cal = DifficultyCalibration::new(80.0, 50.0, 20.0);
        assert_eq!(cal.map(5.0), 50.0);
        assert_eq!(cal.map(10.0), 20.0);
        assert_eq!(cal.inverse(50.0), 5.0);
        assert!((cal.inverse(cal.map(7.5)) - 7.5).abs() < 1e-4);
    }

    #[test]
    fn test_scaled() {
        let cal = DifficultyCalibration::new(1800.0, 1200.0, 450.0).scaled(2.0);
        assert_eq!(cal, DifficultyCalibration::new(3600.0, 2400.0, 900.0));
    }

    #[test]
    fn test_degenerate_detection() {
        assert!(DifficultyCalibration::new(50.0, 50.0, 20.0).is_degenerate());
        assert!(DifficultyCalibration::new(80.0, 20.0, 20.0).is_degenerate());
        assert!(!DifficultyCalibration::new(80.0, 50.0, 20.0).is_degenerate());
    }

    #[test]
    fn test_validate() {
        assert!(DifficultyCalibration::new(3.0, 5.0, 7.5).validate("spinner").is_ok());
        assert!(DifficultyCalibration::new(80.0, 50.0, 20.0).validate("od").is_ok());

        let err = DifficultyCalibration::new(80.0, 80.0, 20.0)
            .validate("hit_window_300")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Degenerate hit_window_300 calibration: min=80, mid=80, max=20"
        );

        // zig-zag is not monotonic
        assert!(DifficultyCalibration::new(80.0, 20.0, 50.0).validate("ar").is_err());
    }
}
