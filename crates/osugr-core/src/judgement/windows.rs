use serde::{Deserialize, Serialize};

/// Absolute hit window thresholds in milliseconds, tightest first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitWindows {
    pub w300: f32,
    pub w100: f32,
    pub w50: f32,
    pub miss: f32,
}

impl HitWindows {
    pub fn new(w300: f32, w100: f32, w50: f32, miss: f32) -> Self {
        Self {
            w300,
            w100,
            w50,
            miss,
        }
    }

    /// Windows rounded the way osu!stable does: `floor(w) - 0.5`.
    pub fn stable_like(&self) -> Self {
        let round = |w: f32| w.floor() - 0.5;
        Self {
            w300: round(self.w300),
            w100: round(self.w100),
            w50: round(self.w50),
            miss: round(self.miss),
        }
    }

    /// Check that the graded windows nest inside each other and the miss window
    pub fn is_nested(&self) -> bool {
        self.w300 <= self.w100 && self.w100 <= self.w50 && self.w50 <= self.miss
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_like() {
        let windows = HitWindows::new(49.6, 99.2, 149.9, 400.0).stable_like();
        assert_eq!(windows, HitWindows::new(48.5, 98.5, 148.5, 399.5));
    }

    #[test]
    fn test_is_nested() {
        assert!(HitWindows::new(20.0, 60.0, 100.0, 400.0).is_nested());
        assert!(!HitWindows::new(70.0, 60.0, 100.0, 400.0).is_nested());
    }
}
