//! Hit judgement.
//!
//! This module contains:
//! - `HitResult` - the grade of one player action
//! - `HitWindows` - the nested millisecond windows a grade is judged against
//! - `JudgementMode` / `HitPolicy` - mod switches that remove tiers or punish late hits
//! - `classify` - delta + windows + policy -> grade

mod policy;
mod result;
mod windows;

pub use policy::*;
pub use result::*;
pub use windows::*;

use tracing::trace;

/// Judge a timing delta (`observed - expected`, ms).
///
/// Late hits under half window are misses unless the policy allows them
/// inside the 300 window. Otherwise the absolute delta is matched against
/// the tiers of the active mode, tightest first. Deltas inside the miss
/// window but outside every tier are misses, anything further out is
/// [`HitResult::Null`].
pub fn classify(delta: f32, windows: &HitWindows, policy: &HitPolicy) -> HitResult {
    let abs = delta.abs();

    if policy.half_window && delta > 0.0 && abs <= windows.miss {
        let allowed = policy.half_window_allow_300s && abs <= windows.w300;
        if !allowed {
            trace!(delta, "Late hit under half window");
            return HitResult::Miss;
        }
    }

    let result = policy
        .mode
        .tiers()
        .iter()
        .copied()
        .find(|tier| abs <= window_for(windows, *tier))
        .unwrap_or(if abs <= windows.miss {
            HitResult::Miss
        } else {
            HitResult::Null
        });

    trace!(delta, %result, mode = %policy.mode, "Classified hit");
    result
}

fn window_for(windows: &HitWindows, tier: HitResult) -> f32 {
    match tier {
        HitResult::Hit300 => windows.w300,
        HitResult::Hit100 => windows.w100,
        HitResult::Hit50 => windows.w50,
        HitResult::Miss => windows.miss,
        HitResult::Null => f32::INFINITY,
    }
}
