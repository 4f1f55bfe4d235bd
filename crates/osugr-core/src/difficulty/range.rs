/// Rating at which every calibration returns its midpoint.
pub const MID_RATING: f32 = 5.0;

/// Map a 0-10 difficulty rating onto a domain value (AR 5 -> 1200 ms).
///
/// Interpolates linearly between `min` (rating 0) and `mid` (rating 5), or
/// between `mid` and `max` (rating 10). The rating is not clamped, values
/// outside 0-10 extrapolate along the nearest segment.
pub fn map_difficulty_range(rating: f32, min: f32, mid: f32, max: f32) -> f32 {
    if rating > MID_RATING {
        return mid + (max - mid) * (rating - MID_RATING) / MID_RATING;
    }

    if rating < MID_RATING {
        return mid - (mid - min) * (MID_RATING - rating) / MID_RATING;
    }

    mid
}

/// Double precision variant of [`map_difficulty_range`].
pub fn map_difficulty_range_f64(rating: f64, min: f64, mid: f64, max: f64) -> f64 {
    const MID: f64 = MID_RATING as f64;

    if rating > MID {
        return mid + (max - mid) * (rating - MID) / MID;
    }

    if rating < MID {
        return mid - (mid - min) * (MID - rating) / MID;
    }

    mid
}

/// Inverse of [`map_difficulty_range`] (1200 ms -> AR 5).
///
/// The segment is picked from the side of `mid` the value falls on, so
/// increasing and decreasing calibrations are both handled. `min == mid` or
/// `mid == max` divides by zero; that is a caller error and only asserted in
/// debug builds.
pub fn map_difficulty_range_inv(value: f32, min: f32, mid: f32, max: f32) -> f32 {
    debug_assert!(
        mid != min && mid != max,
        "degenerate calibration: min={min}, mid={mid}, max={max}"
    );

    if value == mid {
        return MID_RATING;
    }

    // upper segment lies between mid and max
    if (value < mid) == (max < mid) {
        return ((value * MID_RATING - mid * MID_RATING) / (max - mid)) + MID_RATING;
    }

    MID_RATING - ((mid * MID_RATING - value * MID_RATING) / (mid - min))
}
