//! Linear mapping between a value range and the unit interval.
//!
//! `to_ratio` and `from_ratio` are plain arithmetic and do not guard their
//! inputs: a degenerate range (`min == max`) yields NaN or an infinity, and a
//! value outside `[min, max]` yields a ratio outside `[0, 1]`. Callers that need
//! a guarantee go through [`checked_ratio`] and [`clamp_unit`].

/// Normalises `value` against `[min, max]`.
pub fn to_ratio(value: f32, min: f32, max: f32) -> f32 {
    (value - min) / (max - min)
}

/// Inverse of [`to_ratio`].
pub fn from_ratio(ratio: f32, min: f32, max: f32) -> f32 {
    (max - min) * ratio + min
}

/// Like [`to_ratio`], but `None` when the range is degenerate or the result
/// is not a finite number.
pub fn checked_ratio(value: f32, min: f32, max: f32) -> Option<f32> {
    if min == max {
        return None;
    }

    let ratio = to_ratio(value, min, max);

    ratio.is_finite().then_some(ratio)
}

/// Clamps a ratio into `[0, 1]`. NaN stays NaN.
pub fn clamp_unit(ratio: f32) -> f32 {
    ratio.clamp(0., 1.)
}
