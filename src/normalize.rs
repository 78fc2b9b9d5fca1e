//! Value normalization for brightness and contrast writes.
//!
//! Every value sent to a monitor passes through [`normalize`], so requests
//! and relative adjustments past the bounds saturate instead of wrapping.

/// Lowest value a setting may take.
pub const MIN_VALUE: i64 = 0;

/// Highest value a setting may take.
pub const MAX_VALUE: i64 = 100;

/// Clamp `value` into `[lo, hi]`.
pub fn clamp(value: i64, lo: i64, hi: i64) -> i64 {
    lo.max(hi.min(value))
}

/// Clamp `value` into the setting range and convert it to a device value.
pub fn normalize(value: i64) -> u16 {
    // MAX_VALUE fits in u16, so the conversion cannot fail after clamping.
    u16::try_from(clamp(value, MIN_VALUE, MAX_VALUE)).unwrap_or(0)
}

/// Apply a signed delta to a current reading, saturating at the bounds.
pub fn apply_delta(current: u16, delta: i64) -> u16 {
    normalize(i64::from(current).saturating_add(delta))
}
