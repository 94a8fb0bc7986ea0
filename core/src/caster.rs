//! Bounded cast from `f64` to `i32`.

use boundcast_common::error::RangeError;
use tracing::debug;

pub const LOWER_BOUND: f64 = i32::MIN as f64;
pub const UPPER_BOUND: f64 = i32::MAX as f64;

/// Returns `true` when `value` lies in `[i32::MIN, i32::MAX]`. `NaN` never does.
pub fn in_bounds(value: f64) -> bool {
    (LOWER_BOUND..=UPPER_BOUND).contains(&value)
}

/// Validates `value` against the `i32` range and truncates it toward zero.
pub fn cast_to_i32(value: f64) -> Result<i32, RangeError> {
    if !in_bounds(value) {
        return Err(RangeError { value });
    }

    let cast = value as i32;
    debug!(value, cast, "bounded cast");
    Ok(cast)
}

/// Ties return `b`.
pub fn max_of(a: i32, b: i32) -> i32 {
    if a > b { a } else { b }
}
