//! # Game Mathematics
//!
//! Clamping and cursor wrapping.

/// Restricts `value` to `min..=max`.
///
/// If `max < min` the result is `min`.
///
/// # Examples
///
/// ```
/// use tallgrass::clamp;
///
/// assert_eq!(clamp(-16, 0, 304), 0);
/// assert_eq!(clamp(320, 0, 304), 304);
/// assert_eq!(clamp(48, 0, 304), 48);
/// ```
pub fn clamp(value: i32, min: i32, max: i32) -> i32 {
    value.min(max).max(min)
}

/// Moves an index by `step` and wraps it into `0..count` with true modulo.
///
/// Negative steps wrap from the front to the back. An empty range always
/// yields 0.
///
/// # Examples
///
/// ```
/// use tallgrass::wrap_index;
///
/// assert_eq!(wrap_index(0, -2, 4), 2);
/// assert_eq!(wrap_index(0, -1, 3), 2);
/// assert_eq!(wrap_index(3, 1, 4), 0);
/// ```
pub fn wrap_index(current: usize, step: i32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let count = count as i64;
    (current as i64 + step as i64).rem_euclid(count) as usize
}
