//! Rounding modes for discretizing real-valued samples
//!
//! The generator mixes two tie-breaking rules on purpose: gaps and floor
//! counts round half down, ceiling counts round half up. Applied to `x` and
//! `n - x` the two rules always land on complementary integers.

/// Round to the nearest integer, ties toward negative infinity.
///
/// # Example
/// ```
/// use poisson_arrivals::core::rounding::round_half_down;
///
/// assert_eq!(round_half_down(2.5), 2);
/// assert_eq!(round_half_down(2.51), 3);
/// assert_eq!(round_half_down(-0.5), -1);
/// ```
pub fn round_half_down(value: f64) -> i64 {
    (value - 0.5).ceil() as i64
}

/// Round to the nearest integer, ties toward positive infinity.
///
/// # Example
/// ```
/// use poisson_arrivals::core::rounding::round_half_up;
///
/// assert_eq!(round_half_up(2.5), 3);
/// assert_eq!(round_half_up(2.49), 2);
/// ```
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// True when `value` is a finite whole number.
pub fn is_whole(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}
