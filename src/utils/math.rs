//! Mathematical utility functions for score aggregation
//!
//! Percentage and rounding helpers with explicit zero-division handling.

/// Calculate percentage safely for usize values, returning 0.0 if total is zero.
///
/// # Examples
/// ```
/// use algorand_reputation::utils::math::safe_percentage;
///
/// assert_eq!(safe_percentage(50, 100), 50.0);
/// assert_eq!(safe_percentage(1, 4), 25.0);
/// assert_eq!(safe_percentage(50, 0), 0.0);  // Zero-division guard
/// ```
#[inline]
pub fn safe_percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}

/// Round to two decimal places
///
/// Rounds the exact binary value, so exact ties go to the even digit and
/// values such as `2.675` (stored just below the tie) round down.
///
/// # Examples
/// ```
/// use algorand_reputation::utils::math::round2;
///
/// assert_eq!(round2(20.004), 20.0);
/// assert_eq!(round2(33.3333), 33.33);
/// assert_eq!(round2(-4.126), -4.13);
/// assert_eq!(round2(20.125), 20.12);
/// ```
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
