//! Utility functions for report formatting

use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Format number with thousand separators for console output
///
/// # Examples
///
/// ```
/// # use algorand_reputation::reports::utils::format_number;
/// assert_eq!(format_number(1000), "1,000");
/// assert_eq!(format_number(1234567), "1,234,567");
/// ```
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Render a float the way a spreadsheet reader expects it
///
/// Whole numbers keep one decimal place (`20.0`), others use the shortest
/// representation that round-trips.
///
/// # Examples
///
/// ```
/// # use algorand_reputation::reports::utils::format_float;
/// assert_eq!(format_float(20.0), "20.0");
/// assert_eq!(format_float(21.67), "21.67");
/// ```
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Export data as pretty JSON (2-space indent)
pub fn export_json<T: Serialize>(data: &T) -> AppResult<String> {
    serde_json::to_string_pretty(data)
        .map_err(|e| AppError::InvalidData(format!("JSON export failed: {}", e)))
}
