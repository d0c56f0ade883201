//! Currency conversion and formatting for Algorand amounts
//!
//! Algos and ASA amounts handled by the scorer use a fixed decimal scale of
//! six places: one display unit is 1,000,000 base units.

/// Base units (microalgos) per display unit (algo)
pub const MICROALGOS_PER_ALGO: f64 = 1_000_000.0;

/// Convert a base-unit amount to display units
///
/// # Examples
/// ```
/// use algorand_reputation::utils::currency::microalgos_to_algos;
///
/// assert_eq!(microalgos_to_algos(1_000_000), 1.0);
/// assert_eq!(microalgos_to_algos(500_000), 0.5);
/// ```
pub fn microalgos_to_algos(microalgos: u64) -> f64 {
    microalgos as f64 / MICROALGOS_PER_ALGO
}

/// Format a display-unit amount with six decimal places
///
/// # Examples
/// ```
/// use algorand_reputation::utils::currency::format_algos;
///
/// assert_eq!(format_algos(12.5), "12.500000 ALGO");
/// ```
pub fn format_algos(algos: f64) -> String {
    format!("{:.6} ALGO", algos)
}
