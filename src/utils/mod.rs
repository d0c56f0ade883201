//! Shared helpers for unit conversion, percentages and time windows

pub mod currency;
pub mod math;
pub mod time;
