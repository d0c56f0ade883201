//! Report formatting and export
//!
//! Provides formatting for scoring results via the [`ReportFormatter`] facade,
//! and the two export formats (JSON and CSV) of an account comparison.

pub mod comparison;
pub mod export;
pub mod score;
pub mod utils;

use crate::errors::{AppError, AppResult};
use crate::types::{AccountComparison, ReputationInsights, ScoreBreakdown};
use std::fmt;
use std::str::FromStr;

/// Output format options for console commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
}

impl OutputFormat {
    /// Anything other than "json" falls back to console output
    pub fn parse(format: &str) -> Self {
        match format.trim().to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Console,
        }
    }
}

/// Export formats of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(format: &str) -> Result<Self, Self::Err> {
        match format.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(AppError::UnsupportedFormat {
                format: format.to_string(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
        }
    }
}

impl ExportFormat {
    pub fn render(&self, comparison: &AccountComparison) -> AppResult<String> {
        match self {
            ExportFormat::Json => utils::export_json(comparison),
            ExportFormat::Csv => export::comparison_to_csv(comparison),
        }
    }
}

/// Facade for all report formatting operations
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn format_score(address: &str, score: f64, f: &OutputFormat) -> AppResult<String> {
        score::format_score(address, score, f)
    }

    pub fn format_breakdown(
        address: &str,
        breakdown: &ScoreBreakdown,
        f: &OutputFormat,
    ) -> AppResult<String> {
        score::format_breakdown(address, breakdown, f)
    }

    pub fn format_balance(address: &str, balance: Option<f64>, f: &OutputFormat) -> AppResult<String> {
        score::format_balance(address, balance, f)
    }

    pub fn format_comparison(c: &AccountComparison, f: &OutputFormat) -> AppResult<String> {
        comparison::format_comparison(c, f)
    }

    pub fn format_insights(i: &ReputationInsights, f: &OutputFormat) -> AppResult<String> {
        comparison::format_insights(i, f)
    }
}
