//! CSV export of an account comparison

use super::utils::format_float;
use crate::errors::{AppError, AppResult};
use crate::types::AccountComparison;

pub const CSV_HEADER: [&str; 7] = [
    "Address",
    "Score",
    "Rank",
    "Total Transactions",
    "Unique Receivers",
    "Total Volume",
    "ASA Holdings",
];

/// Header plus one row per ranked account, in rank order
pub fn comparison_to_csv(comparison: &AccountComparison) -> AppResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for item in &comparison.ranking {
        let Some(breakdown) = comparison
            .detailed_results
            .get(&item.address)
            .and_then(|entry| entry.scored())
        else {
            continue;
        };
        let analysis = &breakdown.analysis;

        writer.write_record([
            item.address.clone(),
            format_float(item.score),
            item.rank.to_string(),
            analysis.total_transactions.to_string(),
            analysis.unique_receivers.to_string(),
            format_float(analysis.total_volume),
            analysis.asa_holdings_count.to_string(),
        ])?;
    }

    let bytes = writer.into_inner()?;
    String::from_utf8(bytes).map_err(|e| AppError::InvalidData(format!("CSV is not UTF-8: {}", e)))
}
