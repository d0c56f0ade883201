//! Single-account report formatters

use super::utils::{export_json, format_number};
use super::OutputFormat;
use crate::errors::AppResult;
use crate::types::ScoreBreakdown;
use crate::utils::currency::format_algos;
use serde_json::json;

pub fn format_score(address: &str, score: f64, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Console => Ok(format!("{}: {:.2}\n", address, score)),
        OutputFormat::Json => export_json(&json!({
            "address": address,
            "reputation_score": score,
        })),
    }
}

pub fn format_balance(
    address: &str,
    balance: Option<f64>,
    format: &OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Console => Ok(match balance {
            Some(amount) => format!("{}: {}\n", address, format_algos(amount)),
            None => format!("{}: balance unavailable\n", address),
        }),
        OutputFormat::Json => export_json(&json!({
            "address": address,
            "balance": balance,
        })),
    }
}

/// Format a score breakdown for console output
///
/// Lists every additive component next to the descriptive statistics so the
/// final number can be traced back to its inputs.
pub fn format_breakdown(
    address: &str,
    breakdown: &ScoreBreakdown,
    format: &OutputFormat,
) -> AppResult<String> {
    if let OutputFormat::Json = format {
        return export_json(breakdown);
    }

    let mut output = String::new();
    let components = &breakdown.breakdown;
    let analysis = &breakdown.analysis;

    output.push_str(&format!("=== REPUTATION: {} ===\n\n", address));
    output.push_str(&format!(
        "Reputation score: {:.2} (raw {:.4})\n\n",
        breakdown.reputation_score, breakdown.raw_score
    ));

    output.push_str(&format!("{:<22} | {:>12} |\n", "Component", "Points"));
    output.push_str(&format!("{}\n", "-".repeat(39)));
    for (label, value) in [
        ("Transactions", components.transaction_score),
        ("Frequency", components.frequency_score),
        ("Decay", components.decay_score),
        ("ASA holdings", components.asa_holding_score),
        ("Pattern bonuses", components.pattern_bonuses),
    ] {
        output.push_str(&format!("{:<22} | {:>12.4} |\n", label, value));
    }

    output.push_str("\n=== ACTIVITY ===\n");
    output.push_str(&format!(
        "Transactions:      {}\n",
        format_number(analysis.total_transactions)
    ));
    output.push_str(&format!(
        "Unique receivers:  {}\n",
        format_number(analysis.unique_receivers)
    ));
    output.push_str(&format!(
        "Total volume:      {}\n",
        format_algos(analysis.total_volume)
    ));
    output.push_str(&format!(
        "Average size:      {}\n",
        format_algos(analysis.avg_transaction_size)
    ));
    output.push_str(&format!(
        "ASA holdings:      {}\n",
        format_number(analysis.asa_holdings_count)
    ));

    if !analysis.transaction_types.is_empty() {
        output.push_str("\nTransaction types:\n");
        for (tx_type, count) in &analysis.transaction_types {
            output.push_str(&format!("  {:<10} {:>8}\n", tx_type, format_number(*count)));
        }
    }

    Ok(output)
}
