//! Multi-account report formatters

use super::utils::{export_json, format_number};
use super::OutputFormat;
use crate::errors::AppResult;
use crate::types::{AccountComparison, BatchEntry, ReputationInsights};

pub fn format_comparison(
    comparison: &AccountComparison,
    format: &OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(comparison),
        OutputFormat::Console => {
            let mut output = String::new();
            let summary = &comparison.summary;

            output.push_str("=== ACCOUNT RANKING ===\n\n");
            output.push_str(&format!("{:>4} | {:<58} | {:>8} |\n", "Rank", "Address", "Score"));
            output.push_str(&format!("{}\n", "-".repeat(80)));
            for entry in &comparison.ranking {
                output.push_str(&format!(
                    "{:>4} | {:<58} | {:>8.2} |\n",
                    entry.rank, entry.address, entry.score
                ));
            }

            let failures: Vec<(&str, &str)> = comparison
                .detailed_results
                .iter()
                .filter_map(|(address, entry)| match entry {
                    BatchEntry::Failed(failure) => Some((address, failure.error.as_str())),
                    BatchEntry::Scored(_) => None,
                })
                .collect();
            if !failures.is_empty() {
                output.push_str("\nErrors:\n");
                for (address, error) in failures {
                    output.push_str(&format!("  {}: {}\n", address, error));
                }
            }

            output.push_str("\n=== SUMMARY ===\n");
            output.push_str(&format!(
                "Accounts: {} ({} valid, {} errors)\n",
                format_number(summary.total_accounts),
                format_number(summary.valid_accounts),
                format_number(summary.errors)
            ));
            output.push_str(&format!(
                "Highest: {:.2}  Lowest: {:.2}  Average: {:.2}\n",
                summary.highest_score, summary.lowest_score, summary.average_score
            ));

            Ok(output)
        }
    }
}

pub fn format_insights(insights: &ReputationInsights, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(insights),
        OutputFormat::Console => {
            let mut output = String::new();
            let distribution = &insights.score_distribution;

            output.push_str("=== REPUTATION INSIGHTS ===\n\n");
            output.push_str(&format!(
                "Accounts analysed:   {}\n",
                format_number(insights.total_accounts_analyzed)
            ));
            output.push_str(&format!(
                "High score (>= 70):  {} ({:.2}%)\n",
                format_number(insights.high_score_accounts),
                insights.high_score_percentage
            ));
            output.push_str(&format!(
                "Most common type:    {}\n",
                insights.most_common_txn_type.as_deref().unwrap_or("n/a")
            ));

            if !insights.transaction_type_distribution.is_empty() {
                output.push_str("\nTransaction types:\n");
                for (tx_type, count) in &insights.transaction_type_distribution {
                    output.push_str(&format!("  {:<10} {:>10}\n", tx_type, format_number(*count)));
                }
            }

            output.push_str("\nScore distribution:\n");
            for (band, count) in [
                ("excellent (>= 90)", distribution.excellent),
                ("good (70-90)", distribution.good),
                ("fair (50-70)", distribution.fair),
                ("poor (< 50)", distribution.poor),
            ] {
                output.push_str(&format!("  {:<18} {:>6}\n", band, format_number(count)));
            }

            Ok(output)
        }
    }
}
