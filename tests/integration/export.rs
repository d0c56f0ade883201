//! Comparison export pipeline

use crate::common::{anonymous_payment, recent_timestamp, test_address, StaticDataSource};
use algorand_reputation::config::ScoringConfig;
use algorand_reputation::errors::AppError;
use algorand_reputation::reputation::{BatchAnalyser, ReputationEngine};
use algorand_reputation::types::AssetHolding;
use anyhow::Result;

fn populated_analyser() -> (BatchAnalyser<StaticDataSource>, Vec<String>) {
    let a = test_address(50);
    let b = test_address(51);
    let source = StaticDataSource::new()
        .with_transactions(&a, vec![anonymous_payment(1_000_000, recent_timestamp())])
        .with_holdings(&a, vec![AssetHolding::new(1, 10_000_000)])
        .with_transactions(
            &b,
            vec![
                anonymous_payment(3_000_000, recent_timestamp()),
                anonymous_payment(1_000_000, recent_timestamp()),
            ],
        );
    let analyser = BatchAnalyser::new(ReputationEngine::new(source, ScoringConfig::default()))
        .with_concurrency(2);
    (analyser, vec![a, b, "invalid".to_string()])
}

#[tokio::test]
async fn test_csv_export_rows() -> Result<()> {
    let (analyser, addresses) = populated_analyser();
    let csv = analyser.export(&addresses, "csv").await?;

    let lines: Vec<&str> = csv.lines().collect();
    // header + two valid accounts; the invalid address is omitted
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "Address,Score,Rank,Total Transactions,Unique Receivers,Total Volume,ASA Holdings"
    );
    // b: (3 + 1) * 10 + 10 = 50; a: 10 + 10 + 1 = 21
    assert_eq!(lines[1], format!("{},50.0,1,2,0,0.0,0", addresses[1]));
    assert_eq!(lines[2], format!("{},21.0,2,1,0,0.0,1", addresses[0]));
    Ok(())
}

#[tokio::test]
async fn test_csv_format_is_case_insensitive() -> Result<()> {
    let (analyser, addresses) = populated_analyser();
    let csv = analyser.export(&addresses[..1], "CSV").await?;
    assert_eq!(csv.lines().count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_json_export_structure() -> Result<()> {
    let (analyser, addresses) = populated_analyser();
    let json = analyser.export(&addresses, "json").await?;

    assert!(json.starts_with("{\n  \"ranking\""));
    let value: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(value["summary"]["total_accounts"], 3);
    assert_eq!(value["summary"]["valid_accounts"], 2);
    assert_eq!(value["summary"]["errors"], 1);
    assert_eq!(value["ranking"][0]["address"], addresses[1].as_str());
    assert_eq!(value["detailed_results"]["invalid"]["reputation_score"], 0.0);
    assert_eq!(
        value["detailed_results"][addresses[0].as_str()]["analysis"]["asa_holdings_count"],
        1
    );

    let position = |key: &str| json.find(&format!("\"{}\": {{", key));
    // detailed_results keeps input order
    assert!(position(&addresses[0]) < position(&addresses[1]));
    assert!(position(&addresses[1]) < position("invalid"));
    assert!(position("invalid").is_some());
    Ok(())
}

#[tokio::test]
async fn test_unsupported_format_rejected_without_fetching() {
    let (analyser, addresses) = populated_analyser();

    match analyser.export(&addresses, "xml").await {
        Err(AppError::UnsupportedFormat { format }) => assert_eq!(format, "xml"),
        other => panic!("expected UnsupportedFormat, got {:?}", other),
    }
    assert_eq!(analyser.engine().source().transaction_fetches(), 0);
}

#[tokio::test]
async fn test_export_written_to_file() -> Result<()> {
    let (analyser, addresses) = populated_analyser();
    let csv = analyser.export(&addresses, "csv").await?;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("reputation.csv");
    std::fs::write(&path, &csv)?;

    let mut reader = csv::Reader::from_path(&path)?;
    let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][1], "50.0");
    assert_eq!(&rows[1][6], "1");
    Ok(())
}
