//! Multi-account scoring through `BatchAnalyser`

use crate::common::{anonymous_payment, recent_timestamp, test_address, StaticDataSource};
use algorand_reputation::config::ScoringConfig;
use algorand_reputation::reputation::{BatchAnalyser, ReputationEngine};
use algorand_reputation::types::{BatchEntry, Transaction};
use std::time::Duration;

/// Accounts scoring exactly 30, 90 and 60
fn ranked_source() -> (StaticDataSource, Vec<String>) {
    let addresses: Vec<String> = (20..23).map(test_address).collect();
    let source = StaticDataSource::new()
        .with_transactions(&addresses[0], vec![anonymous_payment(2_000_000, recent_timestamp())])
        .with_transactions(&addresses[1], vec![anonymous_payment(8_000_000, recent_timestamp())])
        .with_transactions(&addresses[2], vec![anonymous_payment(5_000_000, recent_timestamp())]);
    (source, addresses)
}

fn analyser(source: StaticDataSource) -> BatchAnalyser<StaticDataSource> {
    BatchAnalyser::new(ReputationEngine::new(source, ScoringConfig::default()))
}

#[tokio::test]
async fn test_compare_ranks_by_score() {
    let (source, addresses) = ranked_source();
    let comparison = analyser(source).compare_accounts(&addresses).await;

    let ranked: Vec<(&str, f64, usize)> = comparison
        .ranking
        .iter()
        .map(|r| (r.address.as_str(), r.score, r.rank))
        .collect();
    assert_eq!(
        ranked,
        vec![
            (addresses[1].as_str(), 90.0, 1),
            (addresses[2].as_str(), 60.0, 2),
            (addresses[0].as_str(), 30.0, 3),
        ]
    );

    let summary = &comparison.summary;
    assert_eq!(summary.total_accounts, 3);
    assert_eq!(summary.valid_accounts, 3);
    assert_eq!(summary.errors, 0);
    assert_eq!(summary.highest_score, 90.0);
    assert_eq!(summary.lowest_score, 30.0);
    assert_eq!(summary.average_score, 60.0);
}

#[tokio::test]
async fn test_batch_records_failures_inline() {
    let (source, mut addresses) = ranked_source();
    addresses.insert(1, "definitely-not-valid".to_string());
    let analyser = analyser(source);

    let results = analyser.get_batch_reputation_scores(&addresses).await;
    assert_eq!(results.len(), 4);

    let failed = results.get("definitely-not-valid").unwrap();
    assert!(failed.is_error());
    assert_eq!(failed.reputation_score(), 0.0);
    match failed {
        BatchEntry::Failed(failure) => assert!(failure.error.contains("Invalid Algorand address")),
        BatchEntry::Scored(_) => panic!("invalid address should not score"),
    }

    let order: Vec<&str> = results.iter().map(|(a, _)| a).collect();
    let expected: Vec<&str> = addresses.iter().map(String::as_str).collect();
    assert_eq!(order, expected);

    let comparison = analyser.compare_accounts(&addresses).await;
    assert_eq!(comparison.summary.valid_accounts, 3);
    assert_eq!(comparison.summary.errors, 1);
    assert_eq!(comparison.ranking.len(), 3);
}

#[tokio::test]
async fn test_concurrent_batch_keeps_input_order() {
    let (source, addresses) = ranked_source();
    // First address finishes last
    let source = source
        .with_delay(&addresses[0], Duration::from_millis(60))
        .with_delay(&addresses[1], Duration::from_millis(30));
    let analyser = analyser(source).with_concurrency(3);

    let results = analyser.get_batch_reputation_scores(&addresses).await;
    let order: Vec<&str> = results.iter().map(|(a, _)| a).collect();
    let expected: Vec<&str> = addresses.iter().map(String::as_str).collect();
    assert_eq!(order, expected);

    let comparison = analyser.compare_accounts(&addresses).await;
    assert_eq!(comparison.ranking[0].address, addresses[1]);
    assert_eq!(comparison.ranking[2].address, addresses[0]);
}

#[tokio::test]
async fn test_concurrency_floor_is_one() {
    let (source, _) = ranked_source();
    assert_eq!(analyser(source).with_concurrency(0).concurrency(), 1);
}

#[tokio::test]
async fn test_duplicate_addresses_collapse() {
    let (source, addresses) = ranked_source();
    let input = vec![
        addresses[0].clone(),
        addresses[1].clone(),
        addresses[0].clone(),
    ];
    let analyser = analyser(source);

    let comparison = analyser.compare_accounts(&input).await;
    assert_eq!(comparison.summary.total_accounts, 3);
    assert_eq!(comparison.summary.valid_accounts, 2);
    assert_eq!(comparison.summary.errors, 0);
    assert_eq!(comparison.detailed_results.len(), 2);
    assert_eq!(analyser.engine().source().transaction_fetches(), 2);
}

#[tokio::test]
async fn test_empty_batch() {
    let comparison = analyser(StaticDataSource::new()).compare_accounts(&[]).await;
    assert!(comparison.ranking.is_empty());
    assert_eq!(comparison.summary.total_accounts, 0);
    assert_eq!(comparison.summary.average_score, 0.0);
}

#[tokio::test]
async fn test_insights_across_accounts() {
    let high = test_address(30);
    let mid = test_address(31);
    let source = StaticDataSource::new()
        .with_transactions(
            &high,
            vec![
                Transaction::of_type("appl", recent_timestamp()),
                Transaction::of_type("appl", recent_timestamp()),
                Transaction::of_type("appl", recent_timestamp()),
            ],
        )
        .with_transactions(
            &mid,
            vec![
                anonymous_payment(4_000_000, recent_timestamp()),
                Transaction::of_type("appl", recent_timestamp()),
            ],
        );
    let addresses = vec![high.clone(), mid.clone(), "bogus".to_string()];

    let insights = analyser(source).get_reputation_insights(&addresses).await;
    // high: 3 * 20 + 10 = 70; mid: 40 + 20 + 10 = 70
    assert_eq!(insights.total_accounts_analyzed, 2);
    assert_eq!(insights.high_score_accounts, 2);
    assert_eq!(insights.high_score_percentage, 100.0);
    assert_eq!(insights.transaction_type_distribution.get("appl"), Some(&4));
    assert_eq!(insights.transaction_type_distribution.get("pay"), Some(&1));
    assert_eq!(insights.most_common_txn_type.as_deref(), Some("appl"));
    assert_eq!(insights.score_distribution.good, 2);
    // The failed address counts as poor
    assert_eq!(insights.score_distribution.poor, 1);
}
