//! `AlgorandClient` against mock algod / indexer services

use crate::common::test_address;
use algorand_reputation::client::{AlgorandClient, DataSource, Endpoints};
use algorand_reputation::config::{ClientConfig, ScoringConfig};
use algorand_reputation::reputation::ReputationEngine;
use algorand_reputation::utils::time::now_unix_seconds;
use anyhow::Result;
use httpmock::Method::GET;
use httpmock::MockServer;
use serde_json::json;
use std::time::{Duration, Instant};

const TOKEN: &str = "test-token";

fn client_config() -> ClientConfig {
    ClientConfig {
        api_token: Some(TOKEN.to_string()),
        max_retries: 2,
        backoff_factor: 0.0,
        timeout_seconds: 5,
        ..Default::default()
    }
}

fn client_for(server: &MockServer, config: &ClientConfig) -> Result<AlgorandClient> {
    Ok(AlgorandClient::with_endpoints(
        config,
        Endpoints {
            algod: server.base_url(),
            indexer: server.base_url(),
        },
    )?)
}

#[tokio::test]
async fn test_fetch_transactions_sends_key_and_query() -> Result<()> {
    let server = MockServer::start_async().await;
    let address = test_address(1);
    let receiver = test_address(2);

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/transactions")
                .header("x-api-key", TOKEN)
                .query_param("address", address.as_str())
                .query_param("limit", "250");
            then.status(200).json_body(json!({
                "current-round": 1,
                "transactions": [
                    {
                        "id": "TX1",
                        "tx-type": "pay",
                        "round-time": 1_700_000_000u64,
                        "payment-transaction": {"amount": 1_000_000u64, "receiver": receiver}
                    },
                    {"id": "TX2", "tx-type": "appl", "round-time": 1_700_000_100u64}
                ]
            }));
        })
        .await;

    let client = client_for(&server, &client_config())?;
    let transactions = client.fetch_transactions(&address, 250).await;

    mock.assert_async().await;
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].receiver(), Some(receiver.as_str()));
    assert_eq!(transactions[1].type_label(), "appl");
    Ok(())
}

#[tokio::test]
async fn test_transaction_limit_clamped() -> Result<()> {
    let server = MockServer::start_async().await;
    let address = test_address(3);

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/transactions")
                .query_param("limit", "10000");
            then.status(200).json_body(json!({"transactions": []}));
        })
        .await;

    let client = client_for(&server, &client_config())?;
    assert!(client.fetch_transactions(&address, 50_000).await.is_empty());
    mock.assert_hits_async(1).await;
    Ok(())
}

#[tokio::test]
async fn test_fetch_holdings_and_balance() -> Result<()> {
    let server = MockServer::start_async().await;
    let address = test_address(4);

    let assets = server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/v2/accounts/{}/assets", address));
            then.status(200).json_body(json!({
                "assets": [
                    {"asset-id": 31566704u64, "amount": 10_000_000u64, "is-frozen": false},
                    {"asset-id": 386192725u64, "amount": 5u64}
                ]
            }));
        })
        .await;
    let account = server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/v2/accounts/{}", address));
            then.status(200)
                .json_body(json!({"address": address, "amount": 2_500_000u64}));
        })
        .await;

    let client = client_for(&server, &client_config())?;
    let holdings = client.fetch_asa_holdings(&address).await;
    let balance = client.fetch_account_balance(&address).await;

    assets.assert_async().await;
    account.assert_async().await;
    assert_eq!(holdings.len(), 2);
    assert_eq!(holdings[0].asset_id, 31566704);
    assert_eq!(holdings[0].display_amount(), 10.0);
    assert_eq!(balance, Some(2.5));
    Ok(())
}

#[tokio::test]
async fn test_retries_exhausted_degrade_to_empty() -> Result<()> {
    let server = MockServer::start_async().await;
    let address = test_address(5);

    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/transactions");
            then.status(503).body("service unavailable");
        })
        .await;

    let client = client_for(&server, &client_config())?;
    assert!(client.fetch_transactions(&address, 10).await.is_empty());
    // first attempt + max_retries
    mock.assert_hits_async(3).await;
    Ok(())
}

#[tokio::test]
async fn test_malformed_body_degrades_to_none() -> Result<()> {
    let server = MockServer::start_async().await;
    let address = test_address(6);

    server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/v2/accounts/{}", address));
            then.status(200).body("not json");
        })
        .await;

    let config = ClientConfig {
        max_retries: 0,
        ..client_config()
    };
    let client = client_for(&server, &config)?;
    assert_eq!(client.fetch_account_balance(&address).await, None);
    Ok(())
}

#[tokio::test]
async fn test_invalid_address_never_reaches_network() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).json_body(json!({"transactions": [], "assets": []}));
        })
        .await;

    let client = client_for(&server, &client_config())?;
    assert!(client.fetch_transactions("SHORT", 10).await.is_empty());
    assert!(client.fetch_asa_holdings("SHORT").await.is_empty());
    assert_eq!(client.fetch_account_balance("SHORT").await, None);
    mock.assert_hits_async(0).await;
    Ok(())
}

#[tokio::test]
async fn test_rate_limit_spaces_requests() -> Result<()> {
    let server = MockServer::start_async().await;
    let address = test_address(7);

    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/v2/accounts/{}/assets", address));
            then.status(200).json_body(json!({"assets": []}));
        })
        .await;

    let config = ClientConfig {
        rate_limit_per_sec: Some(10.0),
        ..client_config()
    };
    let client = client_for(&server, &config)?;

    let start = Instant::now();
    for _ in 0..3 {
        client.fetch_asa_holdings(&address).await;
    }
    assert!(start.elapsed() >= Duration::from_millis(190));
    mock.assert_hits_async(3).await;
    Ok(())
}

#[tokio::test]
async fn test_engine_scores_from_mock_indexer() -> Result<()> {
    let server = MockServer::start_async().await;
    let address = test_address(8);
    let recent = (now_unix_seconds() - 86_400.0) as u64;

    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/transactions")
                .query_param("address", address.as_str());
            then.status(200).json_body(json!({
                "transactions": [
                    {"tx-type": "axfer", "round-time": recent,
                     "asset-transfer-transaction": {"amount": 1u64, "asset-id": 9u64}}
                ]
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/v2/accounts/{}/assets", address));
            then.status(200).json_body(json!({"assets": []}));
        })
        .await;

    let client = client_for(&server, &client_config())?;
    let engine = ReputationEngine::new(client, ScoringConfig::default());

    assert_eq!(engine.calculate_reputation(&address).await?, 110.0);
    let detailed = engine.get_detailed_reputation(&address).await?;
    assert_eq!(detailed.reputation_score, 100.0);
    assert_eq!(detailed.analysis.transaction_types.get("axfer"), Some(&1));
    Ok(())
}
