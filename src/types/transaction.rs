//! Ledger wire types
//!
//! These mirror the JSON returned by the Algorand indexer and algod REST
//! APIs. Unknown fields are ignored; both the kebab-case indexer spelling and
//! the camelCase SDK spelling are accepted for the fields the scorer reads.

use crate::utils::currency::microalgos_to_algos;
use serde::{Deserialize, Serialize};

/// Transaction category derived from the raw `tx-type` label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TxKind {
    /// `pay`
    Payment,
    /// `axfer`
    AssetTransfer,
    /// `appl`
    ApplicationCall,
    /// `acfg`
    AssetConfig,
    /// `afrz`
    AssetFreeze,
    /// `keyreg`
    KeyRegistration,
    /// Anything else, including a missing label
    Other,
}

impl TxKind {
    pub fn from_label(label: &str) -> Self {
        match label {
            "pay" => TxKind::Payment,
            "axfer" => TxKind::AssetTransfer,
            "appl" => TxKind::ApplicationCall,
            "acfg" => TxKind::AssetConfig,
            "afrz" => TxKind::AssetFreeze,
            "keyreg" => TxKind::KeyRegistration,
            _ => TxKind::Other,
        }
    }
}

/// Payment-specific fields (`payment-transaction`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentFields {
    /// Amount in microalgos
    #[serde(default)]
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
}

/// Asset-transfer-specific fields (`asset-transfer-transaction`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetTransferFields {
    /// Amount in the asset's base units
    #[serde(default)]
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
    #[serde(rename = "asset-id", alias = "assetId", default)]
    pub asset_id: u64,
}

/// A single indexer transaction record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "tx-type", alias = "txType", default)]
    pub tx_type: Option<String>,

    /// Block time in Unix seconds; absent or zero means unknown
    #[serde(rename = "round-time", alias = "roundTime", default)]
    pub round_time: Option<f64>,

    #[serde(
        rename = "payment-transaction",
        alias = "paymentTransaction",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub payment: Option<PaymentFields>,

    #[serde(
        rename = "asset-transfer-transaction",
        alias = "assetTransferTransaction",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub asset_transfer: Option<AssetTransferFields>,
}

impl Transaction {
    /// Payment of `amount` microalgos to `receiver`
    pub fn payment(receiver: impl Into<String>, amount: u64, round_time: f64) -> Self {
        Self {
            tx_type: Some("pay".to_string()),
            round_time: Some(round_time),
            payment: Some(PaymentFields {
                amount,
                receiver: Some(receiver.into()),
            }),
            ..Default::default()
        }
    }

    /// Transfer of `amount` base units of `asset_id` to `receiver`
    pub fn asset_transfer(
        receiver: impl Into<String>,
        asset_id: u64,
        amount: u64,
        round_time: f64,
    ) -> Self {
        Self {
            tx_type: Some("axfer".to_string()),
            round_time: Some(round_time),
            asset_transfer: Some(AssetTransferFields {
                amount,
                receiver: Some(receiver.into()),
                asset_id,
            }),
            ..Default::default()
        }
    }

    /// Transaction carrying only a type label and a timestamp
    pub fn of_type(label: impl Into<String>, round_time: f64) -> Self {
        Self {
            tx_type: Some(label.into()),
            round_time: Some(round_time),
            ..Default::default()
        }
    }

    pub fn kind(&self) -> TxKind {
        self.tx_type
            .as_deref()
            .map(TxKind::from_label)
            .unwrap_or(TxKind::Other)
    }

    /// Raw type label, `"unknown"` when the record carries none or an empty one
    pub fn type_label(&self) -> &str {
        self.tx_type
            .as_deref()
            .filter(|label| !label.is_empty())
            .unwrap_or("unknown")
    }

    /// Block time in Unix seconds, `0.0` when unknown
    pub fn timestamp(&self) -> f64 {
        self.round_time.unwrap_or(0.0)
    }

    /// Payment amount in algos; zero for non-payments
    pub fn payment_amount(&self) -> f64 {
        self.payment
            .as_ref()
            .map(|p| microalgos_to_algos(p.amount))
            .unwrap_or(0.0)
    }

    /// Counterparty of a payment or asset transfer
    pub fn receiver(&self) -> Option<&str> {
        let receiver = match self.kind() {
            TxKind::Payment => self.payment.as_ref()?.receiver.as_deref(),
            TxKind::AssetTransfer => self.asset_transfer.as_ref()?.receiver.as_deref(),
            _ => None,
        };
        receiver.filter(|r| !r.is_empty())
    }
}

/// Asset (ASA) holding of an account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetHolding {
    #[serde(rename = "asset-id", alias = "assetId", default)]
    pub asset_id: u64,
    /// Holding in base units
    #[serde(default)]
    pub amount: u64,
    #[serde(rename = "is-frozen", alias = "isFrozen", default)]
    pub is_frozen: bool,
}

impl AssetHolding {
    pub fn new(asset_id: u64, amount: u64) -> Self {
        Self {
            asset_id,
            amount,
            is_frozen: false,
        }
    }

    /// Holding in display units (base units / 1e6)
    pub fn display_amount(&self) -> f64 {
        microalgos_to_algos(self.amount)
    }
}

/// Subset of the algod account record used for balance lookups
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountInfo {
    #[serde(default)]
    pub address: Option<String>,
    /// Balance in microalgos
    #[serde(default)]
    pub amount: u64,
}
