//! Named network profiles

/// Endpoint pair for one network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Ledger node (algod) base URL
    pub algod: String,
    /// Indexer base URL
    pub indexer: String,
}

/// A known Algorand network and its public Nodely endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkProfile {
    pub name: &'static str,
    pub algod: &'static str,
    pub indexer: &'static str,
}

pub const MAINNET: NetworkProfile = NetworkProfile {
    name: "mainnet",
    algod: "https://mainnet-api.4160.nodely.dev",
    indexer: "https://mainnet-idx.4160.nodely.dev",
};

pub const TESTNET: NetworkProfile = NetworkProfile {
    name: "testnet",
    algod: "https://testnet-api.4160.nodely.dev",
    indexer: "https://testnet-idx.4160.nodely.dev",
};

pub const NETWORKS: [NetworkProfile; 2] = [MAINNET, TESTNET];

impl NetworkProfile {
    /// Resolve a profile by name (trimmed, case-insensitive); unknown names give testnet
    pub fn resolve(name: &str) -> NetworkProfile {
        let wanted = name.trim().to_lowercase();
        NETWORKS
            .iter()
            .copied()
            .find(|profile| profile.name == wanted)
            .unwrap_or(TESTNET)
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            algod: self.algod.to_string(),
            indexer: self.indexer.to_string(),
        }
    }
}
