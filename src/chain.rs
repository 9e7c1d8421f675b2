//! ZenChain network parameters
//!
//! Fixed chain configuration the console runs against. Kept as data so the
//! JS host can read it for wallet setup and explorer links.

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// Chain configuration for a ZenChain network
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    /// EVM chain identifier
    pub chain_id: u64,
    /// Human-readable chain name
    pub chain_name: String,
    /// Native currency ticker
    pub currency_symbol: String,
    /// Native currency decimals
    pub currency_decimals: u8,
    /// HTTP RPC endpoint
    pub rpc_http: String,
    /// WebSocket RPC endpoint
    pub rpc_ws: String,
    /// Block explorer base URL (no trailing slash)
    pub explorer_url: String,
}

impl ChainConfig {
    /// ZenChain Testnet parameters.
    pub fn zenchain_testnet() -> Self {
        Self {
            chain_id: 8408,
            chain_name: "ZenChain Testnet".to_string(),
            currency_symbol: "ZTC".to_string(),
            currency_decimals: 18,
            rpc_http: "https://zenchain-testnet.api.onfinality.io/public".to_string(),
            rpc_ws: "wss://zenchain-testnet.api.onfinality.io/public-ws".to_string(),
            explorer_url: "https://zentrace.io".to_string(),
        }
    }

    /// Block explorer URL for a transaction hash.
    pub fn tx_url(&self, hash: &B256) -> String {
        format!("{}/tx/{:#x}", self.explorer_url, hash)
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self::zenchain_testnet()
    }
}
