//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to a JSON-RPC endpoint
//! - Query the account nonce fresh before each build
//! - Broadcast raw signed transactions
//! - Handle timeouts and network errors gracefully

use alloy::primitives::{Address, Bytes, TxHash};
use alloy::providers::{Provider, ProviderBuilder};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// Boundary the generator submits through.
///
/// The driver treats both operations as black boxes: `nonce_at` reads the
/// account's transaction count from chain state, `send_raw_transaction`
/// broadcasts an EIP-2718 encoded signed transaction.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Fetch the current nonce for the given address.
    async fn nonce_at(&self, address: Address) -> BlockchainResult<u64>;

    /// Broadcast a raw signed transaction, returning its hash.
    async fn send_raw_transaction(&self, raw: Bytes) -> BlockchainResult<TxHash>;
}

/// JSON-RPC implementation of [`ChainClient`] backed by an alloy provider.
#[derive(Clone)]
pub struct RpcChainClient {
    provider: Arc<dyn Provider + Send + Sync>,
    rpc_url: String,
    chain_id: u64,
    /// Request timeout duration.
    timeout_duration: Duration,
}

impl RpcChainClient {
    /// Create a new RPC client.
    ///
    /// Fails if the endpoint URL is malformed. Connectivity is not checked
    /// here; call [`Self::verify_chain_id`] to probe the endpoint.
    pub fn new(rpc_url: &str, chain_id: u64, rpc_timeout_secs: u64) -> BlockchainResult<Self> {
        let url: url::Url = rpc_url
            .parse()
            .map_err(|e| BlockchainError::Rpc(format!("Invalid RPC URL '{}': {}", rpc_url, e)))?;

        let provider =
            Arc::new(ProviderBuilder::new().connect_http(url)) as Arc<dyn Provider + Send + Sync>;

        Ok(Self {
            provider,
            rpc_url: rpc_url.to_string(),
            chain_id,
            timeout_duration: Duration::from_secs(rpc_timeout_secs),
        })
    }

    /// Verify the connected chain ID matches configuration.
    ///
    /// An unreachable endpoint or a mismatched chain id is a configuration
    /// error and prevents startup.
    pub async fn verify_chain_id(&self) -> BlockchainResult<()> {
        let fut = self.provider.get_chain_id();
        let actual = match timeout(self.timeout_duration, fut).await {
            Ok(Ok(id)) => id,
            Ok(Err(e)) => return Err(BlockchainError::Rpc(e.to_string())),
            Err(_) => {
                return Err(BlockchainError::Timeout(self.timeout_duration.as_secs()));
            }
        };

        if actual != self.chain_id {
            return Err(BlockchainError::ChainMismatch {
                expected: self.chain_id,
                actual,
            });
        }

        tracing::info!(
            rpc_url = %self.rpc_url,
            chain_id = self.chain_id,
            "Blockchain client initialized"
        );
        Ok(())
    }
}

#[async_trait]
impl ChainClient for RpcChainClient {
    async fn nonce_at(&self, address: Address) -> BlockchainResult<u64> {
        let fut = self.provider.get_transaction_count(address);
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(nonce)) => Ok(nonce),
            Ok(Err(e)) => Err(BlockchainError::NonceFetch(e.to_string())),
            Err(_) => Err(BlockchainError::NonceFetch(format!(
                "timeout after {} seconds",
                self.timeout_duration.as_secs()
            ))),
        }
    }

    async fn send_raw_transaction(&self, raw: Bytes) -> BlockchainResult<TxHash> {
        let fut = self.provider.send_raw_transaction(&raw);
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(pending)) => Ok(*pending.tx_hash()),
            Ok(Err(e)) => Err(BlockchainError::Submission(e.to_string())),
            Err(_) => Err(BlockchainError::Submission(format!(
                "timeout after {} seconds",
                self.timeout_duration.as_secs()
            ))),
        }
    }
}

impl std::fmt::Debug for RpcChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcChainClient")
            .field("rpc_url", &self.rpc_url)
            .field("chain_id", &self.chain_id)
            .field("timeout_secs", &self.timeout_duration.as_secs())
            .finish()
    }
}
