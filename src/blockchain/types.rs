//! Chain-specific types and error definitions.

use thiserror::Error;

/// Errors that can occur while generating and submitting transactions.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Invalid private key format or derivation error.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Chain configuration mismatch.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },

    /// Failed to fetch the account nonce from chain state.
    #[error("Nonce fetch failed: {0}")]
    NonceFetch(String),

    /// The configured transaction type selector is not one of the
    /// supported payload variants (0-3).
    #[error("Unsupported transaction type: {0}")]
    UnsupportedTxType(u8),

    /// KZG commitment or proof computation failed.
    #[error("KZG error: {0}")]
    Kzg(#[from] c_kzg::Error),

    /// The signing scheme rejected the payload.
    #[error("Signing failed: {0}")]
    Signing(String),

    /// The node rejected the transaction or the transport failed.
    #[error("Submission failed: {0}")]
    Submission(String),
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;
