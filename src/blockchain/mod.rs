//! Chain access subsystem.
//!
//! # Data Flow
//! ```text
//! Configuration (private key, RPC URL, chain id)
//!     → wallet.rs (key loading, signing)
//!     → client.rs (RPC connection with timeouts)
//! ```
//!
//! # Security Constraints
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod client;
pub mod types;
pub mod wallet;

pub use client::{ChainClient, RpcChainClient};
pub use types::{BlockchainError, BlockchainResult};
pub use wallet::Wallet;
