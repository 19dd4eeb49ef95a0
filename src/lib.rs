//! Synthetic transaction load generator.
//!
//! On a fixed interval, builds one of four transaction payload variants
//! (legacy, access list, dynamic fee, blob) from a single configured account,
//! signs it, and submits it to a target node to exercise its
//! transaction-acceptance path.

pub mod blockchain;
pub mod config;
pub mod generator;
pub mod tx;

pub use blockchain::{BlockchainError, BlockchainResult, ChainClient, RpcChainClient, Wallet};
pub use config::GeneratorConfig;
pub use generator::TxGenerator;
