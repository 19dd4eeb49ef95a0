//! Generator configuration.
//!
//! Flags bind to environment variables so the tool can run unattended in a
//! container. The parsed struct is immutable and passed by value into the
//! generator constructor.

use clap::Parser;
use std::time::Duration;

/// Configuration for the transaction generator.
#[derive(Debug, Clone, Parser)]
#[command(name = "tx-generator", version, about = "Synthetic transaction load generator")]
pub struct GeneratorConfig {
    /// Transaction type to generate repeatedly:
    /// 0 = legacy, 1 = access list, 2 = dynamic fee, 3 = blob.
    #[arg(long, env = "TX_TYPE")]
    pub tx_type: u8,

    /// Hex-encoded private key of the sending account.
    #[arg(long, env = "TX_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: String,

    /// Chain ID to send transactions on.
    #[arg(long, env = "CHAIN_ID")]
    pub chain_id: u64,

    /// JSON-RPC endpoint of the target node.
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: String,

    /// Seconds between transaction submissions.
    #[arg(long, env = "TX_SEND_INTERVAL_SECS", default_value_t = 1)]
    pub send_interval_secs: u64,

    /// RPC request timeout in seconds.
    #[arg(long, env = "RPC_TIMEOUT_SECS", default_value_t = 10)]
    pub rpc_timeout_secs: u64,
}

impl GeneratorConfig {
    /// Interval between submission attempts.
    pub fn send_interval(&self) -> Duration {
        Duration::from_secs(self.send_interval_secs)
    }
}
