//! Process entry point: configuration, wiring, and lifecycle.

use clap::Parser;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tx_generator::{GeneratorConfig, RpcChainClient, TxGenerator, Wallet};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tx_generator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("tx-generator v{} starting", env!("CARGO_PKG_VERSION"));

    let config = GeneratorConfig::parse();

    tracing::info!(
        tx_type = config.tx_type,
        chain_id = config.chain_id,
        rpc_url = %config.rpc_url,
        send_interval_secs = config.send_interval_secs,
        "Configuration loaded"
    );

    // Configuration errors are fatal: a malformed key, a malformed URL, or an
    // endpoint on the wrong chain prevents startup.
    let wallet = Wallet::from_private_key(&config.private_key, config.chain_id)?;
    let client = RpcChainClient::new(&config.rpc_url, config.chain_id, config.rpc_timeout_secs)?;
    client.verify_chain_id().await?;

    let mut generator = TxGenerator::new(&config, wallet, Arc::new(client));

    let cancel = CancellationToken::new();
    generator.start(&cancel);

    tokio::signal::ctrl_c().await?;
    tracing::info!("Interrupt received, shutting down");
    generator.stop().await;

    tracing::info!("Shutdown complete");
    Ok(())
}
