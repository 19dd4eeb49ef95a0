//! Periodic transaction generator.
//!
//! Owns the ticking loop: on each tick it fetches the account nonce, builds
//! the configured payload variant, signs it, and submits it through the chain
//! client. Per-tick failures are logged and never stop the loop; only
//! cancellation does.

use alloy::eips::eip2718::Encodable2718;
use alloy::primitives::{Bytes, TxHash};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::blockchain::{BlockchainResult, ChainClient, Wallet};
use crate::config::GeneratorConfig;
use crate::tx::build_payload;

/// Periodic driver for transaction generation.
///
/// Constructed idle; [`TxGenerator::start`] spawns the loop task and
/// [`TxGenerator::stop`] cancels it and waits for it to finish. A generator
/// is started at most once.
pub struct TxGenerator {
    wallet: Wallet,
    client: Arc<dyn ChainClient>,
    tx_type: u8,
    send_interval: Duration,
    cancel: Option<CancellationToken>,
    handle: Option<JoinHandle<()>>,
}

impl TxGenerator {
    /// Create an idle generator.
    pub fn new(config: &GeneratorConfig, wallet: Wallet, client: Arc<dyn ChainClient>) -> Self {
        Self {
            wallet,
            client,
            tx_type: config.tx_type,
            send_interval: config.send_interval(),
            cancel: None,
            handle: None,
        }
    }

    /// Start the generation loop on its own task.
    ///
    /// The loop runs until `parent` (or the token derived from it) is
    /// cancelled. The first iteration fires immediately.
    pub fn start(&mut self, parent: &CancellationToken) {
        if self.handle.is_some() {
            tracing::warn!("Generator already started, ignoring");
            return;
        }

        let cancel = parent.child_token();
        let wallet = self.wallet.clone();
        let client = self.client.clone();
        let tx_type = self.tx_type;
        let send_interval = self.send_interval;

        let loop_cancel = cancel.clone();
        let handle = tokio::spawn(async move {
            run_loop(wallet, client, tx_type, send_interval, loop_cancel).await;
        });

        self.cancel = Some(cancel);
        self.handle = Some(handle);
    }

    /// Cancel the loop and wait for the in-flight iteration, if any, to
    /// complete.
    pub async fn stop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

/// The generation loop. Cancellation is observed at the iteration boundary
/// only; once a cycle starts it runs to completion.
async fn run_loop(
    wallet: Wallet,
    client: Arc<dyn ChainClient>,
    tx_type: u8,
    send_interval: Duration,
    cancel: CancellationToken,
) {
    let mut ticker = tokio::time::interval(send_interval);

    tracing::info!(
        tx_type,
        interval_secs = send_interval.as_secs_f64(),
        "Transaction generator started"
    );

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Stopping transaction generator");
                return;
            }
            _ = ticker.tick() => {
                match generate_and_send(&wallet, client.as_ref(), tx_type).await {
                    Ok(tx_hash) => {
                        tracing::info!(%tx_hash, "Transaction submitted");
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to generate transaction");
                    }
                }
            }
        }
    }
}

/// One build-sign-send cycle.
async fn generate_and_send(
    wallet: &Wallet,
    client: &dyn ChainClient,
    tx_type: u8,
) -> BlockchainResult<TxHash> {
    let nonce = client.nonce_at(wallet.address()).await?;
    let tx = build_payload(tx_type, nonce, wallet.chain_id())?;

    let signed = wallet.sign_transaction(tx)?;
    let tx_hash = *signed.hash();
    tracing::debug!(%tx_hash, nonce, "Signed transaction");

    let raw: Bytes = signed.encoded_2718().into();
    client.send_raw_transaction(raw).await
}
