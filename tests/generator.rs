//! Driver behavior tests against a mock chain client.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use alloy::consensus::TxEnvelope;
use alloy::eips::eip2718::Decodable2718;
use alloy::primitives::{Address, Bytes, TxHash, TxKind, U256};
use async_trait::async_trait;

use tx_generator::{
    BlockchainError, BlockchainResult, ChainClient, GeneratorConfig, TxGenerator, Wallet,
};
use tokio_util::sync::CancellationToken;

// Anvil's first account
const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
const CHAIN_ID: u64 = 31337;

/// Mock chain client that records calls and optionally rejects submissions.
struct MockChainClient {
    nonce: u64,
    fail_submissions: bool,
    nonce_calls: AtomicU64,
    submissions: AtomicU64,
    last_raw: Mutex<Option<Bytes>>,
}

impl MockChainClient {
    fn new(nonce: u64, fail_submissions: bool) -> Self {
        Self {
            nonce,
            fail_submissions,
            nonce_calls: AtomicU64::new(0),
            submissions: AtomicU64::new(0),
            last_raw: Mutex::new(None),
        }
    }
}

#[async_trait]
impl ChainClient for MockChainClient {
    async fn nonce_at(&self, _address: Address) -> BlockchainResult<u64> {
        self.nonce_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.nonce)
    }

    async fn send_raw_transaction(&self, raw: Bytes) -> BlockchainResult<TxHash> {
        self.submissions.fetch_add(1, Ordering::SeqCst);
        if self.fail_submissions {
            return Err(BlockchainError::Submission("node rejected tx".into()));
        }
        *self.last_raw.lock().unwrap() = Some(raw);
        Ok(TxHash::ZERO)
    }
}

fn test_config(tx_type: u8) -> GeneratorConfig {
    GeneratorConfig {
        tx_type,
        private_key: TEST_PRIVATE_KEY.to_string(),
        chain_id: CHAIN_ID,
        rpc_url: "http://localhost:8545".to_string(),
        send_interval_secs: 1,
        rpc_timeout_secs: 5,
    }
}

#[tokio::test(start_paused = true)]
async fn test_submission_failure_does_not_stop_loop() {
    let config = test_config(0);
    let wallet = Wallet::from_private_key(&config.private_key, config.chain_id).unwrap();
    let client = Arc::new(MockChainClient::new(0, true));

    let mut generator = TxGenerator::new(&config, wallet, client.clone());
    let cancel = CancellationToken::new();
    generator.start(&cancel);

    // First tick fires immediately, then once per interval
    tokio::time::sleep(Duration::from_millis(3500)).await;
    generator.stop().await;

    let attempts = client.submissions.load(Ordering::SeqCst);
    assert!(
        attempts >= 3,
        "loop should keep attempting after failures, got {} attempts",
        attempts
    );
    // Every attempt fetched a fresh nonce
    assert_eq!(client.nonce_calls.load(Ordering::SeqCst), attempts);
}

#[tokio::test(start_paused = true)]
async fn test_stop_halts_submissions() {
    let config = test_config(0);
    let wallet = Wallet::from_private_key(&config.private_key, config.chain_id).unwrap();
    let client = Arc::new(MockChainClient::new(0, false));

    let mut generator = TxGenerator::new(&config, wallet, client.clone());
    let cancel = CancellationToken::new();
    generator.start(&cancel);

    tokio::time::sleep(Duration::from_millis(500)).await;
    generator.stop().await;

    let submitted = client.submissions.load(Ordering::SeqCst);
    assert!(submitted >= 1, "first iteration should fire immediately");

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(
        client.submissions.load(Ordering::SeqCst),
        submitted,
        "no submissions after stop"
    );
}

#[tokio::test(start_paused = true)]
async fn test_parent_cancellation_stops_loop() {
    let config = test_config(0);
    let wallet = Wallet::from_private_key(&config.private_key, config.chain_id).unwrap();
    let client = Arc::new(MockChainClient::new(0, false));

    let mut generator = TxGenerator::new(&config, wallet, client.clone());
    let cancel = CancellationToken::new();
    generator.start(&cancel);

    tokio::time::sleep(Duration::from_millis(500)).await;
    cancel.cancel();
    tokio::time::sleep(Duration::from_secs(3)).await;

    let submitted = client.submissions.load(Ordering::SeqCst);
    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(client.submissions.load(Ordering::SeqCst), submitted);

    generator.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_submitted_legacy_tx_carries_chain_nonce() {
    let config = test_config(0);
    let wallet = Wallet::from_private_key(&config.private_key, config.chain_id).unwrap();
    let client = Arc::new(MockChainClient::new(5, false));

    let mut generator = TxGenerator::new(&config, wallet, client.clone());
    let cancel = CancellationToken::new();
    generator.start(&cancel);

    tokio::time::sleep(Duration::from_millis(500)).await;
    generator.stop().await;

    let raw = client
        .last_raw
        .lock()
        .unwrap()
        .clone()
        .expect("a transaction should have been submitted");

    let envelope = TxEnvelope::decode_2718(&mut raw.as_ref()).unwrap();
    let TxEnvelope::Legacy(signed) = envelope else {
        panic!("expected a legacy transaction");
    };
    let tx = signed.tx();
    assert_eq!(tx.nonce, 5);
    assert_eq!(tx.gas_limit, 21_000);
    assert_eq!(tx.to, TxKind::Call(Address::ZERO));
    assert_eq!(tx.value, U256::from(1));
}

#[tokio::test(start_paused = true)]
async fn test_unsupported_tx_type_is_logged_not_fatal() {
    let config = test_config(9);
    let wallet = Wallet::from_private_key(&config.private_key, config.chain_id).unwrap();
    let client = Arc::new(MockChainClient::new(0, false));

    let mut generator = TxGenerator::new(&config, wallet, client.clone());
    let cancel = CancellationToken::new();
    generator.start(&cancel);

    tokio::time::sleep(Duration::from_millis(2500)).await;
    generator.stop().await;

    // Builder rejects the selector each tick; nothing reaches submission but
    // the loop keeps running and fetching nonces.
    assert_eq!(client.submissions.load(Ordering::SeqCst), 0);
    assert!(client.nonce_calls.load(Ordering::SeqCst) >= 2);
}
