//! Payload construction for each supported transaction type.
//!
//! Every monetary field is a fixed constant; the only inputs are the type
//! selector, the freshly fetched nonce, and the chain id. All payloads call
//! the zero address with a value of one wei.

use alloy::consensus::{
    EthereumTypedTransaction, TxEip1559, TxEip2930, TxEip4844, TxEip4844Variant,
    TxEip4844WithSidecar, TxLegacy,
};
use alloy::eips::eip2930::{AccessList, AccessListItem};
use alloy::eips::eip4844::BlobTransactionSidecar;
use alloy::primitives::{Address, Bytes, TxKind, B256, U256};

use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::tx::blob;

/// Gas price for the legacy and access-list variants, in wei.
const GAS_PRICE: u128 = 0x600f1f;
/// Gas limit for plain value transfers.
const TRANSFER_GAS_LIMIT: u64 = 21_000;
/// Gas limit for the variants carrying an access list.
const ACCESS_LIST_GAS_LIMIT: u64 = 30_000;
/// Fee cap and tip cap for the dynamic-fee and blob variants, in wei.
const MAX_FEE_PER_GAS: u128 = 1_000_000_005;
/// Blob gas fee cap for the blob variant, in wei.
const MAX_FEE_PER_BLOB_GAS: u128 = 20_000_000_000;

/// Typed transaction carrying a plain EIP-4844 blob sidecar.
pub type TypedTransaction = EthereumTypedTransaction<TxEip4844Variant<BlobTransactionSidecar>>;

/// Build the payload for the given transaction type selector.
///
/// * 0 → legacy
/// * 1 → access list (EIP-2930)
/// * 2 → dynamic fee (EIP-1559)
/// * 3 → blob (EIP-4844) with a single-blob sidecar
///
/// Any other selector is rejected with
/// [`BlockchainError::UnsupportedTxType`].
pub fn build_payload(
    tx_type: u8,
    nonce: u64,
    chain_id: u64,
) -> BlockchainResult<TypedTransaction> {
    match tx_type {
        0 => Ok(TypedTransaction::Legacy(TxLegacy {
            chain_id: Some(chain_id),
            nonce,
            gas_price: GAS_PRICE,
            gas_limit: TRANSFER_GAS_LIMIT,
            to: TxKind::Call(Address::ZERO),
            value: U256::from(1),
            input: Bytes::new(),
        })),
        1 => Ok(TypedTransaction::Eip2930(TxEip2930 {
            chain_id,
            nonce,
            gas_price: GAS_PRICE,
            gas_limit: ACCESS_LIST_GAS_LIMIT,
            to: TxKind::Call(Address::ZERO),
            value: U256::from(1),
            access_list: zero_access_list(),
            input: Bytes::new(),
        })),
        2 => Ok(TypedTransaction::Eip1559(TxEip1559 {
            chain_id,
            nonce,
            gas_limit: ACCESS_LIST_GAS_LIMIT,
            max_fee_per_gas: MAX_FEE_PER_GAS,
            max_priority_fee_per_gas: MAX_FEE_PER_GAS,
            to: TxKind::Call(Address::ZERO),
            value: U256::from(1),
            access_list: zero_access_list(),
            input: Bytes::new(),
        })),
        3 => {
            let sidecar = blob::placeholder_sidecar()?;
            let versioned_hash = blob::commitment_to_versioned_hash(&sidecar.commitments[0]);
            let tx = TxEip4844 {
                chain_id,
                nonce,
                gas_limit: TRANSFER_GAS_LIMIT,
                max_fee_per_gas: MAX_FEE_PER_GAS,
                max_priority_fee_per_gas: MAX_FEE_PER_GAS,
                to: Address::ZERO,
                value: U256::from(1),
                access_list: AccessList::default(),
                blob_versioned_hashes: vec![versioned_hash],
                max_fee_per_blob_gas: MAX_FEE_PER_BLOB_GAS,
                input: Bytes::new(),
            };
            Ok(TypedTransaction::Eip4844(
                TxEip4844Variant::TxEip4844WithSidecar(TxEip4844WithSidecar::from_tx_and_sidecar(
                    tx, sidecar,
                )),
            ))
        }
        other => Err(BlockchainError::UnsupportedTxType(other)),
    }
}

/// One-entry access list: the zero address with one zero storage key.
fn zero_access_list() -> AccessList {
    AccessList(vec![AccessListItem {
        address: Address::ZERO,
        storage_keys: vec![B256::ZERO],
    }])
}
