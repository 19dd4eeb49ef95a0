//! Blob sidecar construction and versioned-hash derivation for EIP-4844
//! payloads.

use alloy::consensus::BlobTransactionSidecar;
use alloy::eips::eip4844::{env_settings::EnvKzgSettings, Blob, VERSIONED_HASH_VERSION_KZG};
use alloy::primitives::{FixedBytes, B256};
use sha2::{Digest, Sha256};

use crate::blockchain::types::BlockchainResult;

/// Fixed placeholder written into the front of the blob buffer. The rest of
/// the blob stays zeroed, which keeps every field element canonical.
const BLOB_PLACEHOLDER: &[u8] = b"hello blob";

/// Derive the versioned hash for a KZG commitment.
///
/// The first byte is the KZG version marker; the remaining bytes are the
/// SHA-256 digest of the commitment with its own leading byte dropped.
/// Deterministic, no failure path.
pub fn commitment_to_versioned_hash(commitment: &FixedBytes<48>) -> B256 {
    let digest = Sha256::digest(commitment.as_slice());
    let mut hash = B256::from_slice(digest.as_slice());
    hash[0] = VERSIONED_HASH_VERSION_KZG;
    hash
}

/// Build the deterministic single-blob sidecar used by the blob payload
/// variant: one blob carrying [`BLOB_PLACEHOLDER`], its commitment, and its
/// proof, computed against the embedded trusted setup.
pub fn placeholder_sidecar() -> BlockchainResult<BlobTransactionSidecar> {
    let mut blob = Blob::ZERO;
    blob[..BLOB_PLACEHOLDER.len()].copy_from_slice(BLOB_PLACEHOLDER);

    let settings = EnvKzgSettings::Default;
    let kzg_blob = c_kzg::Blob::from_bytes(blob.as_slice())?;
    let commitment = settings
        .get()
        .blob_to_kzg_commitment(&kzg_blob)
        .map(|c| c.to_bytes())?;
    let proof = settings
        .get()
        .compute_blob_kzg_proof(&kzg_blob, &commitment)
        .map(|p| p.to_bytes())?;

    Ok(BlobTransactionSidecar::new(
        vec![blob],
        vec![FixedBytes::from(*commitment)],
        vec![FixedBytes::from(*proof)],
    ))
}
