//! Transaction payload construction.

pub mod blob;
pub mod builder;

pub use blob::commitment_to_versioned_hash;
pub use builder::{build_payload, TypedTransaction};
