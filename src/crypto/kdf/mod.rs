//! src/crypto/kdf/mod.rs
//! Key derivation chain: credentials → composite key → AES-KDF → master key

pub mod aes_kdf;
pub mod composite;
pub mod master;

pub use aes_kdf::transform_key;
pub use composite::composite_key;
pub use master::{derive_master_key, derive_master_key_from_parts};
