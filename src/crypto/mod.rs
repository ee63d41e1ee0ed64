// src/crypto/mod.rs

//! Low-level crypto primitives: keyfile handling, key derivation, OS randomness.
//!
//! See crate root for re-exports (e.g., [`crate::derive_master_key`]).

pub mod kdf;
pub mod keyfile;
#[cfg(feature = "rand")]
pub mod rng;
