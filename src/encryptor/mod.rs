// src/encryptor/mod.rs

//! High-level encryption facade.
//!
//! Core API: `encrypt(input, output, &credentials, &options)?` for whole containers.
//! Deterministic variant: `encrypt_with_fixed_seeds` takes a [`ContainerSeeds`].

pub(crate) mod blocks;
pub(crate) mod compress;
#[cfg(feature = "rand")]
pub(crate) mod encrypt;
pub(crate) mod encrypt_fixed_seeds;
pub(crate) mod seeds;
pub(crate) mod stream;
pub(crate) mod write;

pub use blocks::write_block_stream;
pub use compress::compress_payload;
#[cfg(feature = "rand")]
pub use encrypt::encrypt;
pub use encrypt_fixed_seeds::{build_header, encrypt_document, encrypt_with_fixed_seeds};
pub use seeds::ContainerSeeds;
pub use stream::encrypt_stream;
pub use write::{write_field, write_header, write_octets, write_prefix, CANONICAL_FIELD_ORDER};
