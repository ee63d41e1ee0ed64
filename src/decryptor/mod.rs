// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt(input, output, &credentials)?` for whole containers.
//! Stage functions (`decrypt_payload`, `read_block_stream`, `decompress_payload`)
//! are exported for callers that want to drive the pipeline themselves.

pub(crate) mod blocks;
pub(crate) mod decompress;
pub(crate) mod decrypt;
pub(crate) mod read;
pub(crate) mod stream;

pub use blocks::{read_block_stream, HashedBlock, HashedBlocks};
pub use decompress::decompress_payload;
pub use decrypt::{decrypt, decrypt_container, decrypt_with_options};
pub use read::{read_exact_span, ByteCursor};
pub use stream::{decrypt_cbc, decrypt_payload};
