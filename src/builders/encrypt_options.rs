//! src/builders/encrypt_options.rs
//! Container writer settings

use crate::consts::{
    DEFAULT_BLOCK_SIZE, DEFAULT_MAX_TRANSFORM_ROUNDS, DEFAULT_TRANSFORM_ROUNDS,
    MIN_TRANSFORM_ROUNDS,
};
use crate::error::KdbxError;
use crate::header::Compression;

/// Settings for writing a container.
///
/// Defaults: [`DEFAULT_TRANSFORM_ROUNDS`] rounds, gzip compression,
/// [`DEFAULT_BLOCK_SIZE`]-byte hashed blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncryptOptions {
    transform_rounds: u64,
    compression: Compression,
    block_size: usize,
}

impl EncryptOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            transform_rounds: DEFAULT_TRANSFORM_ROUNDS,
            compression: Compression::Gzip,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }

    /// Transform rounds written to the header. Checked by [`validate`](Self::validate).
    #[must_use]
    pub const fn with_transform_rounds(mut self, rounds: u64) -> Self {
        self.transform_rounds = rounds;
        self
    }

    #[must_use]
    pub const fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Maximum data bytes per hashed block (minimum 1).
    #[must_use]
    pub const fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = if block_size == 0 { 1 } else { block_size };
        self
    }

    #[must_use]
    pub const fn transform_rounds(&self) -> u64 {
        self.transform_rounds
    }

    #[must_use]
    pub const fn compression(&self) -> Compression {
        self.compression
    }

    #[must_use]
    pub const fn block_size(&self) -> usize {
        self.block_size
    }

    /// Reject settings the decryptor would refuse with its default options.
    pub fn validate(&self) -> Result<(), KdbxError> {
        if !(MIN_TRANSFORM_ROUNDS..=DEFAULT_MAX_TRANSFORM_ROUNDS).contains(&self.transform_rounds) {
            return Err(KdbxError::Crypto(format!(
                "invalid transform rounds: {} (expected {MIN_TRANSFORM_ROUNDS}..={DEFAULT_MAX_TRANSFORM_ROUNDS})",
                self.transform_rounds
            )));
        }
        Ok(())
    }
}

impl Default for EncryptOptions {
    fn default() -> Self {
        Self::new()
    }
}
