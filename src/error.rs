//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T, KdbxError>`](KdbxError).
//!
//! The taxonomy separates "not a valid container" ([`KdbxError::Format`]) from
//! "wrong credentials or tampered container" ([`KdbxError::Integrity`]) so callers
//! can present the two differently.

use thiserror::Error;

/// The error type for all KDBX operations.
#[derive(Error, Debug)]
pub enum KdbxError {
    /// I/O error while reading the container or writing the document.
    ///
    /// Only the streaming facades ([`decrypt`](crate::decrypt), [`encrypt`](crate::encrypt))
    /// touch I/O; the in-memory pipeline never produces this variant.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or truncated binary structure.
    ///
    /// Bad signature, unsupported version or cipher, unknown or duplicate header
    /// field, length overruns, an invalid gzip stream, or a transform round count
    /// above the configured ceiling.
    #[error("Format error: {0}")]
    Format(String),

    /// Keyfile bytes were supplied but cannot be turned into a key.
    #[error("Keyfile error: {0}")]
    Keyfile(String),

    /// Decrypted data failed verification.
    ///
    /// Raised on a stream-start mismatch, a block hash mismatch, bad padding, or
    /// (in strict mode) an out-of-order block index. Almost always means wrong
    /// credentials or a corrupted container.
    #[error("Integrity error: {0}")]
    Integrity(String),

    /// Writer-side failure: invalid encryption options or the OS RNG failing.
    #[error("Crypto error: {0}")]
    Crypto(String),
}

impl KdbxError {
    /// `true` when the container parsed but the credentials (or the data) did not verify.
    #[must_use]
    pub const fn is_integrity(&self) -> bool {
        matches!(self, Self::Integrity(_))
    }

    /// `true` when the input is not a well-formed container.
    #[must_use]
    pub const fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, KdbxError>;
