// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

use crate::consts::HASH_LENGTH;
use sha2::{Digest, Sha256};

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// Used by both CBC directions (payload decryption and the encryptor).
///
/// # Panics (by contract)
///
/// Panics if any of the three slices is shorter than 16 bytes. All callers pass
/// exact AES blocks.
#[inline(always)]
pub const fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < 16 {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}

/// SHA-256 over the concatenation of `parts`, without building the concatenation.
#[inline]
pub fn sha256_concat(parts: &[&[u8]]) -> [u8; HASH_LENGTH] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// SHA-256 of a single buffer.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; HASH_LENGTH] {
    Sha256::digest(data).into()
}

/// `true` if every byte is zero.
#[inline]
pub fn is_all_zero(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| b == 0)
}
