//! src/crypto/kdf/aes_kdf.rs
//! AES-KDF — repeated AES-256-ECB over the composite key, zero-allocation

use crate::aliases::{CompositeKey32, TransformedKey32};
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256Enc, Block as AesBlock};
use sha2::{Digest, Sha256};

/// Transform the composite key with `rounds` AES-256-ECB passes.
///
/// - key: the 32-byte transform seed
/// - both 16-byte halves of the composite key are encrypted every round
/// - result is SHA-256 of the final 32 bytes
///
/// Zero rounds is legal here and just hashes the composite key; callers enforce
/// their own bounds.
#[inline(always)]
pub fn transform_key(
    composite: &CompositeKey32,
    transform_seed: &[u8; 32],
    rounds: u64,
) -> TransformedKey32 {
    let cipher = Aes256Enc::new(transform_seed.into());

    let key = composite.expose_secret();
    let mut blocks = [
        AesBlock::clone_from_slice(&key[..16]),
        AesBlock::clone_from_slice(&key[16..]),
    ];

    for _ in 0..rounds {
        cipher.encrypt_blocks(&mut blocks);
    }

    let mut hasher = Sha256::new();
    hasher.update(blocks[0]);
    hasher.update(blocks[1]);
    let transformed = TransformedKey32::new(hasher.finalize().into());

    for block in &mut blocks {
        block.fill(0);
    }
    transformed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::sha256;

    #[test]
    fn zero_rounds_is_plain_hash() {
        let composite = CompositeKey32::new([0x42; 32]);
        let transformed = transform_key(&composite, &[0u8; 32], 0);
        assert_eq!(transformed.expose_secret(), &sha256(&[0x42; 32]));
    }

    #[test]
    fn rounds_change_the_result() {
        let composite = CompositeKey32::new([0x42; 32]);
        let one = transform_key(&composite, &[0u8; 32], 1);
        let two = transform_key(&composite, &[0u8; 32], 2);
        assert_ne!(one.expose_secret(), two.expose_secret());
    }

    #[test]
    fn seed_changes_the_result() {
        let composite = CompositeKey32::new([0x42; 32]);
        let a = transform_key(&composite, &[0u8; 32], 10);
        let b = transform_key(&composite, &[1u8; 32], 10);
        assert_ne!(a.expose_secret(), b.expose_secret());
    }
}
