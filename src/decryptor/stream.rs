//! src/decryptor/stream.rs
//! Payload decryption — AES-256-CBC, stream-start check, PKCS#7 strip

use crate::aliases::{Aes256Key32, Block16};
use crate::consts::AES_BLOCK_SIZE;
use crate::error::KdbxError;
use crate::header::KdbxHeader;
use crate::utils::xor_blocks;
use aes::cipher::{BlockDecrypt, KeyInit};
use aes::{Aes256Dec, Block as AesBlock};
use log::trace;

const INTEGRITY_FAILURE: &str = "decryption failed: wrong credentials or corrupted container";

/// Decrypt the container body and verify it against the header's stream start bytes.
///
/// Returns the plaintext that follows the start bytes, padding removed. That is the
/// hashed block stream.
///
/// # Errors
///
/// - [`KdbxError::Format`] if `body` is not a whole number of AES blocks
/// - [`KdbxError::Integrity`] if the decrypted prefix does not match the stream start
///   bytes, or the padding is invalid
pub fn decrypt_payload(
    master_key: &Aes256Key32,
    header: &KdbxHeader,
    body: &[u8],
) -> Result<Vec<u8>, KdbxError> {
    if body.len() % AES_BLOCK_SIZE != 0 {
        return Err(KdbxError::Format(format!(
            "encrypted payload length {} is not a multiple of {AES_BLOCK_SIZE}",
            body.len()
        )));
    }

    let plaintext = decrypt_cbc(master_key, &header.encryption_iv, body);
    let stream = split_block_stream(plaintext, &header.stream_start_bytes)?;
    trace!("payload decrypted: {} bytes of block stream", stream.len());
    Ok(stream)
}

/// Check and remove the start bytes, then strip padding from what follows them.
fn split_block_stream(mut plaintext: Vec<u8>, start: &[u8]) -> Result<Vec<u8>, KdbxError> {
    if plaintext.get(..start.len()) != Some(start) {
        return Err(KdbxError::Integrity(INTEGRITY_FAILURE.into()));
    }

    // Padding lives in the last block after the start bytes, never inside them.
    let mut stream = plaintext.split_off(start.len());
    strip_padding(&mut stream)?;
    Ok(stream)
}

/// Raw AES-256-CBC over whole blocks. No padding handling.
#[inline(always)]
pub fn decrypt_cbc(key: &Aes256Key32, iv: &[u8; 16], ciphertext: &[u8]) -> Vec<u8> {
    let cipher = Aes256Dec::new(key.expose_secret().into());
    let mut plaintext = Vec::with_capacity(ciphertext.len());
    let mut previous: &[u8] = iv;
    let mut plaintext_block = Block16::new([0u8; 16]);

    for chunk in ciphertext.chunks_exact(AES_BLOCK_SIZE) {
        let mut aes_block = AesBlock::clone_from_slice(chunk);
        cipher.decrypt_block(&mut aes_block);
        xor_blocks(
            aes_block.as_slice(),
            previous,
            plaintext_block.expose_secret_mut(),
        );
        plaintext.extend_from_slice(plaintext_block.expose_secret());
        previous = chunk;
    }

    plaintext
}

/// Remove PKCS#7 padding in place.
fn strip_padding(plaintext: &mut Vec<u8>) -> Result<(), KdbxError> {
    let pad = plaintext.last().copied().map_or(0, usize::from);
    let valid = (1..=AES_BLOCK_SIZE).contains(&pad)
        && pad <= plaintext.len()
        && plaintext[plaintext.len() - pad..]
            .iter()
            .all(|&b| usize::from(b) == pad);

    if !valid {
        return Err(KdbxError::Integrity(format!(
            "{INTEGRITY_FAILURE} (invalid padding)"
        )));
    }
    plaintext.truncate(plaintext.len() - pad);
    Ok(())
}
