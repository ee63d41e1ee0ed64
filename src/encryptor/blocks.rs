//! src/encryptor/blocks.rs
//! Hashed block stream writer

use crate::consts::HASH_LENGTH;
use crate::utils::sha256;

/// Split `payload` into blocks of at most `block_size` bytes, append each with its
/// index and SHA-256, then append the terminator.
///
/// An empty payload produces only the terminator (index 0).
pub fn write_block_stream(payload: &[u8], block_size: usize, out: &mut Vec<u8>) {
    let block_size = block_size.max(1);
    let mut index: u32 = 0;

    for chunk in payload.chunks(block_size) {
        write_block(out, index, &sha256(chunk), chunk);
        index = index.wrapping_add(1);
    }
    write_block(out, index, &[0u8; HASH_LENGTH], &[]);
}

fn write_block(out: &mut Vec<u8>, index: u32, hash: &[u8; HASH_LENGTH], data: &[u8]) {
    out.extend_from_slice(&index.to_le_bytes());
    out.extend_from_slice(hash);
    out.extend_from_slice(&(data.len() as u32).to_le_bytes());
    out.extend_from_slice(data);
}
