//! src/encryptor/stream.rs
//! AES-256-CBC with PKCS#7 padding, streaming block by block

use crate::aliases::{Aes256Key32, Block16};
use crate::consts::AES_BLOCK_SIZE;
use crate::error::KdbxError;
use crate::utils::xor_blocks;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256Enc, Block as AesBlock};
use std::io::{ErrorKind, Read, Write};

/// Fill `block` from `source`, returning how many bytes were read (< 16 only at EOF).
fn read_block<R: Read>(source: &mut R, block: &mut [u8]) -> Result<usize, KdbxError> {
    let mut filled = 0;
    while filled < block.len() {
        match source.read(&mut block[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(KdbxError::Io(e)),
        }
    }
    Ok(filled)
}

/// Encrypt everything in `source` to `destination`.
///
/// Always emits at least one block; a final short (or empty) block carries the padding.
#[inline(always)]
pub fn encrypt_stream<R, W>(
    mut source: R,
    mut destination: W,
    iv: &[u8; 16],
    key: &Aes256Key32,
) -> Result<(), KdbxError>
where
    R: Read,
    W: Write,
{
    let cipher = Aes256Enc::new(key.expose_secret().into());

    // previous ciphertext block
    let mut prev_block: [u8; 16] = *iv;
    let mut plaintext_block = Block16::new([0u8; 16]);
    let mut xor_output = Block16::new([0u8; 16]);

    loop {
        let n = read_block(&mut source, plaintext_block.expose_secret_mut())?;

        let is_final = n < AES_BLOCK_SIZE;
        if is_final {
            let pad = (AES_BLOCK_SIZE - n) as u8;
            plaintext_block.expose_secret_mut()[n..].fill(pad);
        }

        xor_blocks(
            plaintext_block.expose_secret(),
            &prev_block,
            xor_output.expose_secret_mut(),
        );

        let mut aes_block = AesBlock::from(*xor_output.expose_secret());
        cipher.encrypt_block(&mut aes_block);
        prev_block.copy_from_slice(aes_block.as_slice());
        destination.write_all(&prev_block)?;

        if is_final {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decryptor::decrypt_cbc;

    #[test]
    fn pads_to_whole_blocks() {
        let key = Aes256Key32::new([9u8; 32]);
        for len in [0usize, 1, 15, 16, 17, 48] {
            let mut out = Vec::new();
            encrypt_stream(&vec![0x61u8; len][..], &mut out, &[3u8; 16], &key).unwrap();
            assert_eq!(out.len(), (len / 16 + 1) * 16, "len {len}");
        }
    }

    #[test]
    fn cbc_inverts() {
        let key = Aes256Key32::new([9u8; 32]);
        let iv = [3u8; 16];
        let data: Vec<u8> = (0u8..40).collect();
        let mut out = Vec::new();
        encrypt_stream(data.as_slice(), &mut out, &iv, &key).unwrap();

        let plain = decrypt_cbc(&key, &iv, &out);
        assert_eq!(&plain[..40], data.as_slice());
        assert_eq!(&plain[40..], &[8u8; 8]);
    }
}
