//! src/decryptor/decrypt.rs
//! KDBX 3.x decryption pipeline

use crate::builders::decrypt_options::DecryptOptions;
use crate::credentials::Credentials;
use crate::crypto::kdf::derive_master_key;
use crate::decryptor::blocks::read_block_stream;
use crate::decryptor::decompress::decompress_payload;
use crate::decryptor::stream::decrypt_payload;
use crate::error::KdbxError;
use crate::header::parse_header;
use log::debug;
use std::io::{Read, Write};

/// Decrypt an in-memory container and return the inner XML document.
///
/// Stages: header → master key → payload → hashed blocks → decompression.
///
/// # Errors
///
/// Whatever the failing stage reports; see [`KdbxError`].
pub fn decrypt_container(
    container: &[u8],
    credentials: &Credentials,
    options: &DecryptOptions,
) -> Result<Vec<u8>, KdbxError> {
    let (header, body_offset) = parse_header(container, options)?;
    let body = container.get(body_offset..).unwrap_or_default();

    let master_key = derive_master_key(&header, credentials, options)?;
    let stream = decrypt_payload(&master_key, &header, body)?;
    let payload = read_block_stream(&stream, options)?;
    let document = decompress_payload(payload, header.compression)?;

    debug!("decrypted container: {} document bytes", document.len());
    Ok(document)
}

/// Decrypt a KDBX 3.x container with default [`DecryptOptions`].
///
/// Reads `input` to the end. Nothing is written to `output` unless every stage succeeds.
///
/// ```no_run
/// use kdbx3_rs::{decrypt, Credentials};
/// use std::fs::File;
///
/// let credentials = Credentials::new().with_password("FooBar");
/// let input = File::open("passwords.kdbx")?;
/// let mut document = Vec::new();
/// decrypt(input, &mut document, &credentials)?;
/// # Ok::<(), kdbx3_rs::KdbxError>(())
/// ```
#[inline(always)]
pub fn decrypt<R: Read, W: Write>(
    input: R,
    output: W,
    credentials: &Credentials,
) -> Result<(), KdbxError> {
    decrypt_with_options(input, output, credentials, &DecryptOptions::default())
}

/// [`decrypt`] with explicit options.
pub fn decrypt_with_options<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    credentials: &Credentials,
    options: &DecryptOptions,
) -> Result<(), KdbxError> {
    let mut container = Vec::new();
    input.read_to_end(&mut container)?;

    let document = decrypt_container(&container, credentials, options)?;
    output.write_all(&document)?;
    output.flush()?;
    Ok(())
}
