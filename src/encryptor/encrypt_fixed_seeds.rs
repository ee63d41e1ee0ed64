//! src/encryptor/encrypt_fixed_seeds.rs
//! Deterministic KDBX 3.1 encryption with caller-supplied seeds (for testing/fuzzing)

use crate::builders::decrypt_options::DecryptOptions;
use crate::builders::encrypt_options::EncryptOptions;
use crate::consts::{KDBX_SUPPORTED_MAJOR_VERSION, KDBX_WRITTEN_MINOR_VERSION};
use crate::credentials::Credentials;
use crate::crypto::kdf::derive_master_key;
use crate::encryptor::blocks::write_block_stream;
use crate::encryptor::compress::compress_payload;
use crate::encryptor::seeds::ContainerSeeds;
use crate::encryptor::stream::encrypt_stream;
use crate::encryptor::write::{write_header, CANONICAL_FIELD_ORDER};
use crate::error::KdbxError;
use crate::header::{FormatVersion, InnerStreamId, KdbxHeader, OuterCipher};
use log::debug;
use std::io::{Read, Write};

/// Header the encryptor writes for `options` and `seeds`.
///
/// KDBX 3.1, AES-256, no comment field. The inner random stream id is Salsa20 as
/// KeePass writes it; protecting values inside the document is up to the caller.
#[must_use]
pub fn build_header(options: &EncryptOptions, seeds: &ContainerSeeds) -> KdbxHeader {
    KdbxHeader {
        version: FormatVersion {
            minor: KDBX_WRITTEN_MINOR_VERSION,
            major: KDBX_SUPPORTED_MAJOR_VERSION,
        },
        cipher: OuterCipher::Aes256,
        compression: options.compression(),
        master_seed: seeds.master_seed.to_vec(),
        transform_seed: seeds.transform_seed,
        transform_rounds: options.transform_rounds(),
        encryption_iv: seeds.encryption_iv,
        stream_start_bytes: seeds.stream_start_bytes,
        protected_stream_key: Some(seeds.protected_stream_key.to_vec()),
        inner_random_stream: Some(InnerStreamId::Salsa20),
        comment: None,
        field_order: CANONICAL_FIELD_ORDER.to_vec(),
    }
}

/// Encrypt an in-memory document into a complete container.
///
/// # Errors
///
/// - [`KdbxError::Crypto`] for empty credentials or invalid options
/// - [`KdbxError::Keyfile`] if the keyfile cannot be parsed
pub fn encrypt_document(
    document: &[u8],
    credentials: &Credentials,
    options: &EncryptOptions,
    seeds: &ContainerSeeds,
) -> Result<Vec<u8>, KdbxError> {
    if credentials.is_empty() {
        return Err(KdbxError::Crypto("no password or keyfile supplied".into()));
    }
    options.validate()?;

    let header = build_header(options, seeds);
    let master_key = derive_master_key(&header, credentials, &DecryptOptions::default())?;

    let payload = compress_payload(document, header.compression)?;
    let mut plaintext = Vec::with_capacity(payload.len() + payload.len() / 16 + 128);
    plaintext.extend_from_slice(&header.stream_start_bytes);
    write_block_stream(&payload, options.block_size(), &mut plaintext);

    let mut container = Vec::with_capacity(plaintext.len() + 256);
    write_header(&mut container, &header)?;
    encrypt_stream(plaintext.as_slice(), &mut container, &header.encryption_iv, &master_key)?;

    debug!(
        "encrypted {} document bytes into a {}-byte container",
        document.len(),
        container.len()
    );
    Ok(container)
}

/// Encrypt `input` → KDBX 3.1 container with **fixed** seeds.
///
/// Same output for the same inputs; intended for test vectors and fuzzing.
#[inline(always)]
pub fn encrypt_with_fixed_seeds<R, W>(
    mut input: R,
    mut output: W,
    credentials: &Credentials,
    options: &EncryptOptions,
    seeds: &ContainerSeeds,
) -> Result<(), KdbxError>
where
    R: Read,
    W: Write,
{
    let mut document = Vec::new();
    input.read_to_end(&mut document)?;

    let container = encrypt_document(&document, credentials, options, seeds)?;
    output.write_all(&container)?;
    output.flush()?;
    Ok(())
}
