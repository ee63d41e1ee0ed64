//! src/crypto/kdf/master.rs
//! Master key — SHA-256(master seed ‖ transformed key)

use crate::aliases::Aes256Key32;
use crate::builders::decrypt_options::DecryptOptions;
use crate::credentials::Credentials;
use crate::crypto::kdf::{composite_key, transform_key};
use crate::error::KdbxError;
use crate::header::KdbxHeader;
use crate::utils::sha256_concat;
use log::debug;

/// Derive the payload key for `header` from `credentials`.
///
/// # Errors
///
/// - [`KdbxError::Format`] if the header asks for more rounds than
///   [`DecryptOptions::max_transform_rounds`] allows
/// - [`KdbxError::Keyfile`] from keyfile parsing
pub fn derive_master_key(
    header: &KdbxHeader,
    credentials: &Credentials,
    options: &DecryptOptions,
) -> Result<Aes256Key32, KdbxError> {
    let limit = options.max_transform_rounds();
    if header.transform_rounds > limit {
        return Err(KdbxError::Format(format!(
            "transform rounds {} exceed the limit of {limit}",
            header.transform_rounds
        )));
    }

    derive_master_key_from_parts(
        &header.master_seed,
        &header.transform_seed,
        header.transform_rounds,
        credentials,
    )
}

/// Same as [`derive_master_key`] without a parsed header or round limit.
///
/// # Errors
///
/// [`KdbxError::Keyfile`] from keyfile parsing.
pub fn derive_master_key_from_parts(
    master_seed: &[u8],
    transform_seed: &[u8; 32],
    rounds: u64,
    credentials: &Credentials,
) -> Result<Aes256Key32, KdbxError> {
    debug!("deriving master key ({rounds} AES-KDF rounds)");

    let composite = composite_key(credentials)?;
    let transformed = transform_key(&composite, transform_seed, rounds);

    Ok(Aes256Key32::new(sha256_concat(&[
        master_seed,
        transformed.expose_secret(),
    ])))
}
