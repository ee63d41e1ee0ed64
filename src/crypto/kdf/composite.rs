//! src/crypto/kdf/composite.rs
//! Composite key — SHA-256(SHA-256(password) ‖ keyfile key)

use crate::aliases::CompositeKey32;
use crate::credentials::Credentials;
use crate::crypto::keyfile::keyfile_key;
use crate::error::KdbxError;
use sha2::{Digest, Sha256};

/// Combine the supplied credentials into the 32-byte composite key.
///
/// Absent components are skipped, so no credentials at all hash the empty string.
///
/// # Errors
///
/// Propagates [`KdbxError::Keyfile`] from keyfile parsing.
pub fn composite_key(credentials: &Credentials) -> Result<CompositeKey32, KdbxError> {
    let mut hasher = Sha256::new();

    if let Some(password) = credentials.expose_password() {
        hasher.update(Sha256::digest(password));
    }

    if let Some(keyfile) = credentials.expose_keyfile() {
        let key = keyfile_key(keyfile)?;
        hasher.update(key.expose_secret());
    }

    Ok(CompositeKey32::new(hasher.finalize().into()))
}
