// src/crypto/rng.rs
//! OS randomness for container seeds

use crate::error::KdbxError;
use rand::{rngs::OsRng, TryRngCore};

/// Fill a fresh `N`-byte array from the operating system RNG.
///
/// # Errors
///
/// [`KdbxError::Crypto`] if the OS RNG is unavailable.
#[inline]
pub fn random_bytes<const N: usize>() -> Result<[u8; N], KdbxError> {
    let mut bytes = [0u8; N];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| KdbxError::Crypto(format!("OS random number generator failed: {e}")))?;
    Ok(bytes)
}
