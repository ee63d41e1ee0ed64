//! src/encryptor/seeds.rs
//! Per-container random values written into the header

use crate::consts::STREAM_START_LENGTH;

/// Seeds, IV and start bytes for one container.
///
/// [`ContainerSeeds::random`] draws them from the OS; [`ContainerSeeds::new`] takes
/// fixed values for deterministic output in tests and fuzzing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSeeds {
    pub master_seed: [u8; 32],
    pub transform_seed: [u8; 32],
    pub encryption_iv: [u8; 16],
    pub stream_start_bytes: [u8; STREAM_START_LENGTH],
    pub protected_stream_key: [u8; 32],
}

impl ContainerSeeds {
    #[must_use]
    pub const fn new(
        master_seed: [u8; 32],
        transform_seed: [u8; 32],
        encryption_iv: [u8; 16],
        stream_start_bytes: [u8; STREAM_START_LENGTH],
        protected_stream_key: [u8; 32],
    ) -> Self {
        Self {
            master_seed,
            transform_seed,
            encryption_iv,
            stream_start_bytes,
            protected_stream_key,
        }
    }

    /// Fresh values from the OS RNG.
    ///
    /// # Errors
    ///
    /// [`KdbxError::Crypto`](crate::KdbxError::Crypto) if the RNG fails.
    #[cfg(feature = "rand")]
    pub fn random() -> Result<Self, crate::error::KdbxError> {
        use crate::crypto::rng::random_bytes;

        Ok(Self {
            master_seed: random_bytes()?,
            transform_seed: random_bytes()?,
            encryption_iv: random_bytes()?,
            stream_start_bytes: random_bytes()?,
            protected_stream_key: random_bytes()?,
        })
    }
}
