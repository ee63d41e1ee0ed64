//! src/builders/decrypt_options.rs
//! Decryption limits and strictness switches

use crate::consts::DEFAULT_MAX_TRANSFORM_ROUNDS;

/// Options applied while decrypting a container.
///
/// Defaults: at most [`DEFAULT_MAX_TRANSFORM_ROUNDS`] transform rounds, strict version
/// checking, lenient block indices (indices are read but not validated).
///
/// # Thread Safety
///
/// Plain data, `Copy`, `Send + Sync`. One value can drive any number of parallel runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecryptOptions {
    max_transform_rounds: u64,
    strict_version: bool,
    strict_block_indices: bool,
}

impl DecryptOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_transform_rounds: DEFAULT_MAX_TRANSFORM_ROUNDS,
            strict_version: true,
            strict_block_indices: false,
        }
    }

    /// Ceiling on the header's transform round count. Containers above it are
    /// rejected before any key derivation work starts.
    #[must_use]
    pub const fn with_max_transform_rounds(mut self, rounds: u64) -> Self {
        self.max_transform_rounds = rounds;
        self
    }

    /// When `false`, an unexpected major version is logged instead of rejected.
    #[must_use]
    pub const fn with_strict_version(mut self, strict: bool) -> Self {
        self.strict_version = strict;
        self
    }

    /// When `true`, block indices must run 0, 1, 2, … up to and including the terminator.
    #[must_use]
    pub const fn with_strict_block_indices(mut self, strict: bool) -> Self {
        self.strict_block_indices = strict;
        self
    }

    #[must_use]
    pub const fn max_transform_rounds(&self) -> u64 {
        self.max_transform_rounds
    }

    #[must_use]
    pub const fn strict_version(&self) -> bool {
        self.strict_version
    }

    #[must_use]
    pub const fn strict_block_indices(&self) -> bool {
        self.strict_block_indices
    }
}

impl Default for DecryptOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = DecryptOptions::default();
        assert_eq!(options.max_transform_rounds(), DEFAULT_MAX_TRANSFORM_ROUNDS);
        assert!(options.strict_version());
        assert!(!options.strict_block_indices());
    }

    #[test]
    fn with_methods_chain() {
        let options = DecryptOptions::new()
            .with_max_transform_rounds(10)
            .with_strict_version(false)
            .with_strict_block_indices(true);
        assert_eq!(options.max_transform_rounds(), 10);
        assert!(!options.strict_version());
        assert!(options.strict_block_indices());
    }
}
