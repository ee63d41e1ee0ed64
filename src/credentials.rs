//! src/credentials.rs
//! User secrets for one decryption (or encryption) run

use crate::aliases::{KeyfileBytes, PasswordBytes};
use std::fmt;

/// Password and/or keyfile protecting a container.
///
/// Both secrets are held in `secure-gate` wrappers. Either may be absent. An empty
/// password is treated the same as no password.
///
/// ```
/// use kdbx3_rs::Credentials;
///
/// let credentials = Credentials::new()
///     .with_password("FooBar")
///     .with_keyfile(vec![0x42; 32]);
/// assert!(!credentials.is_empty());
/// ```
#[derive(Default)]
pub struct Credentials {
    password: Option<PasswordBytes>,
    keyfile: Option<KeyfileBytes>,
}

impl Credentials {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Password bytes, typically UTF-8. Used exactly as given.
    #[must_use]
    pub fn with_password(mut self, password: impl AsRef<[u8]>) -> Self {
        self.password = Some(PasswordBytes::new(password.as_ref().to_vec()));
        self
    }

    /// Raw keyfile contents; the layout is detected when the key is derived.
    #[must_use]
    pub fn with_keyfile(mut self, keyfile: impl Into<Vec<u8>>) -> Self {
        self.keyfile = Some(KeyfileBytes::new(keyfile.into()));
        self
    }

    /// Password bytes, `None` when absent or empty.
    #[must_use]
    pub fn expose_password(&self) -> Option<&[u8]> {
        self.password
            .as_ref()
            .map(|p| p.expose_secret().as_slice())
            .filter(|p| !p.is_empty())
    }

    /// Keyfile bytes exactly as supplied (an empty keyfile is still `Some`).
    #[must_use]
    pub fn expose_keyfile(&self) -> Option<&[u8]> {
        self.keyfile.as_ref().map(|k| k.expose_secret().as_slice())
    }

    /// `true` when neither a non-empty password nor a keyfile was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expose_password().is_none() && self.keyfile.is_none()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("keyfile", &self.keyfile.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
