//! src/encryptor/encrypt.rs
//! KDBX 3.1 encryption with fresh random seeds

use crate::builders::encrypt_options::EncryptOptions;
use crate::credentials::Credentials;
use crate::encryptor::encrypt_fixed_seeds::encrypt_with_fixed_seeds;
use crate::encryptor::seeds::ContainerSeeds;
use crate::error::KdbxError;
use std::io::{Read, Write};

/// Encrypt a document into a KDBX 3.1 container.
///
/// Master seed, transform seed, IV, stream start bytes and protected stream key all
/// come from the OS RNG.
///
/// ```
/// use kdbx3_rs::{decrypt, encrypt, Credentials, EncryptOptions};
///
/// let credentials = Credentials::new().with_password("FooBar");
/// let options = EncryptOptions::new().with_transform_rounds(100);
///
/// let mut container = Vec::new();
/// encrypt(&b"<KeePassFile/>"[..], &mut container, &credentials, &options)?;
///
/// let mut document = Vec::new();
/// decrypt(container.as_slice(), &mut document, &credentials)?;
/// assert_eq!(document, b"<KeePassFile/>");
/// # Ok::<(), kdbx3_rs::KdbxError>(())
/// ```
#[inline(always)]
pub fn encrypt<R, W>(
    input: R,
    output: W,
    credentials: &Credentials,
    options: &EncryptOptions,
) -> Result<(), KdbxError>
where
    R: Read,
    W: Write,
{
    let seeds = ContainerSeeds::random()?;
    encrypt_with_fixed_seeds(input, output, credentials, options, &seeds)
}
