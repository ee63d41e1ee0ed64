//! src/batch_ops.rs
//! Parallel encryption and decryption of many containers with one set of credentials

use rayon::prelude::*;
use std::io::{Read, Write};

use crate::{decrypt, encrypt, Credentials, EncryptOptions, KdbxError};

/// Encrypt every `(source, destination)` pair in parallel. Each container gets its own seeds.
///
/// Stops at the first error; pairs already finished keep their output.
pub fn encrypt_batch<R, W>(
    batch: &mut [(R, W)],
    credentials: &Credentials,
    options: &EncryptOptions,
) -> Result<(), KdbxError>
where
    R: Read + Send,
    W: Write + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(src, dst)| encrypt(src, dst, credentials, options))
}

/// Decrypt every `(container, destination)` pair in parallel.
pub fn decrypt_batch<R, W>(batch: &mut [(R, W)], credentials: &Credentials) -> Result<(), KdbxError>
where
    R: Read + Send,
    W: Write + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(src, dst)| decrypt(src, dst, credentials))
}
