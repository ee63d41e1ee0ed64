// src/lib.rs

//! Read (and write) KeePass KDBX 3.x containers.
//!
//! Pipeline: header → AES-KDF master key → AES-256-CBC payload → hashed blocks →
//! optional gzip → inner XML document. Each stage is exported for custom flows; most
//! callers only need [`decrypt`] and [`Credentials`].

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod consts;
pub mod credentials;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod header;
pub mod utils;

// High-level API
pub use credentials::Credentials;
pub use decryptor::{decrypt, decrypt_container, decrypt_with_options};
#[cfg(feature = "rand")]
pub use encryptor::encrypt;
pub use encryptor::{encrypt_document, encrypt_with_fixed_seeds, ContainerSeeds};
pub use error::KdbxError;

pub use builders::decrypt_options::DecryptOptions;
pub use builders::encrypt_options::EncryptOptions;

// Pipeline stages, for callers driving the decryption themselves
pub use crypto::kdf::{
    composite_key, derive_master_key, derive_master_key_from_parts, transform_key,
};
pub use crypto::keyfile::keyfile_key;
pub use decryptor::{decompress_payload, decrypt_payload, read_block_stream, HashedBlocks};
pub use header::{
    parse_header, read_version, Compression, FormatVersion, HeaderFieldId, InnerStreamId,
    KdbxHeader, OuterCipher,
};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch};
