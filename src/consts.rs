//! # Constants
//!
//! Format constants for KDBX 3.x containers and the defaults used by the
//! option builders.

/// First signature word (`0x9AA2D903`), shared by every KeePass file format.
pub const KDBX_SIGNATURE_1: u32 = 0x9AA2_D903;

/// Second signature word identifying a KeePass 2.x (KDBX) container.
pub const KDBX_SIGNATURE_2: u32 = 0xB54B_FB67;

/// Second signature word of KeePass 1.x (`.kdb`) files.
pub const KDB1_SIGNATURE_2: u32 = 0xB54B_FB65;

/// Second signature word of pre-release KeePass 2.x files.
pub const KDBX_PRERELEASE_SIGNATURE_2: u32 = 0xB54B_FB66;

/// Major file version read and written by this crate.
pub const KDBX_SUPPORTED_MAJOR_VERSION: u16 = 3;

/// Minor file version written by the encryptor (KDBX 3.1).
pub const KDBX_WRITTEN_MINOR_VERSION: u16 = 1;

/// Length of the fixed prefix: two signature words plus minor and major version.
pub const PREFIX_LENGTH: usize = 12;

/// UUID of the AES-256 outer cipher (`31c1f2e6-bf71-4350-be58-05216afc5aff`).
pub const CIPHER_AES256: [u8; 16] = [
    0x31, 0xC1, 0xF2, 0xE6, 0xBF, 0x71, 0x43, 0x50, 0xBE, 0x58, 0x05, 0x21, 0x6A, 0xFC, 0x5A, 0xFF,
];

/// AES block size.
pub const AES_BLOCK_SIZE: usize = 16;

/// Length of every SHA-256 digest and every 256-bit key.
pub const HASH_LENGTH: usize = 32;

/// Length of the stream start bytes written by the encryptor.
pub const STREAM_START_LENGTH: usize = 32;

/// Value KeePass stores in the end-of-header field.
pub const END_OF_HEADER_VALUE: [u8; 4] = *b"\r\n\r\n";

/// Upper bound on transform rounds accepted from an untrusted header.
///
/// Roughly a minute of AES on commodity hardware. Callers that really have a
/// container with more rounds raise it through
/// [`DecryptOptions::with_max_transform_rounds`](crate::DecryptOptions::with_max_transform_rounds).
pub const DEFAULT_MAX_TRANSFORM_ROUNDS: u64 = 100_000_000;

/// Minimum transform rounds accepted by the encryptor.
pub const MIN_TRANSFORM_ROUNDS: u64 = 1;

/// KeePass' own default for new databases.
pub const DEFAULT_TRANSFORM_ROUNDS: u64 = 60_000;

/// Block size used when splitting the payload into hashed blocks (1 MiB, as KeePass does).
pub const DEFAULT_BLOCK_SIZE: usize = 1024 * 1024;
