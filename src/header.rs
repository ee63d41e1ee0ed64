//! # Header Parsing
//!
//! This module parses the unencrypted KDBX 3.x header: the 12-byte signature and
//! version prefix followed by a sequence of type-length-value fields ending at the
//! end-of-header field.
//!
//! # Layout
//!
//! ```text
//! offset  size  content
//! 0       4     signature 1 (0x9AA2D903, little-endian)
//! 4       4     signature 2 (0xB54BFB67)
//! 8       2     minor version
//! 10      2     major version
//! 12      ...   fields: u8 id, u16 length, `length` bytes, until id 0
//! ```
//!
//! Fields are parsed into a closed, typed [`KdbxHeader`]; a missing required field is
//! reported once, at the end of parsing, rather than at the point of use.

use crate::builders::decrypt_options::DecryptOptions;
use crate::consts::{
    CIPHER_AES256, KDB1_SIGNATURE_2, KDBX_PRERELEASE_SIGNATURE_2, KDBX_SIGNATURE_1,
    KDBX_SIGNATURE_2, KDBX_SUPPORTED_MAJOR_VERSION, PREFIX_LENGTH,
};
use crate::decryptor::read::{read_exact_span, ByteCursor};
use crate::error::KdbxError;
use log::{debug, trace, warn};
use std::fmt;
use std::io::Read;

/// Identifier byte of a header field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HeaderFieldId {
    EndOfHeader = 0,
    Comment = 1,
    CipherId = 2,
    CompressionFlags = 3,
    MasterSeed = 4,
    TransformSeed = 5,
    TransformRounds = 6,
    EncryptionIv = 7,
    ProtectedStreamKey = 8,
    StreamStartBytes = 9,
    InnerRandomStreamId = 10,
}

impl HeaderFieldId {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EndOfHeader => "end of header",
            Self::Comment => "comment",
            Self::CipherId => "cipher id",
            Self::CompressionFlags => "compression flags",
            Self::MasterSeed => "master seed",
            Self::TransformSeed => "transform seed",
            Self::TransformRounds => "transform rounds",
            Self::EncryptionIv => "encryption IV",
            Self::ProtectedStreamKey => "protected stream key",
            Self::StreamStartBytes => "stream start bytes",
            Self::InnerRandomStreamId => "inner random stream id",
        }
    }
}

impl TryFrom<u8> for HeaderFieldId {
    type Error = KdbxError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Ok(match id {
            0 => Self::EndOfHeader,
            1 => Self::Comment,
            2 => Self::CipherId,
            3 => Self::CompressionFlags,
            4 => Self::MasterSeed,
            5 => Self::TransformSeed,
            6 => Self::TransformRounds,
            7 => Self::EncryptionIv,
            8 => Self::ProtectedStreamKey,
            9 => Self::StreamStartBytes,
            10 => Self::InnerRandomStreamId,
            other => {
                return Err(KdbxError::Format(format!("unknown header field id {other}")));
            }
        })
    }
}

/// File version from bytes 8–11 of the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatVersion {
    pub minor: u16,
    pub major: u16,
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Outer (payload) cipher named by the cipher id field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OuterCipher {
    Aes256,
}

impl OuterCipher {
    /// Look up a cipher UUID. Only AES-256 is supported.
    pub fn from_uuid(uuid: &[u8]) -> Result<Self, KdbxError> {
        if uuid == CIPHER_AES256 {
            Ok(Self::Aes256)
        } else {
            Err(KdbxError::Format(format!(
                "unsupported cipher {}",
                hex::encode(uuid)
            )))
        }
    }

    #[must_use]
    pub const fn uuid(self) -> [u8; 16] {
        match self {
            Self::Aes256 => CIPHER_AES256,
        }
    }
}

/// Payload compression, from the compression flags field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
}

impl Compression {
    pub fn from_flags(flags: u32) -> Result<Self, KdbxError> {
        match flags {
            0 => Ok(Self::None),
            1 => Ok(Self::Gzip),
            other => Err(KdbxError::Format(format!(
                "unsupported compression flags {other}"
            ))),
        }
    }

    #[must_use]
    pub const fn flags(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Gzip => 1,
        }
    }
}

/// Cipher protecting field values inside the inner document. Parsed and kept, never used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InnerStreamId {
    None,
    ArcFour,
    Salsa20,
    ChaCha20,
    Unknown(u32),
}

impl From<u32> for InnerStreamId {
    fn from(id: u32) -> Self {
        match id {
            0 => Self::None,
            1 => Self::ArcFour,
            2 => Self::Salsa20,
            3 => Self::ChaCha20,
            other => Self::Unknown(other),
        }
    }
}

impl From<InnerStreamId> for u32 {
    fn from(id: InnerStreamId) -> Self {
        match id {
            InnerStreamId::None => 0,
            InnerStreamId::ArcFour => 1,
            InnerStreamId::Salsa20 => 2,
            InnerStreamId::ChaCha20 => 3,
            InnerStreamId::Unknown(other) => other,
        }
    }
}

/// Parsed KDBX 3.x header. Built once by [`parse_header`], read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KdbxHeader {
    pub version: FormatVersion,
    pub cipher: OuterCipher,
    pub compression: Compression,
    /// 32 bytes in KeePass-written files; 16 is also accepted.
    pub master_seed: Vec<u8>,
    pub transform_seed: [u8; 32],
    pub transform_rounds: u64,
    pub encryption_iv: [u8; 16],
    pub stream_start_bytes: [u8; 32],
    pub protected_stream_key: Option<Vec<u8>>,
    pub inner_random_stream: Option<InnerStreamId>,
    pub comment: Option<Vec<u8>>,
    /// Field ids in the order they appeared, end-of-header excluded.
    pub field_order: Vec<HeaderFieldId>,
}

/// Read and validate the 12-byte prefix from a reader.
///
/// Checks both signature words and returns the version without parsing the fields.
/// The version itself is not judged here; [`parse_header`] applies the strictness rules.
///
/// # Example
///
/// ```
/// use kdbx3_rs::read_version;
/// use std::io::Cursor;
///
/// let prefix = [0x03, 0xd9, 0xa2, 0x9a, 0x67, 0xfb, 0x4b, 0xb5, 0x01, 0x00, 0x03, 0x00];
/// let version = read_version(Cursor::new(prefix))?;
/// assert_eq!((version.major, version.minor), (3, 1));
/// # Ok::<(), kdbx3_rs::KdbxError>(())
/// ```
pub fn read_version<R: Read>(mut reader: R) -> Result<FormatVersion, KdbxError> {
    let prefix: [u8; PREFIX_LENGTH] = read_exact_span(&mut reader).map_err(|e| match e {
        KdbxError::Io(io) if io.kind() == std::io::ErrorKind::UnexpectedEof => {
            KdbxError::Format("truncated signature: container shorter than 12 bytes".into())
        }
        other => other,
    })?;
    parse_prefix(&mut ByteCursor::new(&prefix))
}

fn parse_prefix(cursor: &mut ByteCursor<'_>) -> Result<FormatVersion, KdbxError> {
    let signature_1 = cursor.read_u32_le("signature")?;
    let signature_2 = cursor.read_u32_le("signature")?;

    if signature_1 != KDBX_SIGNATURE_1 {
        return Err(KdbxError::Format(
            "not a KeePass database: invalid signature".into(),
        ));
    }
    match signature_2 {
        KDBX_SIGNATURE_2 => {}
        KDB1_SIGNATURE_2 => {
            return Err(KdbxError::Format(
                "KeePass 1.x (.kdb) databases are not supported".into(),
            ));
        }
        KDBX_PRERELEASE_SIGNATURE_2 => {
            return Err(KdbxError::Format(
                "pre-release KeePass 2.x databases are not supported".into(),
            ));
        }
        other => {
            return Err(KdbxError::Format(format!(
                "not a KDBX database: unknown signature {other:#010x}"
            )));
        }
    }

    let minor = cursor.read_u16_le("minor version")?;
    let major = cursor.read_u16_le("major version")?;
    Ok(FormatVersion { minor, major })
}

fn check_version(version: FormatVersion, options: &DecryptOptions) -> Result<(), KdbxError> {
    if version.major == KDBX_SUPPORTED_MAJOR_VERSION {
        return Ok(());
    }
    if options.strict_version() {
        return Err(KdbxError::Format(format!(
            "unsupported KDBX version {version} (expected {KDBX_SUPPORTED_MAJOR_VERSION}.x)"
        )));
    }
    warn!("unexpected KDBX version {version}, continuing in permissive mode");
    Ok(())
}

fn fixed<const N: usize>(id: HeaderFieldId, value: &[u8]) -> Result<[u8; N], KdbxError> {
    <[u8; N]>::try_from(value).map_err(|_| {
        KdbxError::Format(format!(
            "invalid {} length: expected {N} bytes, found {}",
            id.name(),
            value.len()
        ))
    })
}

fn missing(id: HeaderFieldId) -> KdbxError {
    KdbxError::Format(format!("missing required header field: {}", id.name()))
}

/// Field values collected while walking the header, before the presence check.
#[derive(Default)]
struct PartialHeader {
    cipher: Option<OuterCipher>,
    compression: Option<Compression>,
    master_seed: Option<Vec<u8>>,
    transform_seed: Option<[u8; 32]>,
    transform_rounds: Option<u64>,
    encryption_iv: Option<[u8; 16]>,
    stream_start_bytes: Option<[u8; 32]>,
    protected_stream_key: Option<Vec<u8>>,
    inner_random_stream: Option<InnerStreamId>,
    comment: Option<Vec<u8>>,
}

impl PartialHeader {
    fn apply(&mut self, id: HeaderFieldId, value: &[u8]) -> Result<(), KdbxError> {
        match id {
            HeaderFieldId::EndOfHeader => {}
            HeaderFieldId::Comment => self.comment = Some(value.to_vec()),
            HeaderFieldId::CipherId => self.cipher = Some(OuterCipher::from_uuid(value)?),
            HeaderFieldId::CompressionFlags => {
                let flags = u32::from_le_bytes(fixed(id, value)?);
                self.compression = Some(Compression::from_flags(flags)?);
            }
            HeaderFieldId::MasterSeed => {
                if value.len() != 16 && value.len() != 32 {
                    return Err(KdbxError::Format(format!(
                        "invalid master seed length: expected 16 or 32 bytes, found {}",
                        value.len()
                    )));
                }
                self.master_seed = Some(value.to_vec());
            }
            HeaderFieldId::TransformSeed => self.transform_seed = Some(fixed(id, value)?),
            HeaderFieldId::TransformRounds => {
                self.transform_rounds = Some(u64::from_le_bytes(fixed(id, value)?));
            }
            HeaderFieldId::EncryptionIv => self.encryption_iv = Some(fixed(id, value)?),
            HeaderFieldId::ProtectedStreamKey => self.protected_stream_key = Some(value.to_vec()),
            HeaderFieldId::StreamStartBytes => self.stream_start_bytes = Some(fixed(id, value)?),
            HeaderFieldId::InnerRandomStreamId => {
                let raw = u32::from_le_bytes(fixed(id, value)?);
                self.inner_random_stream = Some(InnerStreamId::from(raw));
            }
        }
        Ok(())
    }

    fn finish(
        self,
        version: FormatVersion,
        field_order: Vec<HeaderFieldId>,
    ) -> Result<KdbxHeader, KdbxError> {
        Ok(KdbxHeader {
            version,
            cipher: self.cipher.ok_or_else(|| missing(HeaderFieldId::CipherId))?,
            compression: self
                .compression
                .ok_or_else(|| missing(HeaderFieldId::CompressionFlags))?,
            master_seed: self
                .master_seed
                .ok_or_else(|| missing(HeaderFieldId::MasterSeed))?,
            transform_seed: self
                .transform_seed
                .ok_or_else(|| missing(HeaderFieldId::TransformSeed))?,
            transform_rounds: self
                .transform_rounds
                .ok_or_else(|| missing(HeaderFieldId::TransformRounds))?,
            encryption_iv: self
                .encryption_iv
                .ok_or_else(|| missing(HeaderFieldId::EncryptionIv))?,
            stream_start_bytes: self
                .stream_start_bytes
                .ok_or_else(|| missing(HeaderFieldId::StreamStartBytes))?,
            protected_stream_key: self.protected_stream_key,
            inner_random_stream: self.inner_random_stream,
            comment: self.comment,
            field_order,
        })
    }
}

/// Parse the header of a container.
///
/// Returns the header and the offset at which the encrypted body starts.
///
/// # Errors
///
/// [`KdbxError::Format`] on a bad signature, an unsupported version (strict mode),
/// an unknown or duplicate field id, a field running past the end of the buffer,
/// a fixed-size field of the wrong length, or a missing required field.
pub fn parse_header(
    container: &[u8],
    options: &DecryptOptions,
) -> Result<(KdbxHeader, usize), KdbxError> {
    let mut cursor = ByteCursor::new(container);
    let version = parse_prefix(&mut cursor)?;
    check_version(version, options)?;

    let mut partial = PartialHeader::default();
    let mut field_order = Vec::new();

    loop {
        let raw_id = cursor.read_u8("header field id")?;
        let id = HeaderFieldId::try_from(raw_id)?;
        let length = cursor.read_u16_le("header field length")?;
        let value = cursor.take(usize::from(length), id.name())?;

        if id == HeaderFieldId::EndOfHeader {
            break;
        }
        if field_order.contains(&id) {
            return Err(KdbxError::Format(format!(
                "duplicate header field: {}",
                id.name()
            )));
        }
        trace!("header field {} ({length} bytes)", id.name());
        partial.apply(id, value)?;
        field_order.push(id);
    }

    let header = partial.finish(version, field_order)?;
    let body_offset = cursor.position();
    debug!(
        "parsed KDBX {} header: {} fields, {:?} compression, {} transform rounds, body at {body_offset}",
        header.version,
        header.field_order.len(),
        header.compression,
        header.transform_rounds
    );
    Ok((header, body_offset))
}
