//! src/encryptor/write.rs
//! KDBX 3.x header writer

use crate::consts::{END_OF_HEADER_VALUE, KDBX_SIGNATURE_1, KDBX_SIGNATURE_2};
use crate::error::KdbxError;
use crate::header::{FormatVersion, HeaderFieldId, KdbxHeader};
use std::io::Write;

/// Field order KeePass uses when writing a 3.1 header.
pub const CANONICAL_FIELD_ORDER: [HeaderFieldId; 9] = [
    HeaderFieldId::CipherId,
    HeaderFieldId::CompressionFlags,
    HeaderFieldId::MasterSeed,
    HeaderFieldId::TransformSeed,
    HeaderFieldId::TransformRounds,
    HeaderFieldId::EncryptionIv,
    HeaderFieldId::ProtectedStreamKey,
    HeaderFieldId::StreamStartBytes,
    HeaderFieldId::InnerRandomStreamId,
];

#[inline]
pub fn write_octets<W: Write>(writer: &mut W, data: &[u8]) -> Result<(), KdbxError> {
    writer.write_all(data).map_err(KdbxError::Io)
}

/// Signature words and version.
#[inline]
pub fn write_prefix<W: Write>(writer: &mut W, version: FormatVersion) -> Result<(), KdbxError> {
    write_octets(writer, &KDBX_SIGNATURE_1.to_le_bytes())?;
    write_octets(writer, &KDBX_SIGNATURE_2.to_le_bytes())?;
    write_octets(writer, &version.minor.to_le_bytes())?;
    write_octets(writer, &version.major.to_le_bytes())
}

/// One TLV field: `u8 id | u16 length | value`.
#[inline]
pub fn write_field<W: Write>(
    writer: &mut W,
    id: HeaderFieldId,
    value: &[u8],
) -> Result<(), KdbxError> {
    let length = u16::try_from(value.len()).map_err(|_| {
        KdbxError::Crypto(format!(
            "header field {} too long: {} bytes",
            id.name(),
            value.len()
        ))
    })?;
    write_octets(writer, &[id as u8])?;
    write_octets(writer, &length.to_le_bytes())?;
    write_octets(writer, value)
}

fn field_value(header: &KdbxHeader, id: HeaderFieldId) -> Option<Vec<u8>> {
    match id {
        HeaderFieldId::EndOfHeader => None,
        HeaderFieldId::Comment => header.comment.clone(),
        HeaderFieldId::CipherId => Some(header.cipher.uuid().to_vec()),
        HeaderFieldId::CompressionFlags => Some(header.compression.flags().to_le_bytes().to_vec()),
        HeaderFieldId::MasterSeed => Some(header.master_seed.clone()),
        HeaderFieldId::TransformSeed => Some(header.transform_seed.to_vec()),
        HeaderFieldId::TransformRounds => Some(header.transform_rounds.to_le_bytes().to_vec()),
        HeaderFieldId::EncryptionIv => Some(header.encryption_iv.to_vec()),
        HeaderFieldId::ProtectedStreamKey => header.protected_stream_key.clone(),
        HeaderFieldId::StreamStartBytes => Some(header.stream_start_bytes.to_vec()),
        HeaderFieldId::InnerRandomStreamId => header
            .inner_random_stream
            .map(|id| u32::from(id).to_le_bytes().to_vec()),
    }
}

/// Write prefix, every field in `header.field_order` that has a value, and the
/// end-of-header field.
pub fn write_header<W: Write>(writer: &mut W, header: &KdbxHeader) -> Result<(), KdbxError> {
    write_prefix(writer, header.version)?;
    for &id in &header.field_order {
        if let Some(value) = field_value(header, id) {
            write_field(writer, id, &value)?;
        }
    }
    write_field(writer, HeaderFieldId::EndOfHeader, &END_OF_HEADER_VALUE)
}
