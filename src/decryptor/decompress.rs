//! src/decryptor/decompress.rs

use crate::error::KdbxError;
use crate::header::Compression;
use flate2::read::GzDecoder;
use log::debug;
use std::io::Read;

/// Undo the payload compression named by the header.
///
/// # Errors
///
/// [`KdbxError::Format`] if a gzip payload is not a valid gzip stream.
pub fn decompress_payload(payload: Vec<u8>, compression: Compression) -> Result<Vec<u8>, KdbxError> {
    match compression {
        Compression::None => Ok(payload),
        Compression::Gzip => {
            let mut document = Vec::new();
            GzDecoder::new(payload.as_slice())
                .read_to_end(&mut document)
                .map_err(|e| KdbxError::Format(format!("invalid gzip payload: {e}")))?;
            debug!("gunzip: {} → {} bytes", payload.len(), document.len());
            Ok(document)
        }
    }
}
