//! src/encryptor/compress.rs

use crate::error::KdbxError;
use crate::header::Compression;
use flate2::write::GzEncoder;
use std::io::Write;

/// Compress the document as the header's compression flags say.
pub fn compress_payload(document: &[u8], compression: Compression) -> Result<Vec<u8>, KdbxError> {
    match compression {
        Compression::None => Ok(document.to_vec()),
        Compression::Gzip => {
            let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
            encoder.write_all(document)?;
            Ok(encoder.finish()?)
        }
    }
}
