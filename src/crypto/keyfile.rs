//! src/crypto/keyfile.rs
//! Keyfile component of the composite key
//!
//! Layouts, tried in order:
//!
//! 1. XML `<KeyFile>` document: version 1.0 (`Key/Data` base64) or version 2.0
//!    (`Key/Data` hex, optional `Hash` attribute = first 4 bytes of SHA-256 of the key)
//! 2. exactly 32 bytes → used as-is
//! 3. exactly 64 bytes of hex → decoded
//! 4. anything else → SHA-256 of the whole file

use crate::aliases::KeyfileKey32;
use crate::consts::HASH_LENGTH;
use crate::error::KdbxError;
use crate::utils::sha256;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::trace;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Derive the 32-byte keyfile key from raw keyfile contents.
///
/// # Errors
///
/// [`KdbxError::Keyfile`] if the keyfile is empty, or if it is a `<KeyFile>` XML
/// document whose key is missing, undecodable, not 32 bytes, or fails its hash check.
pub fn keyfile_key(keyfile: &[u8]) -> Result<KeyfileKey32, KdbxError> {
    if keyfile.is_empty() {
        return Err(KdbxError::Keyfile("keyfile is empty".into()));
    }

    if looks_like_xml(keyfile) {
        if let Some(key) = parse_xml_keyfile(keyfile)? {
            trace!("keyfile layout: XML");
            return Ok(key);
        }
    }

    if keyfile.len() == HASH_LENGTH {
        trace!("keyfile layout: raw 32 bytes");
        let mut key = KeyfileKey32::new([0u8; HASH_LENGTH]);
        key.expose_secret_mut().copy_from_slice(keyfile);
        return Ok(key);
    }

    if keyfile.len() == 2 * HASH_LENGTH {
        let mut key = KeyfileKey32::new([0u8; HASH_LENGTH]);
        if hex::decode_to_slice(keyfile, key.expose_secret_mut()).is_ok() {
            trace!("keyfile layout: 64 hex characters");
            return Ok(key);
        }
    }

    trace!("keyfile layout: hashed ({} bytes)", keyfile.len());
    Ok(KeyfileKey32::new(sha256(keyfile)))
}

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}

fn looks_like_xml(bytes: &[u8]) -> bool {
    strip_bom(bytes)
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|&b| b == b'<')
}

fn keyfile_error(msg: impl Into<String>) -> KdbxError {
    KdbxError::Keyfile(msg.into())
}

fn attribute(element: &BytesStart<'_>, name: &str) -> Result<Option<String>, KdbxError> {
    let Some(attr) = element
        .try_get_attribute(name)
        .map_err(|e| keyfile_error(format!("malformed XML keyfile attribute: {e}")))?
    else {
        return Ok(None);
    };
    let value = attr
        .unescape_value()
        .map_err(|e| keyfile_error(format!("malformed XML keyfile attribute: {e}")))?;
    Ok(Some(value.into_owned()))
}

/// `Ok(None)` when the bytes are not a `<KeyFile>` document at all, so the caller
/// falls back to the binary layouts.
fn parse_xml_keyfile(bytes: &[u8]) -> Result<Option<KeyfileKey32>, KdbxError> {
    let Ok(text) = std::str::from_utf8(strip_bom(bytes)) else {
        return Ok(None);
    };

    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut path: Vec<String> = Vec::new();
    let mut is_keyfile = false;
    let mut version: Option<String> = None;
    let mut data: Option<String> = None;
    let mut data_hash: Option<String> = None;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(_) if !is_keyfile => return Ok(None),
            Err(e) => return Err(keyfile_error(format!("malformed XML keyfile: {e}"))),
        };

        match event {
            Event::Start(element) => {
                let name = String::from_utf8_lossy(element.local_name().as_ref()).into_owned();
                if path.is_empty() {
                    if name != "KeyFile" {
                        return Ok(None);
                    }
                    is_keyfile = true;
                }
                if name == "Data" && path == ["KeyFile", "Key"] {
                    data_hash = attribute(&element, "Hash")?;
                }
                path.push(name);
            }
            Event::Empty(element) => {
                if path.is_empty() {
                    if element.local_name().as_ref() != b"KeyFile" {
                        return Ok(None);
                    }
                    is_keyfile = true;
                    break;
                }
            }
            Event::Text(content) => {
                let content = content
                    .unescape()
                    .map_err(|e| keyfile_error(format!("malformed XML keyfile text: {e}")))?
                    .into_owned();
                if path == ["KeyFile", "Meta", "Version"] {
                    version = Some(content);
                } else if path == ["KeyFile", "Key", "Data"] {
                    data = Some(content);
                }
            }
            Event::End(_) => {
                path.pop();
                if path.is_empty() {
                    break;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !is_keyfile {
        return Ok(None);
    }

    let data = data.ok_or_else(|| keyfile_error("XML keyfile has no Key/Data element"))?;
    let compact: String = data.split_whitespace().collect();
    let version = version.unwrap_or_else(|| "1.0".to_owned());

    let decoded = if version.starts_with('1') {
        STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| keyfile_error(format!("invalid base64 key data: {e}")))?
    } else if version.starts_with('2') {
        hex::decode(compact.as_bytes())
            .map_err(|e| keyfile_error(format!("invalid hex key data: {e}")))?
    } else {
        return Err(keyfile_error(format!(
            "unsupported XML keyfile version {version}"
        )));
    };

    let mut key = KeyfileKey32::new([0u8; HASH_LENGTH]);
    if decoded.len() != HASH_LENGTH {
        return Err(keyfile_error(format!(
            "XML keyfile key must be {HASH_LENGTH} bytes, found {}",
            decoded.len()
        )));
    }
    key.expose_secret_mut().copy_from_slice(&decoded);

    if let Some(expected) = data_hash {
        let expected = hex::decode(expected.trim())
            .map_err(|e| keyfile_error(format!("invalid key hash attribute: {e}")))?;
        if sha256(key.expose_secret()).get(..expected.len()) != Some(expected.as_slice()) {
            return Err(keyfile_error("XML keyfile key does not match its hash"));
        }
    }

    Ok(Some(key))
}
