//! tests/common.rs
//! Common constants, fixtures and the JSON vector loader shared across test files

#![allow(dead_code)] // each test binary uses a different subset

use kdbx3_rs::{ContainerSeeds, Credentials};
use serde::Deserialize;
use std::path::Path;

/// Fast round count for tests - performance testing is in benches/
pub const TEST_ROUNDS: u64 = 10;

/// Password used by the external vectors and most round-trip tests
pub const TEST_PASSWORD: &str = "FooBar";

/// Small inner document shaped like a real KeePass export
pub const TEST_DOCUMENT: &[u8] = b"<?xml version=\"1.0\" encoding=\"utf-8\" standalone=\"yes\"?>\n\
<KeePassFile><Meta><Generator>kdbx3-rs</Generator></Meta>\
<Root><Group><Name>Root</Name><Entry><String><Key>Title</Key><Value>Sample</Value></String></Entry></Group></Root>\
</KeePassFile>\n";

pub fn password_credentials() -> Credentials {
    Credentials::new().with_password(TEST_PASSWORD)
}

/// Distinct, recognisable seeds so tests can locate header fields by value
pub fn fixed_seeds() -> ContainerSeeds {
    ContainerSeeds::new([0x4D; 32], [0x54; 32], [0x49; 16], [0xAB; 32], [0x50; 32])
}

/// Seeds the external container vectors were built with
pub fn vector_seeds() -> ContainerSeeds {
    ContainerSeeds::new(
        array(1),
        array(33),
        array(65),
        array(81),
        array(113),
    )
}

fn array<const N: usize>(start: u8) -> [u8; N] {
    std::array::from_fn(|i| start + i as u8)
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON vectors (tests/vector/data/kdbx3_vectors.json), computed outside this crate
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct Vectors {
    pub pinned: String,
    pub kdf: Vec<KdfVector>,
    pub keyfiles: Vec<KeyfileVector>,
    pub containers: Vec<ContainerVector>,
}

#[derive(Debug, Deserialize)]
pub struct KdfVector {
    pub password: Option<String>,
    pub rounds: u64,
    pub transform_seed: String,
    pub master_seed: String,
    pub master_key: String,
}

#[derive(Debug, Deserialize)]
pub struct KeyfileVector {
    pub name: String,
    pub keyfile_hex: String,
    pub password: Option<String>,
    pub keyfile_key: String,
    pub composite_key: String,
}

#[derive(Debug, Deserialize)]
pub struct ContainerVector {
    pub name: String,
    pub password: Option<String>,
    pub keyfile_hex: Option<String>,
    pub compressed: bool,
    pub rounds: u64,
    pub container_hex: String,
    pub master_key: String,
    pub document: String,
}

impl ContainerVector {
    pub fn credentials(&self) -> Credentials {
        let mut credentials = Credentials::new();
        if let Some(password) = &self.password {
            credentials = credentials.with_password(password);
        }
        if let Some(keyfile) = &self.keyfile_hex {
            credentials = credentials.with_keyfile(decode_hex(keyfile));
        }
        credentials
    }

    pub fn container(&self) -> Vec<u8> {
        decode_hex(&self.container_hex)
    }
}

pub fn load_vectors() -> Vectors {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("vector")
        .join("data")
        .join("kdbx3_vectors.json");

    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));

    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {e}", path.display()))
}

pub fn decode_hex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap_or_else(|e| panic!("Invalid hex in vector: {e}"))
}

pub fn decode_hex32(s: &str) -> [u8; 32] {
    decode_hex(s)
        .try_into()
        .unwrap_or_else(|v: Vec<u8>| panic!("expected 32 bytes, got {}", v.len()))
}
