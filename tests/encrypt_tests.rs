//! tests/encrypt_tests.rs
//! Container writer – output layout, validation, random seeds

mod common;

use common::{fixed_seeds, password_credentials, TEST_DOCUMENT, TEST_ROUNDS};
use kdbx3_rs::encryptor::build_header;
use kdbx3_rs::{
    decrypt_container, encrypt, encrypt_document, encrypt_with_fixed_seeds, parse_header,
    Compression, ContainerSeeds, Credentials, DecryptOptions, EncryptOptions, KdbxError,
};
use std::io::Cursor;

fn options() -> EncryptOptions {
    EncryptOptions::new().with_transform_rounds(TEST_ROUNDS)
}

#[test]
fn encrypt_basics() {
    let large = vec![0x41u8; 100_000];
    let cases: [(&[u8], &str); 3] = [
        (&[], "empty document"),
        (TEST_DOCUMENT, "small document"),
        (&large, "large document (100 KB)"),
    ];

    for (document, desc) in cases {
        for compression in [Compression::None, Compression::Gzip] {
            let options = options().with_compression(compression).with_block_size(4096);
            let mut container = Vec::new();
            encrypt(Cursor::new(document), &mut container, &password_credentials(), &options)
                .unwrap_or_else(|e| panic!("Encryption failed for {desc}: {e}"));

            assert_eq!(&container[..4], &[0x03, 0xD9, 0xA2, 0x9A], "{desc}: signature");
            let decrypted =
                decrypt_container(&container, &password_credentials(), &DecryptOptions::default())
                    .unwrap_or_else(|e| panic!("Decryption failed for {desc}: {e}"));
            assert_eq!(decrypted, document, "{desc} ({compression:?})");
        }
    }
}

#[test]
fn random_seeds_differ_between_runs() {
    let mut first = Vec::new();
    let mut second = Vec::new();
    encrypt(TEST_DOCUMENT, &mut first, &password_credentials(), &options()).unwrap();
    encrypt(TEST_DOCUMENT, &mut second, &password_credentials(), &options()).unwrap();
    assert_ne!(first, second);

    let (a, _) = parse_header(&first, &DecryptOptions::default()).unwrap();
    let (b, _) = parse_header(&second, &DecryptOptions::default()).unwrap();
    assert_ne!(a.master_seed, b.master_seed);
    assert_ne!(a.encryption_iv, b.encryption_iv);
}

#[test]
fn fixed_seeds_are_deterministic() {
    let mut first = Vec::new();
    let mut second = Vec::new();
    let seeds = fixed_seeds();
    encrypt_with_fixed_seeds(TEST_DOCUMENT, &mut first, &password_credentials(), &options(), &seeds)
        .unwrap();
    encrypt_with_fixed_seeds(TEST_DOCUMENT, &mut second, &password_credentials(), &options(), &seeds)
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn written_header_parses_back() {
    let options = options().with_compression(Compression::None);
    let seeds = fixed_seeds();
    let container =
        encrypt_document(TEST_DOCUMENT, &password_credentials(), &options, &seeds).unwrap();

    let (header, _) = parse_header(&container, &DecryptOptions::default()).unwrap();
    assert_eq!(header, build_header(&options, &seeds));
    assert_eq!(header.version.major, 3);
    assert_eq!(header.version.minor, 1);
    assert_eq!(header.transform_rounds, TEST_ROUNDS);
}

#[test]
fn end_of_header_value_is_crlf_crlf() {
    let container =
        encrypt_document(TEST_DOCUMENT, &password_credentials(), &options(), &fixed_seeds())
            .unwrap();
    let (_, body_offset) = parse_header(&container, &DecryptOptions::default()).unwrap();
    assert_eq!(&container[body_offset - 7..body_offset], b"\x00\x04\x00\r\n\r\n");
}

#[test]
fn empty_credentials_rejected() {
    for credentials in [Credentials::new(), Credentials::new().with_password("")] {
        let err = encrypt_document(TEST_DOCUMENT, &credentials, &options(), &fixed_seeds())
            .unwrap_err();
        assert!(matches!(err, KdbxError::Crypto(_)), "{err}");
    }
}

#[test]
fn keyfile_only_credentials_accepted() {
    let credentials = Credentials::new().with_keyfile(vec![0x24; 32]);
    let container =
        encrypt_document(TEST_DOCUMENT, &credentials, &options(), &fixed_seeds()).unwrap();
    let document =
        decrypt_container(&container, &credentials, &DecryptOptions::default()).unwrap();
    assert_eq!(document, TEST_DOCUMENT);
}

#[test]
fn invalid_rounds_rejected() {
    for rounds in [0u64, u64::MAX] {
        let options = EncryptOptions::new().with_transform_rounds(rounds);
        let mut container = Vec::new();
        let err = encrypt(TEST_DOCUMENT, &mut container, &password_credentials(), &options)
            .unwrap_err();
        assert!(matches!(err, KdbxError::Crypto(_)), "rounds {rounds}: {err}");
        assert!(container.is_empty());
    }
}

#[test]
fn block_size_controls_block_count() {
    let document = vec![0x5Au8; 1000];
    let seeds = ContainerSeeds::random().unwrap();
    let small_blocks = encrypt_document(
        &document,
        &password_credentials(),
        &options().with_compression(Compression::None).with_block_size(100),
        &seeds,
    )
    .unwrap();
    let one_block = encrypt_document(
        &document,
        &password_credentials(),
        &options().with_compression(Compression::None),
        &seeds,
    )
    .unwrap();

    // 10 blocks + terminator vs 1 block + terminator, 40 bytes of block header each
    assert!(small_blocks.len() >= one_block.len() + 9 * 40 - 16);
    assert!(small_blocks.len() <= one_block.len() + 9 * 40 + 16);
}
