// benches/roundtrip.rs
//! Round-trip (encrypt → decrypt) benchmarks with fixed seeds

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kdbx3_rs::{
    decrypt, encrypt_with_fixed_seeds, ContainerSeeds, Credentials, EncryptOptions,
};
use std::hint::black_box;
use std::io::Cursor;

const TRANSFORM_ROUNDS: u64 = 1_000;

// --- Size constants ---
const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn format_size(bytes: usize) -> String {
    if bytes >= MB {
        format!("{} MiB", bytes / MB)
    } else if bytes >= KB {
        format!("{} KiB", bytes / KB)
    } else {
        format!("{bytes} B")
    }
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");

    let credentials = Credentials::new().with_password("benchmark-password");
    let options = EncryptOptions::new().with_transform_rounds(TRANSFORM_ROUNDS);
    let seeds = ContainerSeeds::new([1; 32], [2; 32], [3; 16], [4; 32], [5; 32]);

    let sizes = [KB, 64 * KB, MB, 10 * MB];

    for &size in &sizes {
        let input = vec![0x41u8; size]; // repeating 'A'

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::new("size", format_size(size)),
            &size,
            |b, _| {
                b.iter(|| {
                    // ----- encrypt -------------------------------------------------
                    let mut encrypted = Vec::with_capacity(size + 1024);
                    encrypt_with_fixed_seeds(
                        Cursor::new(black_box(&input)),
                        &mut encrypted,
                        &credentials,
                        &options,
                        &seeds,
                    )
                    .unwrap();

                    // ----- decrypt -------------------------------------------------
                    let mut decrypted = Vec::with_capacity(size);
                    decrypt(Cursor::new(black_box(&encrypted)), &mut decrypted, &credentials)
                        .unwrap();

                    black_box(decrypted);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_roundtrip);
criterion_main!(benches);
