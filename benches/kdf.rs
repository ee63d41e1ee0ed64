//! benches/kdf.rs
//! AES-KDF benchmarks – transform rounds and full master key derivation
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kdbx3_rs::aliases::CompositeKey32;
use kdbx3_rs::{derive_master_key_from_parts, transform_key, Credentials};
use std::hint::black_box;
use std::time::Duration;

fn kdf_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("KDF");
    // Faster runs for slow high-round benches
    group.measurement_time(Duration::from_secs(8));
    group.sample_size(20);

    let composite = CompositeKey32::new([0x42; 32]);
    let seed = [0x24u8; 32];

    for &rounds in &[6_000u64, 60_000, 600_000] {
        group.throughput(Throughput::Elements(rounds));
        let id = BenchmarkId::new("aes_kdf_rounds", rounds);
        group.bench_with_input(id, &rounds, |b, &rounds| {
            b.iter(|| black_box(transform_key(black_box(&composite), &seed, rounds)));
        });
    }

    let credentials = Credentials::new()
        .with_password("benchmark-password")
        .with_keyfile(vec![0x5A; 32]);
    group.throughput(Throughput::Elements(60_000));
    group.bench_function("master_key_60000", |b| {
        b.iter(|| {
            black_box(
                derive_master_key_from_parts(&[0x11; 32], &seed, 60_000, black_box(&credentials))
                    .unwrap(),
            )
        });
    });

    group.finish();
}

criterion_group!(benches, kdf_benches);
criterion_main!(benches);
