// benches/roundtrip.rs
//! Round-trip (encrypt → decrypt) benchmarks over in-memory buffers

use aescfb::{decrypt, encrypt};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::io::Cursor;

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
    let passphrase = b"benchmark-passphrase";

    for &size in &[KB, 64 * KB, MB, 10 * MB] {
        let input = vec![0x41u8; size];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("size", format_size(size)), &size, |b, _| {
            b.iter(|| {
                let mut encrypted = Vec::with_capacity(size + 16);
                encrypt(Cursor::new(black_box(&input)), &mut encrypted, passphrase).unwrap();

                let mut decrypted = Vec::with_capacity(size);
                decrypt(Cursor::new(&encrypted), &mut decrypted, passphrase).unwrap();
                black_box(decrypted);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_roundtrip);
criterion_main!(benches);
