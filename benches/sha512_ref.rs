use criterion::{Criterion, criterion_group, criterion_main};
use sha2::{Digest, Sha512};
use std::hint::black_box;

pub fn bench_sha2_crate(c: &mut Criterion) {
    let data = [0u8; 128];

    c.bench_function("sha2::Sha512 128 bytes", |b| {
        b.iter(|| {
            let mut hasher = Sha512::new();
            hasher.update(black_box(&data));
            let _ = hasher.finalize();
        })
    });
}

criterion_group!(benches, bench_sha2_crate);
criterion_main!(benches);
