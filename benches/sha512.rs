use shacrypt::hash::sha512;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_sha512(c: &mut Criterion) {
    c.bench_function("sha512 128 bytes", |b| {
        b.iter(|| sha512(black_box(&[0u8; 128])))
    });
}

criterion_group!(benches, bench_sha512);
criterion_main!(benches);
