use polyshare::{Csprng, reconstruct, split};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_reconstruct(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconstruct 400-of-1000");
    group.sample_size(10);

    let mut rng = Csprng::from_seed([0x42; 32]);

    for len in [2usize, 16, 64, 128] {
        let set = split(&vec![0x61u8; len], 400, 1000, &mut rng).unwrap();
        let shares = &set.shares()[300..700];

        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| reconstruct(black_box(shares), 400))
        });
    }

    group.finish();
}

pub fn bench_reconstruct_checked(c: &mut Criterion) {
    let mut rng = Csprng::from_seed([0x17; 32]);
    let set = split(&[0x61u8; 32], 3, 5, &mut rng).unwrap();

    c.bench_function("reconstruct 3-of-5 32 bytes, all shares", |b| {
        b.iter(|| reconstruct(black_box(set.shares()), 3))
    });
}

criterion_group!(benches, bench_reconstruct, bench_reconstruct_checked);
criterion_main!(benches);
