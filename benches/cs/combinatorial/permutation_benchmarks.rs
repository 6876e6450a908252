use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use recursive_algos::cs::combinatorial::{permutations, permute_iterative, DuplicatePolicy};

const ALPHABET: &str = "abcdefgh";

fn bench_permutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("permutations");

    for len in 4..=ALPHABET.len() {
        let input = &ALPHABET[..len];

        group.bench_with_input(BenchmarkId::new("recursive_keep", len), input, |b, s| {
            b.iter(|| permutations(black_box(s), DuplicatePolicy::Keep))
        });
        group.bench_with_input(BenchmarkId::new("recursive_unique", len), input, |b, s| {
            b.iter(|| permutations(black_box(s), DuplicatePolicy::Unique))
        });
        group.bench_with_input(BenchmarkId::new("heap_iterative", len), input, |b, s| {
            b.iter(|| permute_iterative(black_box(s)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_permutations);
criterion_main!(benches);
