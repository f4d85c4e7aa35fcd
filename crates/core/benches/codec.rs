use criterion::{black_box, criterion_group, criterion_main, Criterion};
use huffpack_core::{compress_bytes, decompress_bytes, FrequencyMap, HuffmanTree};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn text_like(size: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let alphabet = b"abcdefghijklmnopqrstuvwxyz .!,\n";
    (0..size)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

fn tree_benchmark(c: &mut Criterion) {
    let input: Vec<u8> = (0..=255u8).cycle().take(64 * 1024).collect();
    let frequencies = FrequencyMap::from_bytes(&input);

    c.bench_function("build tree full alphabet", |b| {
        b.iter(|| HuffmanTree::build(black_box(&frequencies)))
    });
}

fn codec_benchmark(c: &mut Criterion) {
    let input = text_like(64 * 1024);
    let artifact = compress_bytes(&input).unwrap().artifact;

    c.bench_function("compress 64 KiB text", |b| {
        b.iter(|| compress_bytes(black_box(&input)))
    });

    c.bench_function("decompress 64 KiB text", |b| {
        b.iter(|| decompress_bytes(black_box(&artifact)))
    });
}

criterion_group!(benches, tree_benchmark, codec_benchmark);
criterion_main!(benches);
