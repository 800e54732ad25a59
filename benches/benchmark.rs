use criterion::{criterion_group, criterion_main, Criterion};
use tfidf_similarity::{compute_similarity_matrix, SimilarityConfig, SimilarityEngine};

/// tiny deterministic PRNG (xorshift32)
struct Rng(u32);
impl Rng {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }
}

fn synthetic_texts(docs: usize, words_per_doc: usize, vocab: u32) -> Vec<String> {
    let mut rng = Rng(0x1234_5678);
    (0..docs)
        .map(|_| {
            (0..words_per_doc)
                .map(|_| format!("w{}", rng.next_u32() % vocab))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn similarity_matrix_benchmark(c: &mut Criterion) {
    let texts = synthetic_texts(200, 80, 2_000);

    c.bench_function("similarity_matrix_200", |b| {
        b.iter(|| compute_similarity_matrix(&texts));
    });

    let parallel: SimilarityEngine = SimilarityEngine::with_config(SimilarityConfig::new().parallel(true));
    c.bench_function("similarity_matrix_200_parallel", |b| {
        b.iter(|| parallel.compute(&texts));
    });

    let engine: SimilarityEngine = SimilarityEngine::new();
    let fitted = engine.fit(&texts);
    c.bench_function("most_similar_top10", |b| {
        b.iter(|| fitted.most_similar(&texts[0], 10));
    });
}

criterion_group!(benches, similarity_matrix_benchmark);
criterion_main!(benches);
