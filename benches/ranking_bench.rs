//! Criterion benchmarks for the Sherpa ranking path.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};

use sherpa::document::{Article, Category};
use sherpa::embedding::{HashEmbedder, TextEmbedder, cosine_similarity};
use sherpa::intent::IntentDetector;
use sherpa::recommend::{Ranker, RecommendConfig, ScoringEngine};

/// Generate a synthetic knowledge base for benchmarking.
fn generate_articles(count: usize) -> Vec<Article> {
    let topics = [
        ("delivery", Category::Shipping, "delivery tracking courier dispatch delay"),
        ("refund", Category::Product, "refund return exchange damaged replacement"),
        ("billing", Category::Billing, "payment invoice card charge transaction"),
        ("account", Category::Account, "password login account profile access"),
        ("product", Category::Product, "size color quality stock availability"),
    ];

    let embedder = HashEmbedder::new();
    (0..count)
        .map(|i| {
            let (name, category, vocab) = topics[i % topics.len()];
            let title = format!("{name} guide {i}");
            let content = format!("{vocab} article number {i}");
            let embedding = embedder.embed(&format!("{title} {content}")).unwrap();
            Article {
                id: format!("art_{i}"),
                title,
                content,
                category,
                tags: vec![],
                embedding,
            }
        })
        .collect()
}

fn build_ranker() -> Ranker {
    Ranker::new(ScoringEngine::new(
        Arc::new(HashEmbedder::new()),
        IntentDetector::default(),
        RecommendConfig::default(),
    ))
}

fn bench_embedding(c: &mut Criterion) {
    let embedder = HashEmbedder::new();
    let mut group = c.benchmark_group("embedding");
    group.throughput(Throughput::Elements(1));
    group.bench_function("embed_short_text", |b| {
        b.iter(|| embedder.embed(black_box("my package is delayed and has not arrived")))
    });
    group.finish();
}

fn bench_cosine(c: &mut Criterion) {
    let embedder = HashEmbedder::new();
    let a = embedder.embed("delivery tracking question").unwrap();
    let b_vec = embedder.embed("refund and exchange question").unwrap();

    c.bench_function("cosine_similarity_256", |bencher| {
        bencher.iter(|| cosine_similarity(black_box(&a), black_box(&b_vec)))
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = build_ranker();
    let mut group = c.benchmark_group("ranking");

    for size in [100, 500, 2000] {
        let articles = generate_articles(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("rank_top3_{size}_articles"), |b| {
            b.iter(|| {
                ranker.rank(
                    black_box("my package is delayed and has not arrived"),
                    black_box(&articles),
                    3,
                    None,
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_embedding, bench_cosine, bench_ranking);
criterion_main!(benches);
