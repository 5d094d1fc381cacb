use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sitelist::feed::{NeverFail, synthesize_page};
use sitelist::{FeedConfig, ItemStore, WebViewProvidable, WebViewProvider};

/// Page synthesis and growth
fn benchmark_feed(c: &mut Criterion) {
    let mut group = c.benchmark_group("feed");

    group.bench_function("synthesize_page", |b| {
        b.iter(|| black_box(synthesize_page(black_box(0..20))))
    });

    group.bench_function("initial_store", |b| {
        b.iter(|| {
            black_box(ItemStore::with_failure_source(
                FeedConfig::default(),
                Box::new(NeverFail),
            ))
        })
    });

    group.finish();
}

/// Web view creation against an already built pool
fn benchmark_web_views(c: &mut Criterion) {
    let provider = WebViewProvider::new();
    provider.create_web_view().ok();

    c.bench_function("create_web_view", |b| {
        b.iter(|| black_box(provider.create_web_view()))
    });
}

criterion_group!(benches, benchmark_feed, benchmark_web_views);
criterion_main!(benches);
