use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use flavornet::config::RenderConfig;
use flavornet::dashboard::{render, DataContext, Selection};
use flavornet::data::{filter_by_threshold, rescale, EdgeRecord};

/// Dense co-occurrence table over `n` ingredients
fn edge_table(n: usize) -> Vec<EdgeRecord> {
    let mut edges = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            let weight = ((i * 31 + j * 17) % 100) as f64 / 100.0;
            edges.push(EdgeRecord::new(format!("ingredient{}", i), format!("ingredient{}", j), weight));
        }
    }
    edges
}

/// Benchmark threshold filtering followed by rescaling
fn bench_filter_rescale(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_rescale");

    for size in [50, 200, 500].iter() {
        let edges = edge_table(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let filtered = filter_by_threshold(&edges, 0.5);
                criterion::black_box(rescale(&filtered, 12.0));
            });
        });
    }
    group.finish();
}

/// Benchmark a full render (filter, layout, figures)
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    for size in [50, 150].iter() {
        let ctx = DataContext::new(edge_table(*size));
        let selection = Selection::new(0.8, Some("ingredient3".to_string())).unwrap();
        let config = RenderConfig::default();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| criterion::black_box(render(&selection, &ctx, &config)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_filter_rescale, bench_render);
criterion_main!(benches);
