//! Benchmarks for the filtered paginator
//!
//! Run with: cargo bench --package browse
//!
//! This benchmarks the page-step against a synthetic catalog large enough
//! that the per-load filter scan dominates.

use browse::{SearchQuery, load_next_page};
use catalog::{College, CollegeCatalog};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn build_catalog(n: usize) -> CollegeCatalog {
    let cities = ["Chennai", "Delhi", "Mumbai", "Pune", "Kolkata", "Bengaluru"];
    let colleges = (0..n)
        .map(|i| College {
            name: format!("Institute of Technology {:05}", i),
            rating: 5.0 + (i % 50) as f32 / 10.0,
            fees: 100_000 + (i as u32) * 37,
            location: cities[i % cities.len()].to_string(),
            user_rating: (i % 11) as f32,
            featured: i % 7 == 0,
        })
        .collect();
    CollegeCatalog::from_colleges(colleges).expect("synthetic catalog is valid")
}

fn bench_unfiltered_page(c: &mut Criterion) {
    let catalog = build_catalog(10_000);
    let query = SearchQuery::default();

    c.bench_function("load_page_unfiltered_10k", |b| {
        b.iter(|| {
            let step = load_next_page(
                black_box(&catalog),
                black_box(&query),
                black_box(50),
                black_box(10),
                false,
                true,
            );
            black_box(step)
        })
    });
}

fn bench_filtered_page(c: &mut Criterion) {
    let catalog = build_catalog(10_000);
    let query = SearchQuery::new("chennai");

    c.bench_function("load_page_filtered_10k", |b| {
        b.iter(|| {
            let step = load_next_page(
                black_box(&catalog),
                black_box(&query),
                black_box(5),
                black_box(10),
                false,
                true,
            );
            black_box(step)
        })
    });
}

fn bench_query_match(c: &mut Criterion) {
    let catalog = build_catalog(10_000);
    let query = SearchQuery::new("00421");

    c.bench_function("query_full_scan_10k", |b| {
        b.iter(|| {
            let count = catalog.iter().filter(|col| query.matches(col)).count();
            black_box(count)
        })
    });
}

criterion_group!(
    benches,
    bench_unfiltered_page,
    bench_filtered_page,
    bench_query_match
);
criterion_main!(benches);
