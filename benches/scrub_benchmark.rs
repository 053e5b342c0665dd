//! Benchmarks for the fairhire scrub pipeline.
//!
//! Run with: cargo bench
//!
//! These benchmarks test normalization and redaction at various resume sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Creates a synthetic resume with the given number of experience entries.
fn create_test_resume(entry_count: usize) -> String {
    let mut text = String::from(
        "John Doe\n123 Main Street\nBoston, MA 02134\njohn@example.com\n(617) 555-0100\n\n",
    );

    for i in 0..entry_count {
        text.push_str(&format!(
            "(cid:127)Software Engineer at Company {}, 2015n2019\n\
             Shipped   features  and mentored juniors.\n\
             Contact ref{}@example.com or 555-123-4567.\n\n\n\n",
            i, i
        ));
    }

    text.push_str("Boston University\nhttps://linkedin.com/in/johndoe\n");
    text
}

/// Benchmark text normalization at various sizes.
fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for entry_count in [10, 100, 500].iter() {
        let text = create_test_resume(*entry_count);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("entries", entry_count),
            &text,
            |b, text| {
                b.iter(|| fairhire::normalize(black_box(text)));
            },
        );
    }

    group.finish();
}

/// Benchmark the full redaction pass sequence.
fn bench_scrub(c: &mut Criterion) {
    let mut group = c.benchmark_group("scrub");

    for entry_count in [10, 100, 500].iter() {
        let text = fairhire::normalize(&create_test_resume(*entry_count));
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("entries", entry_count),
            &text,
            |b, text| {
                b.iter(|| fairhire::scrub(black_box(text), Some("John Doe"), Some("Boston")));
            },
        );
    }

    group.finish();
}

/// Benchmark the end-to-end pipeline (normalize + scrub + record).
fn bench_process_resume(c: &mut Criterion) {
    let text = create_test_resume(100);

    c.bench_function("process_resume", |b| {
        b.iter(|| fairhire::process_resume(black_box(&text), Some("John Doe"), Some("Boston")));
    });
}

criterion_group!(benches, bench_normalize, bench_scrub, bench_process_resume);
criterion_main!(benches);
