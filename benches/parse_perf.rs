//! Criterion benchmarks for the extraction pipeline.

use std::hint::black_box;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use quotemill::extract::{NamingRules, classify, parse};
use quotemill::pipeline::{analyze, enrich_all};

const SAMPLES: &[&str] = &[
    "M: The world you see is a projection of the mind.",
    "Q: Who am I? Find out by investigating yourself.",
    "Love is simple and the beginning of wisdom.",
    "Awareness is the witness of consciousness, beyond the void.",
];

fn export(quotes: usize) -> String {
    let mut doc = String::from("# I Am That\n\n### Metadata\n- Author: Someone\n\n### Highlights\n");
    for i in 0..quotes {
        let text = SAMPLES[i % SAMPLES.len()];
        doc.push_str(&format!("- {text} (Location {})\n", i * 3 + 1));
        if i % 5 == 0 {
            doc.push_str("    - **Tags:** #favorite\n");
        }
        if i % 7 == 0 {
            doc.push_str("    - **Note:** Worth returning to.\n");
        }
    }
    doc
}

// =============================================================================
// Parsing
// =============================================================================

fn parse_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [10, 100, 1000] {
        let doc = export(size);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_with_input(BenchmarkId::new("quotes", size), &doc, |b, doc| {
            b.iter(|| parse(black_box(doc)));
        });
    }

    group.finish();
}

// =============================================================================
// Classification and enrichment
// =============================================================================

fn classify_benchmarks(c: &mut Criterion) {
    c.bench_function("classify_single", |b| {
        b.iter(|| classify(black_box(SAMPLES[3])));
    });

    let rules = NamingRules::default();
    let mut group = c.benchmark_group("enrich_all");
    for size in [100, 1000] {
        let records = parse(&export(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("quotes", size), &records, |b, records| {
            b.iter(|| enrich_all(black_box(records.clone()), &rules));
        });
    }
    group.finish();

    let doc = export(1000);
    c.bench_function("analyze_1000", |b| {
        b.iter(|| analyze(black_box(&doc), &rules));
    });
}

criterion_group!(benches, parse_benchmarks, classify_benchmarks);
criterion_main!(benches);
