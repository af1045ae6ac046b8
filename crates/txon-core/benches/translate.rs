//! Throughput of the TXON reader, writer and JSON serializer on a generated
//! document of repeated records.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use txon_core::{json_to_txon, read, to_json, write, Layout};

/// A TXON document with `n` person records wrapped in prose.
fn sample_document(n: usize) -> String {
    let mut doc = String::from("Directory export, generated for benchmarking.\n");
    for i in 0..n {
        doc.push_str(&format!(
            "person:`name:`Person {i}` id:`{i}` tags:`:`staff` :`site-{}`` note:`uses \\`code\\``` \n",
            i % 7
        ));
    }
    doc
}

fn bench_translate(c: &mut Criterion) {
    let doc = sample_document(500);
    let tree = read(&doc);
    let json = to_json(&tree, Layout::Linear);

    c.bench_function("read", |b| b.iter(|| read(black_box(&doc))));
    c.bench_function("write_indented", |b| {
        b.iter(|| write(black_box(&tree), Layout::Indented))
    });
    c.bench_function("to_json_linear", |b| {
        b.iter(|| to_json(black_box(&tree), Layout::Linear))
    });
    c.bench_function("json_to_txon", |b| {
        b.iter(|| json_to_txon(black_box(&json), Layout::Linear))
    });
}

criterion_group!(benches, bench_translate);
criterion_main!(benches);
