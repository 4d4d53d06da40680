//! Criterion microbenches for qrschema.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure the performance of:
//! - Schema JSON parsing (from_json_str, from_json_slice)
//! - Schema JSON formatting (to_json_string)
//! - QR rendering of a single payload

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

use qrschema::schema::io_json::{from_json_slice, from_json_str, to_json_string};
use qrschema::schema::{Entry, SchemaDocument};
use qrschema::symbol::{QrEncoder, SymbolEncoder, DEFAULT_MODULE_SCALE};

fn sample_document(entries: usize) -> SchemaDocument {
    (0..entries)
        .map(|i| {
            Entry::new(
                format!("code_{:04}.png", i),
                format!("https://example.com/items/{}?ref=bench", i),
            )
        })
        .collect()
}

/// Benchmark schema parsing from string.
fn bench_schema_parse_str(c: &mut Criterion) {
    let json = to_json_string(&sample_document(500)).unwrap();
    let mut group = c.benchmark_group("schema_parse");
    group.throughput(Throughput::Bytes(json.len() as u64));

    group.bench_function("from_json_str", |b| {
        b.iter(|| {
            let doc = from_json_str(black_box(&json)).unwrap();
            black_box(doc)
        })
    });

    group.finish();
}

/// Benchmark schema parsing from byte slice.
fn bench_schema_parse_slice(c: &mut Criterion) {
    let json = to_json_string(&sample_document(500)).unwrap();
    let bytes = json.as_bytes();
    let mut group = c.benchmark_group("schema_parse");
    group.throughput(Throughput::Bytes(bytes.len() as u64));

    group.bench_function("from_json_slice", |b| {
        b.iter(|| {
            let doc = from_json_slice(black_box(bytes)).unwrap();
            black_box(doc)
        })
    });

    group.finish();
}

/// Benchmark schema formatting.
fn bench_schema_format(c: &mut Criterion) {
    let document = sample_document(500);
    let mut group = c.benchmark_group("schema_format");
    group.throughput(Throughput::Elements(document.len() as u64));

    group.bench_function("to_json_string", |b| {
        b.iter(|| {
            let json = to_json_string(black_box(&document)).unwrap();
            black_box(json)
        })
    });

    group.finish();
}

/// Benchmark rendering one payload to a raster.
fn bench_qr_render(c: &mut Criterion) {
    let payload = "https://example.com/items/42?ref=bench";

    c.bench_function("qr_render", |b| {
        b.iter(|| {
            let image = QrEncoder
                .encode(black_box(payload), DEFAULT_MODULE_SCALE)
                .unwrap();
            black_box(image)
        })
    });
}

criterion_group!(
    benches,
    bench_schema_parse_str,
    bench_schema_parse_slice,
    bench_schema_format,
    bench_qr_render,
);
criterion_main!(benches);
