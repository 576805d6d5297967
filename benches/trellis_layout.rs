//! Benchmarks for trellis layout
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use trellis_view::protocol::{decode_response, encode_response};
use trellis_view::types::{Bit, CandidatePath, DecodeResponse};
use trellis_view::{required_canvas_width, TrellisGeometry};

fn alternating(len: usize) -> Vec<Bit> {
    (0..len)
        .map(|i| if i % 3 == 0 { Bit::One } else { Bit::Zero })
        .collect()
}

fn bench_layout_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_path");
    let geometry = TrellisGeometry::new(250.0, 100.0);

    for depth in [8, 64, 512].iter() {
        let branches = alternating(*depth);
        group.throughput(Throughput::Elements(*depth as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, &depth| {
            b.iter(|| {
                geometry.layout_path(
                    black_box(&branches),
                    black_box(depth.saturating_sub(2)),
                    black_box(-12.5),
                )
            })
        });
    }

    group.finish();
}

fn bench_canvas_width(c: &mut Criterion) {
    let paths: Vec<CandidatePath> = (1..200)
        .map(|len| CandidatePath::new(alternating(len), -(len as f64)))
        .collect();

    c.bench_function("required_canvas_width_200_paths", |b| {
        b.iter(|| required_canvas_width(black_box(&paths), 100.0, 50.0))
    });
}

fn bench_decode_response(c: &mut Criterion) {
    let response = DecodeResponse {
        encoded: alternating(1024),
        observed: alternating(1024),
        decoded: alternating(512),
        memory_length: 2,
        paths: (0..64)
            .map(|i| CandidatePath::new(alternating(512), -(i as f64)))
            .collect(),
    };
    let bytes = encode_response(&response).unwrap();

    c.bench_function("decode_response_64_paths", |b| {
        b.iter(|| decode_response(black_box(&bytes)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_layout_path,
    bench_canvas_width,
    bench_decode_response
);
criterion_main!(benches);
