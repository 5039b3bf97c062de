//! Benchmarks for inkhue operations.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use ink_color::{hsv_to_rgb, rgb_to_hsv, HsvOffset};
use ink_core::{Document, Frame, Layer, MaterialStyle, MaterialTable, Point, Rgba, Stroke};
use ink_ops::{bulk_apply, parallel, HueSaturation, HueSaturationParams};

fn document(strokes: usize, points: usize) -> Document {
    let mut frame = Frame::new(1);
    for s in 0..strokes {
        let pts = (0..points)
            .map(|i| {
                let t = i as f32 / points as f32;
                Point::default().with_color(Rgba::new(t, 1.0 - t, 0.5, (s % 2) as f32))
            })
            .collect();
        frame.strokes.push(Stroke::from_points(s % 2, pts));
    }
    Document {
        layers: vec![Layer::new("Lines").with_frame(frame)],
        materials: MaterialTable::from(vec![
            MaterialStyle::new("Ink", Rgba::opaque(0.1, 0.1, 0.8), Rgba::opaque(0.9, 0.2, 0.1)),
            MaterialStyle::new("Paper", Rgba::opaque(0.9, 0.9, 0.8), Rgba::TRANSPARENT),
        ]),
    }
}

/// Benchmark the raw colorspace conversion.
fn bench_hsv(c: &mut Criterion) {
    let mut group = c.benchmark_group("hsv");

    for size in [1000, 10000, 100000].iter() {
        let values: Vec<[f32; 3]> = (0..*size)
            .map(|i| {
                let t = i as f32 / *size as f32;
                [t, (t * 7.0) % 1.0, 1.0 - t]
            })
            .collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("roundtrip", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&rgb| hsv_to_rgb(rgb_to_hsv(black_box(rgb)))).collect::<Vec<_>>())
        });

        let offset = HsvOffset::from_target([0.6, 0.8, 1.1]);
        group.bench_with_input(BenchmarkId::new("offset", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&rgb| offset.apply_rgb(black_box(rgb))).collect::<Vec<_>>())
        });
    }

    group.finish();
}

/// Benchmark sequential vs parallel bulk passes.
fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk");
    let m = HueSaturation::new(HueSaturationParams {
        hsv: [0.6, 0.8, 1.1],
        ..HueSaturationParams::default()
    });

    for strokes in [100, 1000, 10000].iter() {
        let doc = document(*strokes, 64);
        group.throughput(Throughput::Elements((*strokes * 64) as u64));

        group.bench_with_input(BenchmarkId::new("sequential", strokes), &doc, |b, d| {
            b.iter_batched_ref(|| d.clone(), |d| bulk_apply(d, &m), criterion::BatchSize::LargeInput)
        });

        group.bench_with_input(BenchmarkId::new("parallel", strokes), &doc, |b, d| {
            b.iter_batched_ref(|| d.clone(), |d| parallel::bulk_apply(d, &m), criterion::BatchSize::LargeInput)
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hsv, bench_bulk);
criterion_main!(benches);
