//! Criterion benchmarks for full-layout analysis on scattered triangles.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use laycheck::gen::{scatter_triangles, ReplayToken, ScatterCfg};
use laycheck::geom::Rect;
use laycheck::process::GeometryProcessor;

fn scattered_processor(n: usize, seed: u64) -> GeometryProcessor {
    let world = Rect::new(0.0, 0.0, 1000.0, 1000.0).unwrap();
    let mut processor = GeometryProcessor::new(world);
    let triangles = scatter_triangles(
        world,
        ScatterCfg {
            count: n,
            width: 4.0,
            height: 3.0,
            size_jitter: 0.5,
            ..ScatterCfg::default()
        },
        ReplayToken::new(seed, 0),
    );
    for t in triangles {
        processor.add_component(t).expect("triangle inside world");
    }
    processor
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");
    for &n in &[200usize, 1_000] {
        group.bench_with_input(BenchmarkId::new("analyze", n), &n, |b, &n| {
            let processor = scattered_processor(n, 46);
            b.iter(|| processor.analyze(30.0, 1.0))
        });
        group.bench_with_input(BenchmarkId::new("optimize", n), &n, |b, &n| {
            let processor = scattered_processor(n, 47);
            b.iter(|| processor.optimize())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_analysis);
criterion_main!(benches);
