//! Benchmarks for the weaver pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use weaver::threads::{build_warp, build_weft, NoSlub, SeededSlub};
use weaver::{generate, BuiltinDrafts, Colour, GradientSpec, GradientStop, Layer, Loom, WeaveConfig};

fn gradient() -> GradientSpec {
    GradientSpec::new([
        GradientStop::new(0.0, Colour::rgb(0, 128, 255)),
        GradientStop::new(0.5, Colour::rgb(255, 128, 0)),
        GradientStop::new(0.99, Colour::rgb(0, 128, 255)),
    ])
    .unwrap()
}

// -- Gradient benchmarks --

fn bench_gradient(c: &mut Criterion) {
    let mut group = c.benchmark_group("gradient");
    let spec = gradient();

    group.bench_function("generate_7000", |b| {
        b.iter(|| generate(black_box(&spec), black_box(7000)).unwrap())
    });

    group.finish();
}

// -- Thread buffer benchmarks --

fn bench_threads(c: &mut Criterion) {
    let mut group = c.benchmark_group("threads");
    let colours = generate(&gradient(), 7000).unwrap();
    let cfg = WeaveConfig::new(6, 200, 150).unwrap();

    group.bench_function("warp_200x150", |b| {
        b.iter(|| build_warp(black_box(&colours), &cfg, &mut NoSlub))
    });

    group.bench_function("weft_200x150_slubbed", |b| {
        b.iter(|| build_weft(black_box(&colours), &cfg, &mut SeededSlub::new(42)))
    });

    group.finish();
}

// -- Weaving benchmarks --

fn bench_weave(c: &mut Criterion) {
    let mut group = c.benchmark_group("weave");
    let colours = generate(&gradient(), 7000).unwrap();

    for (name, ends, shots) in [("small", 40, 30), ("large", 200, 150)] {
        let cfg = WeaveConfig::new(6, ends, shots).unwrap();
        let warp = build_warp(&colours, &cfg, &mut NoSlub);
        let weft = build_weft(&colours, &cfg, &mut NoSlub);
        let draft = BuiltinDrafts::get("honeysuckle").unwrap();
        let loom = Loom::new(draft.setup(ends).unwrap(), cfg, Layer::Weft).unwrap();

        group.bench_function(format!("honeysuckle_{}", name), |b| {
            b.iter(|| loom.weave(black_box(&warp), black_box(&weft)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gradient, bench_threads, bench_weave);
criterion_main!(benches);
