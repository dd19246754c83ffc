//! Benchmarks for BIDR-RS operations.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use bidr_bench::linear_samples;
use bidr_chroma::basis::build_basis;
use bidr_chroma::isd::{IsdEstimator, IsdSource};
use bidr_chroma::log::to_log_batch;
use bidr_chroma::model::Illuminants;
use bidr_chroma::project::project;
use bidr_core::{Direction, EngineConfig, Plane};
use bidr_math::Vec3;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// Benchmark the batch log transform.
fn bench_to_log(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_log_batch");
    let cfg = EngineConfig::synthetic();

    for size in SIZES {
        let samples = linear_samples(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &samples, |b, s| {
            b.iter(|| to_log_batch(black_box(s), cfg.eps))
        });
    }

    group.finish();
}

/// Benchmark batch projection onto the chromaticity plane.
fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("project");
    let cfg = EngineConfig::synthetic();
    let basis = match Illuminants::skylight_sun().isd(&cfg) {
        Ok(isd) => build_basis(isd),
        Err(e) => panic!("benchmark ISD: {e}"),
    };

    for size in SIZES {
        let points = to_log_batch(&linear_samples(size), cfg.eps);
        let plane = Plane::new(Vec3::splat(-1.0), &basis);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &points, |b, p| {
            b.iter(|| project(black_box(p), &plane))
        });
    }

    group.finish();
}

/// Benchmark basis construction for both helper-axis branches.
fn bench_basis(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_basis");
    let typical = Direction::normalize(Vec3::new(0.7, 0.5, 0.1), 1e-6, 1e-12, "bench")
        .unwrap_or(Direction::Z);

    group.bench_function("x_helper", |b| b.iter(|| build_basis(black_box(typical))));
    group.bench_function("y_helper", |b| b.iter(|| build_basis(black_box(Direction::X))));

    group.finish();
}

/// Benchmark ISD estimation per input variant.
fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate");
    let cfg = EngineConfig::synthetic();
    let estimator = IsdEstimator::new(cfg);
    let illum = Illuminants::skylight_sun();

    let lit_lin = linear_samples(10_000);
    let shadow_lin: Vec<Vec3> = lit_lin.iter().map(|&l| l * illum.shadow_ratio()).collect();
    let lit = to_log_batch(&lit_lin, cfg.eps);
    let shadow = to_log_batch(&shadow_lin, cfg.eps);

    let sources = [
        IsdSource::SamplePairs { lit: &lit, shadow: &shadow },
        IsdSource::ClusterMeans { lit: &lit, shadow: &shadow },
        IsdSource::IlluminantVectors {
            ambient: illum.ambient,
            direct: illum.direct,
        },
    ];
    for source in &sources {
        group.bench_with_input(BenchmarkId::from_parameter(source.name()), source, |b, s| {
            b.iter(|| estimator.estimate(black_box(s)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_to_log, bench_project, bench_basis, bench_estimate);
criterion_main!(benches);
