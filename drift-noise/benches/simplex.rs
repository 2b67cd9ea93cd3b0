#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use drift_noise::noise::{PeriodicNoise, fbm2, noise2, noise3, noise4};
use std::hint::black_box;

/// Sample a square grid so every simplex branch is exercised.
fn grid(side: u32) -> impl Iterator<Item = (f64, f64)> {
    (0..side).flat_map(move |ix| {
        (0..side).map(move |iy| (f64::from(ix) * 0.37 - 50.0, f64::from(iy) * 0.41 + 12.0))
    })
}

// ── Kernels ─────────────────────────────────────────────────────────────────

fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplex_kernel");
    group.throughput(criterion::Throughput::Elements(64 * 64));

    group.bench_function("noise2", |b| {
        b.iter(|| {
            for (x, y) in grid(64) {
                black_box(noise2(black_box(x), black_box(y)));
            }
        });
    });
    group.bench_function("noise3", |b| {
        b.iter(|| {
            for (x, y) in grid(64) {
                black_box(noise3(black_box(x), black_box(y), black_box(x - y)));
            }
        });
    });
    group.bench_function("noise4", |b| {
        b.iter(|| {
            for (x, y) in grid(64) {
                let (z, w) = (x - y, y * 0.5);
                black_box(noise4(black_box(x), black_box(y), black_box(z), black_box(w)));
            }
        });
    });
    group.finish();
}

// ── Wrappers ────────────────────────────────────────────────────────────────

fn bench_fbm_octaves(c: &mut Criterion) {
    let mut group = c.benchmark_group("fbm2_octaves");
    for octaves in [1u32, 3, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(octaves), &octaves, |b, &o| {
            b.iter(|| {
                for (x, y) in grid(32) {
                    black_box(fbm2(black_box(x), black_box(y), o));
                }
            });
        });
    }
    group.finish();
}

fn bench_periodic_cycle(c: &mut Criterion) {
    let noise = PeriodicNoise::default();

    c.bench_function("periodic_cycle_1024", |b| {
        b.iter(|| {
            for n in 0..1024u32 {
                black_box(noise.sample(black_box(f64::from(n) / 1024.0)));
            }
        });
    });
}

criterion_group!(benches, bench_kernels, bench_fbm_octaves, bench_periodic_cycle);
criterion_main!(benches);
