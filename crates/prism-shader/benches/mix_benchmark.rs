//! Mix RGB benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use prism_core::Color;
use prism_shader::{mix_rgb, BlendMode};

const BASE: Color = Color::rgb(0.8, 0.35, 0.1);
const LAYER: Color = Color::rgb(0.2, 0.6, 0.9);

fn mix_all_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("mix_rgb");
    for mode in BlendMode::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(mode), &mode, |b, &mode| {
            b.iter(|| mix_rgb(black_box(mode), true, black_box(0.5), black_box(BASE), black_box(LAYER)))
        });
    }
    group.finish();
}

criterion_group!(benches, mix_all_modes);
criterion_main!(benches);
