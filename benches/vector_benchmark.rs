use axial::{dot, mag2, Absent, Vector};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn dot_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dot Product");

    // 1. Sparse vector, only X and Z stored
    group.bench_function("Vector<f32, Absent, f32>::dot", |b| {
        let v = Vector::new(1.5f32, Absent, -2.0f32);
        let w = Vector::new(0.25f32, Absent, 4.0f32);
        b.iter(|| black_box(dot(black_box(v), black_box(w))));
    });

    // 2. Same data in a dense vector with a zero Y
    group.bench_function("Vector<f32, f32, f32>::dot", |b| {
        let v = Vector::new(1.5f32, 0.0f32, -2.0f32);
        let w = Vector::new(0.25f32, 0.0f32, 4.0f32);
        b.iter(|| black_box(dot(black_box(v), black_box(w))));
    });

    // 3. Hand-written array baseline
    group.bench_function("[f32; 2]::manual", |b| {
        let v = [1.5f32, -2.0f32];
        let w = [0.25f32, 4.0f32];
        b.iter(|| {
            let (v, w) = (black_box(v), black_box(w));
            black_box(v[0] * w[0] + v[1] * w[1])
        });
    });

    group.finish();
}

fn accumulate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Accumulate");

    for size in [1_000usize, 100_000] {
        let planar: Vec<Vector<f64, f64, Absent>> = (0..size)
            .map(|i| Vector::new(i as f64, (size - i) as f64, Absent))
            .collect();
        let lift = Vector::new(Absent, Absent, 1.0f64);

        group.bench_with_input(BenchmarkId::new("pass_through_sum", size), &planar, |b, data| {
            b.iter(|| {
                let mut acc = Vector::new(0.0f64, 0.0f64, 0.0f64);
                for &p in data {
                    acc = acc + (p + lift);
                }
                black_box(acc)
            });
        });

        group.bench_with_input(BenchmarkId::new("scaled_mag2", size), &planar, |b, data| {
            b.iter(|| {
                let mut total = 0.0f64;
                for &p in data {
                    total += mag2(p * 0.5f64);
                }
                black_box(total)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, dot_benchmark, accumulate_benchmark);
criterion_main!(benches);
