use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use sle_solver::testcase::random_system;

fn bench_elimination(c: &mut Criterion) {
    let sizes: [(usize, &str); 3] = [(4, "4x4"), (8, "8x8"), (16, "16x16")];

    let mut group = c.benchmark_group("gaussian_elimination");

    for (n, label) in sizes {
        let system = random_system(n, n, 100, 42).expect("build random system");

        group.bench_with_input(BenchmarkId::new("forward", label), &system, |b, s| {
            b.iter(|| {
                let mut sys = black_box(s.clone());
                sys.forward().expect("forward");
                black_box(sys);
            });
        });

        group.bench_with_input(BenchmarkId::new("full_reduce", label), &system, |b, s| {
            b.iter(|| {
                let mut sys = black_box(s.clone());
                sys.forward().expect("forward");
                sys.backward().expect("backward");
                black_box(sys);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_elimination);
criterion_main!(benches);
