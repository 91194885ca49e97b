use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plexus_core::rng::RngHandle;
use plexus_gen::{random_flag_complex, random_flag_complex_d2, random_simplicial_complex};

fn generators_bench(c: &mut Criterion) {
    c.bench_function("random_simplicial_complex_30", |b| {
        b.iter(|| {
            let mut rng = RngHandle::from_seed(42);
            let complex = random_simplicial_complex(30, &[0.1, 0.01], &mut rng).unwrap();
            black_box(complex);
        });
    });

    c.bench_function("random_flag_complex_200", |b| {
        b.iter(|| {
            let mut rng = RngHandle::from_seed(42);
            let complex = random_flag_complex(200, 0.05, Some(3), &mut rng).unwrap();
            black_box(complex);
        });
    });

    c.bench_function("random_flag_complex_d2_200", |b| {
        b.iter(|| {
            let mut rng = RngHandle::from_seed(42);
            let complex = random_flag_complex_d2(200, 0.05, &mut rng).unwrap();
            black_box(complex);
        });
    });
}

criterion_group!(benches, generators_bench);
criterion_main!(benches);
