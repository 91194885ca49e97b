use plexus_core::rng::RngHandle;

#[test]
fn rng_emits_reproducible_sequence() {
    let mut rng_a = RngHandle::from_seed(1234);
    let mut rng_b = RngHandle::from_seed(1234);

    let seq_a: Vec<f64> = (0..100).map(|_| rng_a.uniform()).collect();
    let seq_b: Vec<f64> = (0..100).map(|_| rng_b.uniform()).collect();
    assert_eq!(seq_a, seq_b);

    let coins_a: Vec<bool> = (0..100).map(|_| rng_a.accept(0.3)).collect();
    let coins_b: Vec<bool> = (0..100).map(|_| rng_b.accept(0.3)).collect();
    assert_eq!(coins_a, coins_b);
}

#[test]
fn bernoulli_extremes_are_exact() {
    let mut rng = RngHandle::from_seed(9);
    assert!((0..1_000).all(|_| !rng.accept(0.0)));
    assert!((0..1_000).all(|_| rng.accept(1.0)));
}

#[test]
fn uniform_stays_in_unit_interval() {
    let mut rng = RngHandle::from_seed(5);
    for _ in 0..1_000 {
        let x = rng.uniform();
        assert!((0.0..1.0).contains(&x));
    }
}
