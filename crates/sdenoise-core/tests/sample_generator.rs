use sdenoise_core::{SampleGenerator, State};

#[test]
fn seed_reproducibility() {
    let mut a = SampleGenerator::new(12345);
    let mut b = SampleGenerator::new(12345);
    for _ in 0..100 {
        assert_eq!(a.uniform(3), b.uniform(3));
    }
    assert_eq!(a.seed(), Some(12345));
    assert_eq!(SampleGenerator::from_entropy().seed(), None);
}

#[test]
fn path_streams_differ() {
    let mut a = SampleGenerator::from_path_id(42, 0);
    let mut b = SampleGenerator::from_path_id(42, 1);
    assert_ne!(a.uniform(8), b.uniform(8));

    let mut c = SampleGenerator::from_path_id(42, 1);
    let mut d = SampleGenerator::from_path_id(42, 1);
    assert_eq!(c.uniform(8), d.uniform(8));
}

#[test]
fn uniform_range() {
    let mut rng = SampleGenerator::new(42);
    let sample = rng.uniform(10_000);
    assert_eq!(sample.dim(), 10_000);
    for &value in sample.iter() {
        assert!((0.0..1.0).contains(&value), "Uniform value {} outside [0, 1)", value);
    }
}

#[test]
fn perturbation_stays_within_half_unit() {
    let mut rng = SampleGenerator::new(7);
    let u = State::new(vec![1.0, -3.0, 100.0]);
    for _ in 0..1000 {
        let v = rng.perturb(&u);
        assert_eq!(v.dim(), u.dim());
        for (vi, ui) in v.iter().zip(u.iter()) {
            let delta = vi - ui;
            assert!((-0.5 - 1e-12..0.5 + 1e-12).contains(&delta), "perturbation {} out of range", delta);
        }
    }
}

#[test]
fn empty_state() {
    let mut rng = SampleGenerator::new(1);
    assert_eq!(rng.uniform(0).dim(), 0);
    assert_eq!(rng.perturb(&State::zeros(0)).dim(), 0);
}
