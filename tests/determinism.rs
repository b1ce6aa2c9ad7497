//! End-to-end reproducibility of a full benchmark run.

use simd_advantage::driver::{run, RunConfig};
use simd_advantage::kernels::{axpy, Number};
use simd_advantage::prep::{prep_array, SeedSequence};
use simd_advantage::registry::build_registry;

fn scenario() -> RunConfig {
    RunConfig {
        trials: 12,
        length: 16,
        scale: 200.0,
        coeff: 12.3,
        master_seed: 1234567,
    }
}

#[test]
fn two_runs_with_same_master_seed_are_identical() {
    let registry = build_registry();
    let cfg = scenario();

    let first = run(&cfg, &registry);
    let second = run(&cfg, &registry);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.trials, 12);
        // Bitwise equality: same seeds, same arrays, same results
        assert_eq!(a.samples, b.samples, "kernel {} diverged", a.name);
    }
}

#[test]
fn every_trial_array_is_reproducible() {
    let cfg = scenario();
    let seeds = SeedSequence::generate(cfg.master_seed, cfg.trials);

    for &seed in seeds.as_slice() {
        let mut a: Vec<Number> = vec![0.0; cfg.length];
        let mut b: Vec<Number> = vec![0.0; cfg.length];
        prep_array(&mut a, seed, cfg.scale);
        prep_array(&mut b, seed, cfg.scale);

        assert_eq!(a, b);
        for &v in &a {
            assert!(v >= 0.0 && v < cfg.scale);
        }

        let y1 = axpy(&a, cfg.coeff);
        let y2 = axpy(&b, cfg.coeff);
        assert_eq!(y1, y2);
    }
}

#[test]
fn averages_stay_finite_across_configs() {
    let registry = build_registry();
    for trials in [1, 3, 12] {
        for length in [0, 1, 16, 1024] {
            let cfg = RunConfig {
                trials,
                length,
                ..scenario()
            };
            for report in run(&cfg, &registry) {
                assert!(report.avg_ticks.is_finite());
                assert!(report.avg_ticks >= 0.0);
            }
        }
    }
}
