//! Benchmark driver: seeds, trial loops, averaged tick counts.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::kernels::Number;
use crate::measure::{self, CpuPinGuard};
use crate::prep::SeedSequence;
use crate::registry::{KernelRegistry, KernelRunner};

/// Compile-time additive perturbation of the wall-clock seed, so parallel
/// invocations built with different offsets produce distinguishable runs.
/// Set with `SEED_OFFSET=<n> cargo build`.
const SEED_OFFSET: Option<&str> = option_env!("SEED_OFFSET");

/// Parameters for one benchmark run. Defaults mirror the profiled
/// program's constants: 12 trials of length-16 arrays filled in [0, 200)
/// with coefficient 12.3.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Trials per kernel section
    pub trials: usize,
    /// Length of every sample buffer
    pub length: usize,
    /// Array preparation scale factor: values are drawn from [0, scale)
    pub scale: Number,
    /// Scalar coefficient for the axpy kernel
    pub coeff: Number,
    /// Master seed for the whole run
    pub master_seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            trials: 12,
            length: 16,
            scale: 200.0,
            coeff: 12.3,
            master_seed: resolve_master_seed(),
        }
    }
}

/// Per-kernel outcome of a run.
#[derive(Clone, Debug)]
pub struct KernelReport {
    pub name: &'static str,
    pub trials: usize,
    /// Accumulated elapsed ticks across all trials
    pub total_ticks: u64,
    /// total_ticks / trials
    pub avg_ticks: f64,
    /// Elapsed ticks per trial, in trial order
    pub trial_ticks: Vec<u64>,
    /// Kernel result per trial, kept so the computation stays observable
    /// and runs can be compared for reproducibility
    pub samples: Vec<f64>,
}

/// Seed from the wall clock, perturbed by the compile-time offset.
pub fn resolve_master_seed() -> u64 {
    time_seed().wrapping_add(seed_offset())
}

/// Wall-clock derived seed.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// The `SEED_OFFSET` build environment value, or 0.
pub fn seed_offset() -> u64 {
    SEED_OFFSET.and_then(|s| s.parse().ok()).unwrap_or(0)
}

/// Run every registered kernel for `cfg.trials` trials each.
///
/// One seed sequence is derived from the master seed and consumed in
/// registry order, so each kernel section owns a disjoint, deterministic
/// sub-range of seeds.
pub fn run(cfg: &RunConfig, registry: &KernelRegistry) -> Vec<KernelReport> {
    let total_seeds: usize = registry
        .all()
        .iter()
        .map(|k| k.seeds_per_trial() * cfg.trials)
        .sum();
    let seeds = SeedSequence::generate(cfg.master_seed, total_seeds);

    let mut offset = 0;
    registry
        .all()
        .iter()
        .map(|kernel| {
            let section_len = kernel.seeds_per_trial() * cfg.trials;
            let section = &seeds.as_slice()[offset..offset + section_len];
            offset += section_len;
            run_kernel(kernel.as_ref(), section, cfg)
        })
        .collect()
}

/// Trial loop for one kernel: prep fresh buffers from the next seeds, time
/// the invocation, accumulate the elapsed ticks.
fn run_kernel(kernel: &dyn KernelRunner, seeds: &[u32], cfg: &RunConfig) -> KernelReport {
    // One pin per section keeps every trial on the same core's counter
    let _pin = CpuPinGuard::new();

    let arity = kernel.seeds_per_trial();
    let mut total_ticks: u64 = 0;
    let mut trial_ticks = Vec::with_capacity(cfg.trials);
    let mut samples = Vec::with_capacity(cfg.trials);

    for trial in 0..cfg.trials {
        let trial_seeds = &seeds[trial * arity..(trial + 1) * arity];
        let outcome = kernel.run_trial(trial_seeds, cfg.length, cfg.scale, cfg.coeff);

        let ticks = measure::to_ticks(outcome.elapsed);
        total_ticks += ticks;
        trial_ticks.push(ticks);
        samples.push(outcome.result);
    }

    let avg_ticks = if cfg.trials == 0 {
        0.0
    } else {
        total_ticks as f64 / cfg.trials as f64
    };

    KernelReport {
        name: kernel.name(),
        trials: cfg.trials,
        total_ticks,
        avg_ticks,
        trial_ticks,
        samples,
    }
}
