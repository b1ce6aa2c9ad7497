//! Elementwise multiply kernel: `z[i] += x[i]·y[i]`.
//!
//! Note the additive accumulation into `z`. Callers own the initial
//! contents; a zeroed destination gives the plain elementwise product,
//! repeated calls stack contributions.

use std::hint::black_box;

use crate::kernels::{opaque, Number, Scalar, STRIDE};
use crate::measure;
use crate::prep::prep_array;
use crate::registry::{KernelRunner, TrialOutcome};

/// Accumulate `x[i]·y[i]` into `z[i]` for every index.
///
/// # Panics
/// Panics if the three slices have different lengths.
pub fn elementwise_multiply<T: Scalar>(x: &[T], y: &[T], z: &mut [T]) {
    assert_eq!(x.len(), y.len(), "inputs must have the same length");
    assert_eq!(x.len(), z.len(), "destination must match input length");

    for s in 0..STRIDE {
        let mut i = s;
        while i < x.len() {
            z[i] += opaque(x[i] * y[i]);
            i += STRIDE;
        }
    }
}

pub struct ElementwiseRunner;

impl KernelRunner for ElementwiseRunner {
    fn name(&self) -> &'static str {
        "elementwise_multiply"
    }

    fn description(&self) -> &'static str {
        "Accumulates the elementwise product of two vectors into a third"
    }

    fn seeds_per_trial(&self) -> usize {
        2
    }

    fn run_trial(
        &self,
        seeds: &[u32],
        length: usize,
        scale: Number,
        _coeff: Number,
    ) -> TrialOutcome {
        let mut x = vec![0.0; length];
        let mut y = vec![0.0; length];
        prep_array(&mut x, seeds[0], scale);
        prep_array(&mut y, seeds[1], scale);
        // Fresh zeroed destination per trial, so the accumulation is the
        // plain product and nothing leaks across trials
        let mut z: Vec<Number> = vec![0.0; length];

        let start = measure::now();
        elementwise_multiply(&x, &y, &mut z);
        let elapsed = measure::elapsed(start);

        let sum: Number = z.iter().copied().sum();
        TrialOutcome {
            elapsed,
            result: black_box(sum).to_f64(),
        }
    }

    fn verify(&self) -> Result<(), String> {
        let mut x: Vec<Number> = vec![0.0; 1023];
        let mut y: Vec<Number> = vec![0.0; 1023];
        prep_array(&mut x, 0xabcd, 1.0);
        prep_array(&mut y, 0xef01, 1.0);

        let mut z: Vec<Number> = vec![0.0; 1023];
        elementwise_multiply(&x, &y, &mut z);

        for i in 0..x.len() {
            let expected = (x[i] * y[i]).to_f64();
            let got = z[i].to_f64();
            if (got - expected).abs() > expected.abs() * 1e-4 + 1e-9 {
                return Err(format!(
                    "elementwise product wrong at index {}: expected {}, got {}",
                    i, expected, got
                ));
            }
        }

        // Second pass must exactly double every contribution
        elementwise_multiply(&x, &y, &mut z);
        for i in 0..x.len() {
            let expected = 2.0 * (x[i] * y[i]).to_f64();
            let got = z[i].to_f64();
            if (got - expected).abs() > expected.abs() * 1e-4 + 1e-9 {
                return Err(format!(
                    "second pass did not double the contribution at index {}: expected {}, got {}",
                    i, expected, got
                ));
            }
        }
        Ok(())
    }
}
