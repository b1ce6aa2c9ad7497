//! Dot product kernel: `Σ x[i]·y[i]` over the stride-interleaved traversal.

use std::hint::black_box;

use crate::kernels::{opaque, Number, Scalar, STRIDE};
use crate::measure;
use crate::prep::prep_array;
use crate::registry::{KernelRunner, TrialOutcome};

/// Compute the dot product of two slices.
///
/// # Panics
/// Panics if the slices have different lengths.
pub fn dot<T: Scalar>(x: &[T], y: &[T]) -> T {
    assert_eq!(x.len(), y.len(), "vectors must have the same length");

    let mut product = T::ZERO;
    for s in 0..STRIDE {
        for (&a, &b) in x.iter().skip(s).step_by(STRIDE).zip(y.iter().skip(s).step_by(STRIDE)) {
            product += opaque(a * b);
        }
    }
    product
}

/// Sequential reference for verification.
pub fn dot_seq<T: Scalar>(x: &[T], y: &[T]) -> T {
    assert_eq!(x.len(), y.len(), "vectors must have the same length");
    x.iter().zip(y.iter()).map(|(&a, &b)| a * b).sum()
}

pub struct DotRunner;

impl KernelRunner for DotRunner {
    fn name(&self) -> &'static str {
        "dot_product"
    }

    fn description(&self) -> &'static str {
        "Sum of products of corresponding elements of two vectors"
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

        let start = measure::now();
        let product = dot(&x, &y);
        let elapsed = measure::elapsed(start);

        TrialOutcome {
            elapsed,
            result: black_box(product).to_f64(),
        }
    }

    fn verify(&self) -> Result<(), String> {
        let mut x: Vec<Number> = vec![0.0; 1023];
        let mut y: Vec<Number> = vec![0.0; 1023];
        prep_array(&mut x, 0xcafe, 1.0);
        prep_array(&mut y, 0xf00d, 1.0);

        let expected = dot_seq(&x, &y).to_f64();
        let got = dot(&x, &y).to_f64();
        let diff = (got - expected).abs();
        if diff > expected.abs() * 1e-4 + 1e-9 {
            return Err(format!(
                "dot traversal disagrees with sequential reference: expected {}, got {}, diff {}",
                expected, got, diff
            ));
        }

        let flipped = dot(&y, &x).to_f64();
        if (got - flipped).abs() > got.abs() * 1e-4 + 1e-9 {
            return Err(format!(
                "dot is not commutative: dot(x, y) = {}, dot(y, x) = {}",
                got, flipped
            ));
        }
        Ok(())
    }
}
