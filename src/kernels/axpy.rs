//! Scaled accumulation kernel.
//!
//! Despite the AXPY name this is a reduction, `y = Σ a·x[i]`, not the
//! textbook in-place update. The profiled quantity is the cost of that
//! reduction over the stride-interleaved traversal.

use std::hint::black_box;

use crate::kernels::{opaque, Number, Scalar, STRIDE};
use crate::measure;
use crate::prep::prep_array;
use crate::registry::{KernelRunner, TrialOutcome};

/// Compute `Σ a·x[i]` visiting indices one residue class at a time.
///
/// # Example
/// ```
/// use simd_advantage::kernels::axpy;
///
/// let x: [f64; 4] = [1.0, 2.0, 3.0, 4.0];
/// let y = axpy(&x, 2.0);
/// assert!((y - 20.0).abs() < 1e-9);
/// ```
pub fn axpy<T: Scalar>(x: &[T], a: T) -> T {
    let mut y = T::ZERO;
    for s in 0..STRIDE {
        for &v in x.iter().skip(s).step_by(STRIDE) {
            y += opaque(a * v);
        }
    }
    y
}

/// Sequential reference for verification.
pub fn axpy_seq<T: Scalar>(x: &[T], a: T) -> T {
    x.iter().map(|&v| a * v).sum()
}

pub struct AxpyRunner;

impl KernelRunner for AxpyRunner {
    fn name(&self) -> &'static str {
        "axpy"
    }

    fn description(&self) -> &'static str {
        "Scaled accumulation y = sum(a*x[i]) over one input vector"
    }

    fn seeds_per_trial(&self) -> usize {
        1
    }

    fn run_trial(
        &self,
        seeds: &[u32],
        length: usize,
        scale: Number,
        coeff: Number,
    ) -> TrialOutcome {
        let mut x = vec![0.0; length];
        prep_array(&mut x, seeds[0], scale);

        let start = measure::now();
        let y = axpy(&x, coeff);
        let elapsed = measure::elapsed(start);

        TrialOutcome {
            elapsed,
            result: black_box(y).to_f64(),
        }
    }

    fn verify(&self) -> Result<(), String> {
        // Non-aligned length so the residue classes have unequal sizes
        let mut x: Vec<Number> = vec![0.0; 1023];
        prep_array(&mut x, 0xbeef, 1.0);

        let expected = axpy_seq(&x, 12.3).to_f64();
        let got = axpy(&x, 12.3).to_f64();
        let diff = (got - expected).abs();
        let tol = expected.abs() * 1e-4 + 1e-9;

        if diff > tol {
            return Err(format!(
                "axpy traversal disagrees with sequential reference: expected {}, got {}, diff {}",
                expected, got, diff
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_axpy_basic() {
        let x: [f64; 4] = [1.0, 2.0, 3.0, 4.0];
        // 2*(1+2+3+4) = 20
        assert!((axpy(&x, 2.0) - 20.0).abs() < EPSILON);
    }

    #[test]
    fn test_axpy_empty() {
        let x: [f64; 0] = [];
        assert_eq!(axpy(&x, 12.3), 0.0);
    }

    #[test]
    fn test_axpy_single() {
        let x: [f64; 1] = [3.0];
        assert!((axpy(&x, 4.0) - 12.0).abs() < EPSILON);
    }

    #[test]
    fn test_axpy_odd_length_matches_sequential() {
        let mut x = vec![0.0f64; 101];
        prep_array(&mut x, 42, 200.0);

        let got = axpy(&x, 12.3);
        let expected = axpy_seq(&x, 12.3);
        assert!(
            (got - expected).abs() <= expected.abs() * 1e-9,
            "traversal order changed the result: {} vs {}",
            got,
            expected
        );
    }

    #[test]
    fn test_axpy_large_matches_sequential() {
        let mut x = vec![0.0f64; 4096];
        prep_array(&mut x, 7, 1.0);

        let got = axpy(&x, -0.5);
        let expected = axpy_seq(&x, -0.5);
        assert!((got - expected).abs() <= expected.abs() * 1e-9 + 1e-12);
    }

    #[test]
    fn test_axpy_runner_verify() {
        assert!(AxpyRunner.verify().is_ok());
    }
}
