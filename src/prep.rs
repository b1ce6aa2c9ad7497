//! Seed streams and randomized array preparation.
//!
//! The generator is an explicit handle, never process-global state: every
//! stream is selected by constructing a fresh `SmallRng` from its seed, so
//! sequential fills with different seeds produce independent, reproducible
//! streams and a repeated seed replays its stream exactly.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::kernels::Scalar;

/// An index-addressed sequence of pseudo-random seeds derived from one
/// master seed. Generated once per run, immutable afterwards.
pub struct SeedSequence {
    seeds: Vec<u32>,
}

impl SeedSequence {
    /// Derive `count` seeds from `master_seed`. Deterministic for a fixed
    /// master seed; `count == 0` yields an empty sequence.
    pub fn generate(master_seed: u64, count: usize) -> Self {
        let mut rng = SmallRng::seed_from_u64(master_seed);
        Self {
            seeds: (0..count).map(|_| rng.next_u32()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.seeds
    }
}

/// Fill `dst` with independent draws in `[0, scale)`, one stream per seed.
///
/// Draws happen at the element width, so the upper bound is strict for
/// both widths.
pub fn prep_array<T: Scalar>(dst: &mut [T], seed: u32, scale: T) {
    let mut rng = SmallRng::seed_from_u64(seed as u64);
    for slot in dst.iter_mut() {
        *slot = T::unit(&mut rng) * scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_sequence_deterministic() {
        let a = SeedSequence::generate(0xdeadbeef, 64);
        let b = SeedSequence::generate(0xdeadbeef, 64);
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn test_seed_sequence_differs_by_master_seed() {
        let a = SeedSequence::generate(1, 32);
        let b = SeedSequence::generate(2, 32);
        assert_ne!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn test_seed_sequence_empty() {
        let s = SeedSequence::generate(42, 0);
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn test_prep_array_range_f64() {
        let mut buf = vec![0.0f64; 1024];
        prep_array(&mut buf, 7, 200.0);
        for &v in &buf {
            assert!((0.0..200.0).contains(&v), "value {} out of range", v);
        }
    }

    #[test]
    fn test_prep_array_range_f32() {
        let mut buf = vec![0.0f32; 1024];
        prep_array(&mut buf, 7, 12.5f32);
        for &v in &buf {
            assert!((0.0..12.5).contains(&v), "value {} out of range", v);
        }
    }

    #[test]
    fn test_prep_array_unit_scale() {
        let mut buf = vec![0.0f64; 256];
        prep_array(&mut buf, 99, 1.0);
        for &v in &buf {
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_prep_array_reproducible_per_seed() {
        let mut a = vec![0.0f64; 128];
        let mut b = vec![0.0f64; 128];
        prep_array(&mut a, 1234, 3.0);
        prep_array(&mut b, 1234, 3.0);
        assert_eq!(a, b);

        prep_array(&mut b, 1235, 3.0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_prep_array_empty() {
        let mut buf: Vec<f64> = Vec::new();
        prep_array(&mut buf, 5, 10.0);
        assert!(buf.is_empty());
    }
}
