//! Numeric kernels under measurement.
//!
//! All three kernels share the same stride-interleave traversal: the index
//! space is split into `STRIDE` residue classes by index modulo `STRIDE`,
//! and each class is walked start-to-finish before the next. The stride is
//! a compile-time constant so the optimizer is free to vectorize the inner
//! loops.

pub mod axpy;
pub mod dot;
pub mod elementwise;

pub use axpy::{axpy, AxpyRunner};
pub use dot::{dot, DotRunner};
pub use elementwise::{elementwise_multiply, ElementwiseRunner};

use rand::Rng;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// Number of interleaved residue classes visited by every kernel.
pub const STRIDE: usize = 2;

/// Element type for all buffers and kernels, chosen at build time.
///
/// Defaults to 64-bit floats; build with `--features f32` for 32-bit.
#[cfg(not(feature = "f32"))]
pub type Number = f64;

#[cfg(feature = "f32")]
pub type Number = f32;

/// The float surface the kernels need, implemented for `f32` and `f64` so
/// both element widths compile and test regardless of which one `Number`
/// resolves to.
pub trait Scalar:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Mul<Output = Self>
    + AddAssign
    + Sum
    + fmt::Debug
    + fmt::Display
{
    const ZERO: Self;

    /// Draw a value in `[0, 1)` at this width. Drawing at the target width
    /// matters: a wider draw narrowed by rounding can land on exactly 1.0.
    fn unit<R: Rng + ?Sized>(rng: &mut R) -> Self;

    fn to_f64(self) -> f64;
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;

    #[inline]
    fn unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.random::<f32>()
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;

    #[inline]
    fn unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.random::<f64>()
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

/// Optimization gate for the kernel inner loops.
///
/// With the `unoptimized` feature every accumulation step is forced through
/// `black_box`, which keeps each elementwise operation materialized and
/// blocks vectorization inside the kernels only. Without the feature this
/// compiles away entirely.
#[inline(always)]
pub(crate) fn opaque<T>(v: T) -> T {
    #[cfg(feature = "unoptimized")]
    {
        std::hint::black_box(v)
    }
    #[cfg(not(feature = "unoptimized"))]
    {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    /// Generator stuck at the all-ones state, the worst case for the
    /// unit-interval upper bound.
    struct SaturatedRng;

    impl RngCore for SaturatedRng {
        fn next_u32(&mut self) -> u32 {
            u32::MAX
        }

        fn next_u64(&mut self) -> u64 {
            u64::MAX
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0xff);
        }
    }

    #[test]
    fn test_unit_stays_below_one_at_both_widths() {
        let mut rng = SaturatedRng;
        for _ in 0..16 {
            let narrow = <f32 as Scalar>::unit(&mut rng);
            let wide = <f64 as Scalar>::unit(&mut rng);
            assert!((0.0..1.0).contains(&narrow), "f32 draw {} escaped [0, 1)", narrow);
            assert!((0.0..1.0).contains(&wide), "f64 draw {} escaped [0, 1)", wide);
        }
    }

    #[test]
    fn test_unit_scaled_stays_below_scale_f32() {
        let mut rng = SaturatedRng;
        let scale = 12.5f32;
        let v = <f32 as Scalar>::unit(&mut rng) * scale;
        assert!(v < scale, "scaled draw {} reached the scale factor", v);
    }
}
