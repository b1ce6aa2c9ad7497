//! # SIMD Advantage
//!
//! Cycle-level profiling of three small numeric kernels (scaled
//! accumulation, dot product, elementwise multiply) across repeated
//! randomized trials, to observe whether auto-vectorization yields a
//! measurable throughput advantage.

pub mod driver;
pub mod kernels;
pub mod measure;
pub mod prep;
pub mod registry;
pub mod report;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::driver::{run, KernelReport, RunConfig};
    pub use crate::kernels::{axpy, dot, elementwise_multiply, Number, STRIDE};
    pub use crate::registry::{build_registry, KernelRegistry, KernelRunner};
}

#[cfg(test)]
mod tests {
    use crate::registry::build_registry;

    #[test]
    fn test_all_kernels_registry_verify() {
        let registry = build_registry();
        let kernels = registry.all();

        println!("Verifying {} kernels...", kernels.len());

        for kernel in kernels {
            println!("Verifying kernel: {}", kernel.name());
            match kernel.verify() {
                Ok(_) => println!("  ✅ Kernel '{}' passed verification", kernel.name()),
                Err(e) => panic!("  ❌ Kernel '{}' failed verification: {}", kernel.name(), e),
            }
        }
    }
}
