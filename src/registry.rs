//! Kernel registry: one place to discover, verify, and run the kernels.

use crate::kernels::Number;
use crate::measure::Measurement;

/// Outcome of one timed trial: the bracketed measurement plus the kernel's
/// numeric result, already forced through `black_box` so the computation
/// cannot be proven dead.
pub struct TrialOutcome {
    pub elapsed: Measurement,
    pub result: f64,
}

/// Trait every benchmarked kernel implements.
pub trait KernelRunner: Send + Sync {
    /// Name used in reports (e.g. "axpy")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// How many seeds one trial consumes (one per input buffer)
    fn seeds_per_trial(&self) -> usize;

    /// Run one trial: prepare fresh buffer(s) from `seeds`, then invoke the
    /// kernel bracketed by two timer reads. `seeds.len()` must equal
    /// `seeds_per_trial()`.
    fn run_trial(&self, seeds: &[u32], length: usize, scale: Number, coeff: Number)
        -> TrialOutcome;

    /// Check the stride-interleave traversal against a plain sequential
    /// reference.
    fn verify(&self) -> Result<(), String>;
}

/// Registry of all kernels under measurement.
pub struct KernelRegistry {
    kernels: Vec<Box<dyn KernelRunner>>,
}

impl KernelRegistry {
    pub fn new() -> Self {
        Self {
            kernels: Vec::new(),
        }
    }

    pub fn register<K: KernelRunner + 'static>(&mut self, kernel: K) {
        self.kernels.push(Box::new(kernel));
    }

    pub fn all(&self) -> &[Box<dyn KernelRunner>] {
        &self.kernels
    }

    pub fn find(&self, name: &str) -> Option<&dyn KernelRunner> {
        self.kernels
            .iter()
            .find(|k| k.name() == name)
            .map(|k| k.as_ref())
    }

    pub fn list_names(&self) -> Vec<&'static str> {
        self.kernels.iter().map(|k| k.name()).collect()
    }
}

impl Default for KernelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all three kernels, in report order.
pub fn build_registry() -> KernelRegistry {
    let mut registry = KernelRegistry::new();

    registry.register(crate::kernels::AxpyRunner);
    registry.register(crate::kernels::DotRunner);
    registry.register(crate::kernels::ElementwiseRunner);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_find_and_list() {
        let registry = build_registry();
        assert_eq!(
            registry.list_names(),
            vec!["axpy", "dot_product", "elementwise_multiply"]
        );
        assert!(registry.find("dot_product").is_some());
        assert!(registry.find("nope").is_none());
    }

    #[test]
    fn test_seeds_per_trial_matches_arity() {
        let registry = build_registry();
        assert_eq!(registry.find("axpy").unwrap().seeds_per_trial(), 1);
        assert_eq!(registry.find("dot_product").unwrap().seeds_per_trial(), 2);
        assert_eq!(
            registry
                .find("elementwise_multiply")
                .unwrap()
                .seeds_per_trial(),
            2
        );
    }
}
