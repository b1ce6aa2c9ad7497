//! Measurement plumbing: cycle counter, wall-clock fallback, CPU pinning.
//!
//! By default (`cpu_cycles` feature) the timed region is bracketed by raw
//! cycle-counter reads. Build with `--features use_time` or
//! `--no-default-features` to fall back to wall-clock time.

pub mod cpu_affinity;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub mod cycles;

pub use cpu_affinity::CpuPinGuard;

/// One elapsed measurement: raw ticks (u64) or a `Duration` depending on
/// the timer source.
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Measurement = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Measurement = std::time::Duration;

/// Take the "before" reading.
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn now() -> Measurement {
    cycles::read_cycles()
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn now() -> std::time::Instant {
    std::time::Instant::now()
}

/// Take the "after" reading and return the elapsed measurement.
///
/// Saturating on the tick path, so a wrapped counter yields zero instead
/// of underflowing.
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn elapsed(start: Measurement) -> Measurement {
    cycles::read_cycles().saturating_sub(start)
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn elapsed(start: std::time::Instant) -> Measurement {
    start.elapsed()
}

/// Flatten a measurement to a plain tick count for accumulation.
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn to_ticks(m: Measurement) -> u64 {
    m
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn to_ticks(m: Measurement) -> u64 {
    m.as_nanos() as u64
}

/// Name of the measurement unit, for the run header.
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub const fn unit_name() -> &'static str {
    #[cfg(target_arch = "aarch64")]
    {
        "ticks"
    }
    #[cfg(target_arch = "x86_64")]
    {
        "cycles"
    }
    #[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64")))]
    {
        "units"
    }
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub const fn unit_name() -> &'static str {
    "ns"
}
