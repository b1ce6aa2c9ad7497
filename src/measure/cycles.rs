//! Hardware cycle counter reads.
//!
//! x86_64 uses RDTSC bracketed by LFENCE so speculation cannot move the
//! read. aarch64 uses CNTVCT_EL0, the userspace-visible virtual timer, a
//! fixed-frequency counter rather than true core cycles but consistent
//! across cores.

/// Read the current cycle counter / timer value.
#[inline(always)]
pub fn read_cycles() -> u64 {
    #[cfg(target_arch = "x86_64")]
    {
        read_cycles_x86_64()
    }

    #[cfg(target_arch = "x86")]
    {
        read_cycles_x86()
    }

    #[cfg(target_arch = "aarch64")]
    {
        read_cycles_aarch64()
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
    {
        compile_error!("cpu_cycles feature requires x86, x86_64, or aarch64; build with --features use_time instead");
    }
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn read_cycles_x86_64() -> u64 {
    use core::arch::x86_64::*;
    unsafe {
        _mm_lfence();
        let cycles = _rdtsc();
        _mm_lfence();
        cycles
    }
}

#[cfg(target_arch = "x86")]
#[inline(always)]
fn read_cycles_x86() -> u64 {
    use core::arch::x86::*;
    unsafe {
        _mm_lfence();
        let cycles = _rdtsc();
        _mm_lfence();
        cycles
    }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn read_cycles_aarch64() -> u64 {
    let val: u64;
    unsafe {
        core::arch::asm!("mrs {}, cntvct_el0", out(reg) val);
    }
    val
}
