//! Thread pinning for stable measurements.
//!
//! Pinning the measuring thread to the core it is already running on keeps
//! every trial of a kernel section on one TSC. Linux gets a real
//! implementation via libc; elsewhere pinning degrades to a no-op and the
//! measurements are simply noisier.

#[cfg(target_os = "linux")]
mod platform {
    use std::cell::RefCell;

    thread_local! {
        static ORIGINAL_AFFINITY: RefCell<Option<libc::cpu_set_t>> = const { RefCell::new(None) };
    }

    /// Core the thread is currently scheduled on.
    pub fn current_cpu() -> Option<usize> {
        let cpu = unsafe { libc::sched_getcpu() };
        (cpu >= 0).then(|| cpu as usize)
    }

    /// Save the current affinity mask so it can be restored on unpin.
    pub fn save_affinity() -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) == 0 {
                ORIGINAL_AFFINITY.with(|cell| *cell.borrow_mut() = Some(set));
                true
            } else {
                false
            }
        }
    }

    pub fn set_affinity(core_id: usize) -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore_affinity() -> bool {
        unsafe {
            ORIGINAL_AFFINITY.with(|cell| match cell.borrow_mut().take() {
                Some(set) => {
                    libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
                }
                None => false,
            })
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn current_cpu() -> Option<usize> {
        None
    }
    pub fn save_affinity() -> bool {
        true
    }
    pub fn set_affinity(_core_id: usize) -> bool {
        false
    }
    pub fn restore_affinity() -> bool {
        true
    }
}

/// Pin the current thread to the core it is running on.
///
/// Returns the pinned core id, or `None` if pinning is unavailable.
pub fn pin_to_current_core() -> Option<usize> {
    let core = platform::current_cpu()?;
    platform::save_affinity();
    platform::set_affinity(core).then_some(core)
}

/// Restore the affinity mask saved by the last pin.
pub fn unpin() -> bool {
    platform::restore_affinity()
}

/// RAII pin: pins on creation, restores the original affinity on drop,
/// panics included.
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        Self {
            pinned_core: pin_to_current_core(),
        }
    }

    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.is_some() {
            unpin();
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_guard_roundtrip() {
        let guard = CpuPinGuard::new();
        if guard.is_pinned() {
            assert!(guard.core_id().is_some());
        }
        drop(guard);
        // Thread is back on its original mask here; nothing left to assert
        // beyond not panicking
    }

    #[test]
    fn test_double_guard_is_harmless() {
        let outer = CpuPinGuard::new();
        {
            let _inner = CpuPinGuard::new();
        }
        drop(outer);
    }
}
