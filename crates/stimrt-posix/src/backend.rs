//! OS capability behind the real-time shim.

use std::io;

#[cfg(unix)]
pub use crate::unix::NativeRealtime;

#[cfg(not(unix))]
pub use crate::fallback::NativeRealtime;

/// The scheduler and memory-locking calls the shim forwards to.
///
/// Each method makes at most one OS call. `None` means the facility is not
/// available on this platform and nothing was called.
pub trait RealtimeBackend {
    /// `sched_setscheduler(pid, policy, {priority})`; `0` or `-1`.
    fn set_scheduler(&self, pid: i32, policy: i32, priority: i32) -> Option<i32>;

    /// `mlockall(MCL_CURRENT | MCL_FUTURE)`; `0` or `-1`.
    fn lock_all_memory(&self) -> Option<i32>;

    /// `sched_get_priority_min(policy)` and `sched_get_priority_max(policy)`.
    fn priority_bounds(&self, policy: i32) -> Option<(i32, i32)>;

    /// The error left behind by the most recent failed call.
    fn last_os_error(&self) -> io::Error;
}

impl<B: RealtimeBackend + ?Sized> RealtimeBackend for &B {
    fn set_scheduler(&self, pid: i32, policy: i32, priority: i32) -> Option<i32> {
        (**self).set_scheduler(pid, policy, priority)
    }

    fn lock_all_memory(&self) -> Option<i32> {
        (**self).lock_all_memory()
    }

    fn priority_bounds(&self, policy: i32) -> Option<(i32, i32)> {
        (**self).priority_bounds(policy)
    }

    fn last_os_error(&self) -> io::Error {
        (**self).last_os_error()
    }
}
