//! Unix platform implementation.
//!
//! `mlockall` exists on every Unix. `sched_setscheduler` and the priority
//! bounds are only declared by libc for Linux, Android, FreeBSD, DragonFly and
//! NetBSD; elsewhere (macOS among them) those facilities report `None`.

use std::io;

use libc::{MCL_CURRENT, MCL_FUTURE, mlockall};

use crate::backend::RealtimeBackend;

/// Real-time calls backed by libc.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeRealtime;

#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd"
))]
mod sched {
    use libc::{sched_get_priority_max, sched_get_priority_min, sched_param, sched_setscheduler};

    pub(super) fn set_scheduler(pid: i32, policy: i32, priority: i32) -> Option<i32> {
        let param = sched_param {
            sched_priority: priority,
        };
        // SAFETY: `param` is a fully initialised sched_param that outlives the call.
        Some(unsafe { sched_setscheduler(pid, policy, &param) })
    }

    pub(super) fn priority_bounds(policy: i32) -> Option<(i32, i32)> {
        // SAFETY: takes a plain integer.
        let min = unsafe { sched_get_priority_min(policy) };
        // SAFETY: takes a plain integer.
        let max = unsafe { sched_get_priority_max(policy) };
        Some((min, max))
    }
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd"
)))]
mod sched {
    pub(super) fn set_scheduler(_pid: i32, _policy: i32, _priority: i32) -> Option<i32> {
        None
    }

    pub(super) fn priority_bounds(_policy: i32) -> Option<(i32, i32)> {
        None
    }
}

impl RealtimeBackend for NativeRealtime {
    fn set_scheduler(&self, pid: i32, policy: i32, priority: i32) -> Option<i32> {
        sched::set_scheduler(pid, policy, priority)
    }

    fn lock_all_memory(&self) -> Option<i32> {
        // SAFETY: mlockall takes only flags and touches no caller memory.
        Some(unsafe { mlockall(MCL_CURRENT | MCL_FUTURE) })
    }

    fn priority_bounds(&self, policy: i32) -> Option<(i32, i32)> {
        sched::priority_bounds(policy)
    }

    fn last_os_error(&self) -> io::Error {
        io::Error::last_os_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_locking_reaches_the_os() {
        // Unprivileged runs usually get -1 (EPERM/ENOMEM); either way the call was made.
        let status = NativeRealtime.lock_all_memory();
        assert!(matches!(status, Some(0 | -1)), "got {status:?}");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_other_policy_is_always_permitted() {
        // Switching yourself to SCHED_OTHER with priority 0 needs no privileges.
        assert_eq!(NativeRealtime.set_scheduler(0, libc::SCHED_OTHER, 0), Some(0));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_out_of_range_priority_is_rejected() {
        assert_eq!(NativeRealtime.set_scheduler(0, libc::SCHED_FIFO, 1000), Some(-1));
        assert_eq!(
            NativeRealtime.last_os_error().raw_os_error(),
            Some(libc::EINVAL)
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_fifo_bounds() {
        assert_eq!(NativeRealtime.priority_bounds(libc::SCHED_FIFO), Some((1, 99)));
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_no_scheduler_api_on_macos() {
        assert_eq!(NativeRealtime.set_scheduler(0, 1, 0), None);
        assert_eq!(NativeRealtime.priority_bounds(1), None);
    }
}
