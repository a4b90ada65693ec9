//! POSIX real-time exports.

use std::ffi::c_int;

/// `sched_setscheduler(0, policy, {priority})`; `0` on success, `-1` on failure.
#[unsafe(no_mangle)]
pub extern "C" fn stimrt_set_self_policy_priority(policy: c_int, priority: c_int) -> c_int {
    stimrt_posix::set_self_policy_priority(policy, priority)
}

/// `mlockall(MCL_CURRENT | MCL_FUTURE)`; `0` where memory locking is unavailable.
#[unsafe(no_mangle)]
pub extern "C" fn stimrt_stop_memory_paging() -> c_int {
    stimrt_posix::stop_memory_paging()
}
