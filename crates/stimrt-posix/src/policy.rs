//! Scheduling policies.

use serde::{Deserialize, Serialize};

#[cfg(any(target_os = "linux", target_os = "android"))]
mod values {
    pub const OTHER: i32 = libc::SCHED_OTHER;
    pub const FIFO: i32 = libc::SCHED_FIFO;
    pub const RR: i32 = libc::SCHED_RR;
    pub const BATCH: i32 = libc::SCHED_BATCH;
    pub const IDLE: i32 = libc::SCHED_IDLE;
}

// No SCHED_BATCH or SCHED_IDLE here; those map to numbers the scheduler refuses.
#[cfg(any(target_os = "freebsd", target_os = "dragonfly", target_os = "netbsd"))]
mod values {
    pub const OTHER: i32 = libc::SCHED_OTHER;
    pub const FIFO: i32 = libc::SCHED_FIFO;
    pub const RR: i32 = libc::SCHED_RR;
    pub const BATCH: i32 = i32::MIN;
    pub const IDLE: i32 = i32::MIN + 1;
}

// Never handed to an OS: these platforms have no scheduler to call.
#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd"
)))]
mod values {
    pub const OTHER: i32 = 0;
    pub const FIFO: i32 = 1;
    pub const RR: i32 = 2;
    pub const BATCH: i32 = 3;
    pub const IDLE: i32 = 5;
}

/// Scheduling policy for `sched_setscheduler`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedPolicy {
    /// Standard time-sharing (`SCHED_OTHER`).
    Other,
    /// First-in first-out real-time (`SCHED_FIFO`).
    Fifo,
    /// Round-robin real-time (`SCHED_RR`).
    RoundRobin,
    /// CPU-bound batch work (`SCHED_BATCH`, Linux and Android only).
    Batch,
    /// Very low priority background work (`SCHED_IDLE`, Linux and Android only).
    Idle,
    /// Any other value, forwarded as-is.
    Raw(i32),
}

impl SchedPolicy {
    /// The OS policy number.
    pub fn value(self) -> i32 {
        match self {
            SchedPolicy::Other => values::OTHER,
            SchedPolicy::Fifo => values::FIFO,
            SchedPolicy::RoundRobin => values::RR,
            SchedPolicy::Batch => values::BATCH,
            SchedPolicy::Idle => values::IDLE,
            SchedPolicy::Raw(value) => value,
        }
    }

    /// Whether this is one of the real-time policies.
    pub fn is_realtime(self) -> bool {
        matches!(self, SchedPolicy::Fifo | SchedPolicy::RoundRobin)
    }
}

impl From<i32> for SchedPolicy {
    fn from(value: i32) -> Self {
        match value {
            values::OTHER => SchedPolicy::Other,
            values::FIFO => SchedPolicy::Fifo,
            values::RR => SchedPolicy::RoundRobin,
            values::BATCH => SchedPolicy::Batch,
            values::IDLE => SchedPolicy::Idle,
            other => SchedPolicy::Raw(other),
        }
    }
}
