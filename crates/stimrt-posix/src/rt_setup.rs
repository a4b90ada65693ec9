//! Real-time setup configuration.

use serde::{Deserialize, Serialize};

use crate::policy::SchedPolicy;

/// Priority used by the default setup: high, but below the kernel's own RT threads.
pub const DEFAULT_RT_PRIORITY: i32 = 80;

/// Real-time setup configuration.
///
/// Bundles the scheduling and memory-locking requests a presentation loop
/// usually makes together, so they can be read from configuration and applied
/// with [`RealtimeShim::apply_setup`](crate::RealtimeShim::apply_setup).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealtimeSetup {
    /// Request `policy`/`priority` for the calling process.
    pub high_priority: bool,

    /// Scheduling policy requested when `high_priority` is set.
    pub policy: SchedPolicy,

    /// Static priority requested when `high_priority` is set.
    pub priority: i32,

    /// Enable memory locking (prevent swapping).
    ///
    /// Locks all current and future memory pages to prevent page faults
    /// during time-critical presentation.
    pub lock_memory: bool,
}

impl Default for RealtimeSetup {
    fn default() -> Self {
        Self {
            high_priority: true,
            policy: SchedPolicy::Fifo,
            priority: DEFAULT_RT_PRIORITY,
            lock_memory: true,
        }
    }
}

impl RealtimeSetup {
    /// Create a new RealtimeSetup with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a minimal RealtimeSetup (no special configuration).
    pub fn minimal() -> Self {
        Self {
            high_priority: false,
            lock_memory: false,
            ..Self::default()
        }
    }

    /// Create a RealtimeSetup that needs no privileges.
    ///
    /// Requests `SCHED_OTHER` at priority 0, which any process may do.
    pub fn testing() -> Self {
        Self {
            high_priority: true,
            policy: SchedPolicy::Other,
            priority: 0,
            lock_memory: false,
        }
    }

    /// Set high priority.
    pub fn with_high_priority(mut self, enabled: bool) -> Self {
        self.high_priority = enabled;
        self
    }

    /// Set the scheduling policy; implies `high_priority`.
    pub fn with_policy(mut self, policy: SchedPolicy) -> Self {
        self.policy = policy;
        self.high_priority = true;
        self
    }

    /// Set the static priority; implies `high_priority`.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self.high_priority = true;
        self
    }

    /// Set memory locking.
    pub fn with_lock_memory(mut self, enabled: bool) -> Self {
        self.lock_memory = enabled;
        self
    }

    /// Check if any RT features are enabled.
    pub fn has_rt_features(&self) -> bool {
        self.high_priority || self.lock_memory
    }
}
