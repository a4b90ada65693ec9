//! The real-time shim itself.

use std::ops::RangeInclusive;

use tracing::{debug, warn};

use crate::backend::{NativeRealtime, RealtimeBackend};
use crate::error::{PosixRtError, PosixRtResult};
use crate::policy::SchedPolicy;
use crate::rt_setup::RealtimeSetup;

/// `pid` meaning "the calling process".
const SELF_PID: i32 = 0;

/// What [`RealtimeShim::lock_memory`] achieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingOutcome {
    /// All current and future pages are locked.
    Locked,
    /// The platform has no memory locking; nothing was done.
    Unsupported,
}

/// What [`RealtimeShim::apply_setup`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppliedSetup {
    /// Policy and priority now in effect, if the setup asked for them.
    pub scheduling: Option<(SchedPolicy, i32)>,
    /// Memory-locking outcome, if the setup asked for it.
    pub paging: Option<PagingOutcome>,
}

/// Forwards real-time requests to a [`RealtimeBackend`].
#[derive(Debug, Clone, Default)]
pub struct RealtimeShim<B> {
    backend: B,
}

impl RealtimeShim<NativeRealtime> {
    /// Shim backed by the platform's own calls.
    pub fn native() -> Self {
        Self::new(NativeRealtime)
    }
}

impl<B: RealtimeBackend> RealtimeShim<B> {
    /// Wrap a backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Borrow the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Legacy form: `sched_setscheduler(0, policy, {priority})`, status returned as-is.
    ///
    /// Yields `-1` where the platform has no scheduler API.
    pub fn set_self_policy_priority(&self, policy: i32, priority: i32) -> i32 {
        let status = self
            .backend
            .set_scheduler(SELF_PID, policy, priority)
            .unwrap_or(-1);
        debug!(policy, priority, status, "sched_setscheduler");
        status
    }

    /// Legacy form: `mlockall(MCL_CURRENT | MCL_FUTURE)`, status returned as-is.
    ///
    /// Yields `0` where the platform has no memory locking.
    pub fn stop_memory_paging(&self) -> i32 {
        let status = self.backend.lock_all_memory().unwrap_or(0);
        debug!(status, "mlockall");
        status
    }

    /// Switch the calling process to `policy` at `priority`.
    ///
    /// # Errors
    ///
    /// Returns [`PosixRtError::Rejected`] with the OS error when refused, or
    /// [`PosixRtError::Unsupported`] when there is no scheduler API.
    pub fn apply_policy(&self, policy: SchedPolicy, priority: i32) -> PosixRtResult {
        let status = self
            .backend
            .set_scheduler(SELF_PID, policy.value(), priority)
            .ok_or(PosixRtError::Unsupported {
                operation: "sched_setscheduler",
            })?;

        if status == 0 {
            debug!(?policy, priority, "Scheduling policy applied");
            return Ok(());
        }

        let source = self.backend.last_os_error();
        warn!(?policy, priority, error = %source, "sched_setscheduler rejected");
        Err(PosixRtError::Rejected {
            operation: "sched_setscheduler",
            source,
        })
    }

    /// Lock all current and future pages into RAM.
    ///
    /// # Errors
    ///
    /// Returns [`PosixRtError::Rejected`] with the OS error when `mlockall` fails.
    pub fn lock_memory(&self) -> PosixRtResult<PagingOutcome> {
        match self.backend.lock_all_memory() {
            None => {
                debug!("mlockall unavailable; memory stays pageable");
                Ok(PagingOutcome::Unsupported)
            }
            Some(0) => {
                debug!("Memory locked");
                Ok(PagingOutcome::Locked)
            }
            Some(_) => {
                let source = self.backend.last_os_error();
                warn!(error = %source, "mlockall rejected");
                Err(PosixRtError::Rejected {
                    operation: "mlockall",
                    source,
                })
            }
        }
    }

    /// Valid static priorities for `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`PosixRtError::Rejected`] for a policy the OS does not know, or
    /// [`PosixRtError::Unsupported`] when there is no scheduler API.
    pub fn priority_range(&self, policy: SchedPolicy) -> PosixRtResult<RangeInclusive<i32>> {
        let (min, max) = self.backend.priority_bounds(policy.value()).ok_or(
            PosixRtError::Unsupported {
                operation: "sched_get_priority_min",
            },
        )?;

        if min == -1 || max == -1 {
            return Err(PosixRtError::Rejected {
                operation: "sched_get_priority_min",
                source: self.backend.last_os_error(),
            });
        }
        Ok(min..=max)
    }

    /// Check `priority` against the OS bounds for `policy`.
    ///
    /// Passes when the bounds cannot be read; the scheduler call then reports
    /// the OS's own answer.
    ///
    /// # Errors
    ///
    /// Returns [`PosixRtError::InvalidPriorityRange`] when `priority` is out of bounds.
    pub fn check_priority(&self, policy: SchedPolicy, priority: i32) -> PosixRtResult {
        let Ok(range) = self.priority_range(policy) else {
            return Ok(());
        };
        if range.contains(&priority) {
            return Ok(());
        }

        let (min, max) = (*range.start(), *range.end());
        warn!(?policy, priority, min, max, "Priority outside policy range");
        Err(PosixRtError::InvalidPriorityRange {
            policy,
            priority,
            min,
            max,
        })
    }

    /// Apply each step `setup` asks for, stopping at the first error.
    ///
    /// The priority is checked against the policy's range, then scheduling is
    /// applied before memory is locked.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's error.
    pub fn apply_setup(&self, setup: &RealtimeSetup) -> PosixRtResult<AppliedSetup> {
        let mut applied = AppliedSetup::default();

        if setup.high_priority {
            self.check_priority(setup.policy, setup.priority)?;
            self.apply_policy(setup.policy, setup.priority)?;
            applied.scheduling = Some((setup.policy, setup.priority));
        }

        if setup.lock_memory {
            applied.paging = Some(self.lock_memory()?);
        }

        Ok(applied)
    }
}
