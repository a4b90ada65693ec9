//! POSIX real-time scheduling and memory-locking shim.
//!
//! Two facilities are exposed, each in a legacy raw-integer form and a typed form:
//!
//! | Legacy | Typed | OS call |
//! |--------|-------|---------|
//! | [`set_self_policy_priority`] | [`RealtimeShim::apply_policy`] | `sched_setscheduler(0, ..)` |
//! | [`stop_memory_paging`] | [`RealtimeShim::lock_memory`] | `mlockall(MCL_CURRENT \| MCL_FUTURE)` |
//!
//! The legacy functions return the OS status untouched (`0` or `-1`), and
//! `stop_memory_paging` returns `0` where memory locking does not exist. The
//! typed API keeps those cases apart: an OS refusal becomes
//! [`PosixRtError::Rejected`] with the errno attached, and a missing capability
//! becomes [`PosixRtError::Unsupported`] or [`PagingOutcome::Unsupported`].
//!
//! # Example
//!
//! ```no_run
//! use stimrt_posix::{RealtimeSetup, RealtimeShim, SchedPolicy};
//!
//! let shim = RealtimeShim::native();
//! let setup = RealtimeSetup::new()
//!     .with_policy(SchedPolicy::RoundRobin)
//!     .with_priority(50);
//! shim.apply_setup(&setup).expect("RT setup failed");
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod backend;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod rt_setup;
pub mod shim;

#[cfg(unix)]
mod unix;

#[cfg(not(unix))]
mod fallback;

pub use backend::{NativeRealtime, RealtimeBackend};
pub use error::{PosixRtError, PosixRtResult};
pub use policy::SchedPolicy;
pub use rt_setup::RealtimeSetup;
pub use shim::{AppliedSetup, PagingOutcome, RealtimeShim};

/// Set the calling process's scheduling policy and priority.
///
/// Returns `0` on success and `-1` on failure, with the cause left in `errno`.
pub fn set_self_policy_priority(policy: i32, priority: i32) -> i32 {
    RealtimeShim::native().set_self_policy_priority(policy, priority)
}

/// Lock all current and future pages of the calling process into RAM.
///
/// Returns the `mlockall` status, or `0` where memory locking is unavailable.
pub fn stop_memory_paging() -> i32 {
    RealtimeShim::native().stop_memory_paging()
}
