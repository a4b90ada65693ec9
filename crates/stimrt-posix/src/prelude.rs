//! Prelude module for common real-time shim types.
//!
//! This module provides a convenient way to import the most commonly used
//! types from the POSIX real-time crate.

pub use crate::backend::{NativeRealtime, RealtimeBackend};
pub use crate::error::{PosixRtError, PosixRtResult};
pub use crate::policy::SchedPolicy;
pub use crate::rt_setup::RealtimeSetup;
pub use crate::shim::{AppliedSetup, PagingOutcome, RealtimeShim};
pub use crate::{set_self_policy_priority, stop_memory_paging};
