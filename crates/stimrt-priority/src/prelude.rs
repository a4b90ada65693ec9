//! Prelude module for common priority-shim types.

pub use crate::backend::PriorityBackend;
pub use crate::error::{PriorityError, PriorityResult};
pub use crate::level::{ProcessPriority, ThreadPriority};
pub use crate::shim::PriorityShim;

#[cfg(windows)]
pub use crate::windows::Win32Priority;
