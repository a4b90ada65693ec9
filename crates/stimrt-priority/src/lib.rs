//! Windows process and thread priority shim.
//!
//! Each operation forwards one value to one Win32 call and hands back the
//! OS's own result:
//!
//! - **`set_process_priority`**: `SetPriorityClass` on the current process
//! - **`set_thread_priority`**: `SetThreadPriority` on the calling thread
//! - **`get_refresh`**: the current display's refresh rate from `EnumDisplaySettingsW`
//!
//! Priority values are never checked here; the OS rejects illegal ones and the
//! shim passes its answer through. Raw results follow Win32 `BOOL`
//! conventions: nonzero on success, `0` on failure.
//!
//! The OS is reached through [`PriorityBackend`], so the shim can be driven by
//! a fake on any platform. [`Win32Priority`] is the real backend and only
//! exists on Windows.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod backend;
pub mod error;
pub mod level;
pub mod prelude;
pub mod shim;

#[cfg(windows)]
#[cfg_attr(docsrs, doc(cfg(windows)))]
mod windows;

pub use backend::PriorityBackend;
pub use error::{PriorityError, PriorityResult};
pub use level::{ProcessPriority, ThreadPriority};
pub use shim::PriorityShim;

#[cfg(windows)]
pub use crate::windows::Win32Priority;
