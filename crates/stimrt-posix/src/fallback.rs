//! Fallback platform implementation for non-Unix systems.

use std::io;

use crate::backend::RealtimeBackend;

/// Reports every facility as unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeRealtime;

impl RealtimeBackend for NativeRealtime {
    fn set_scheduler(&self, _pid: i32, _policy: i32, _priority: i32) -> Option<i32> {
        None
    }

    fn lock_all_memory(&self) -> Option<i32> {
        None
    }

    fn priority_bounds(&self, _policy: i32) -> Option<(i32, i32)> {
        None
    }

    fn last_os_error(&self) -> io::Error {
        io::Error::from(io::ErrorKind::Unsupported)
    }
}
