//! The priority shim itself.

use tracing::{debug, warn};

use crate::backend::PriorityBackend;
use crate::error::{PriorityError, PriorityResult};
use crate::level::{ProcessPriority, ThreadPriority};

/// Forwards priority requests to a [`PriorityBackend`].
#[derive(Debug, Clone, Default)]
pub struct PriorityShim<B> {
    backend: B,
}

#[cfg(windows)]
impl PriorityShim<crate::windows::Win32Priority> {
    /// Shim backed by the real Win32 calls.
    pub fn native() -> Self {
        Self::new(crate::windows::Win32Priority)
    }
}

impl<B: PriorityBackend> PriorityShim<B> {
    /// Wrap a backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Borrow the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Set the current process's priority class.
    ///
    /// Returns the OS result unchanged: nonzero on success, `0` on failure.
    /// A legitimate zero and a failure are not told apart.
    pub fn set_process_priority(&self, class: impl Into<ProcessPriority>) -> i32 {
        let class = class.into();
        let result = self.backend.set_priority_class(class.value());
        if result == 0 {
            warn!(?class, "SetPriorityClass failed");
        } else {
            debug!(?class, result, "SetPriorityClass");
        }
        result
    }

    /// Set the calling thread's priority.
    ///
    /// Same contract as [`set_process_priority`](Self::set_process_priority).
    pub fn set_thread_priority(&self, priority: impl Into<ThreadPriority>) -> i32 {
        let priority = priority.into();
        let result = self.backend.set_thread_priority(priority.value());
        if result == 0 {
            warn!(?priority, "SetThreadPriority failed");
        } else {
            debug!(?priority, result, "SetThreadPriority");
        }
        result
    }

    /// Refresh rate of the current display in Hz.
    ///
    /// # Errors
    ///
    /// Returns [`PriorityError::DisplaySettingsUnavailable`] when the display
    /// settings cannot be enumerated.
    pub fn get_refresh(&self) -> PriorityResult<f64> {
        match self.backend.current_display_frequency() {
            Some(hz) => {
                debug!(hz, "Current display refresh");
                Ok(f64::from(hz))
            }
            None => {
                warn!("EnumDisplaySettings could not read the current mode");
                Err(PriorityError::DisplaySettingsUnavailable)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct StubBackend {
        last_class: Cell<Option<u32>>,
        last_thread: Cell<Option<i32>>,
        result: i32,
        refresh: Option<u32>,
    }

    impl PriorityBackend for StubBackend {
        fn set_priority_class(&self, class: u32) -> i32 {
            self.last_class.set(Some(class));
            self.result
        }

        fn set_thread_priority(&self, priority: i32) -> i32 {
            self.last_thread.set(Some(priority));
            self.result
        }

        fn current_display_frequency(&self) -> Option<u32> {
            self.refresh
        }
    }

    #[test]
    fn test_process_priority_passes_class_through() {
        let shim = PriorityShim::new(StubBackend {
            result: 1,
            ..StubBackend::default()
        });
        assert_eq!(shim.set_process_priority(ProcessPriority::High), 1);
        assert_eq!(shim.backend().last_class.get(), Some(0x80));
    }

    #[test]
    fn test_zero_result_is_returned_not_raised() {
        let shim = PriorityShim::new(StubBackend::default());
        assert_eq!(shim.set_thread_priority(ThreadPriority::TimeCritical), 0);
        assert_eq!(shim.backend().last_thread.get(), Some(15));
    }

    #[test]
    fn test_get_refresh() {
        let shim = PriorityShim::new(StubBackend {
            refresh: Some(120),
            ..StubBackend::default()
        });
        assert_eq!(shim.get_refresh().ok().map(|hz| hz as u32), Some(120));

        let blind = PriorityShim::new(StubBackend::default());
        assert_eq!(
            blind.get_refresh(),
            Err(PriorityError::DisplaySettingsUnavailable)
        );
    }
}
