//! OS capability behind the priority shim.

/// The three Win32 facilities the shim forwards to.
///
/// Implementations make exactly one OS call per method and report its raw result.
pub trait PriorityBackend {
    /// `SetPriorityClass` on the current process. Nonzero on success, `0` on failure.
    fn set_priority_class(&self, class: u32) -> i32;

    /// `SetThreadPriority` on the calling thread. Nonzero on success, `0` on failure.
    fn set_thread_priority(&self, priority: i32) -> i32;

    /// Vertical refresh of the current display mode in Hz, or `None` when the
    /// settings cannot be enumerated.
    fn current_display_frequency(&self) -> Option<u32>;
}

impl<B: PriorityBackend + ?Sized> PriorityBackend for &B {
    fn set_priority_class(&self, class: u32) -> i32 {
        (**self).set_priority_class(class)
    }

    fn set_thread_priority(&self, priority: i32) -> i32 {
        (**self).set_thread_priority(priority)
    }

    fn current_display_frequency(&self) -> Option<u32> {
        (**self).current_display_frequency()
    }
}
