//! Windows-specific backend.

use windows::Win32::Graphics::Gdi::{DEVMODEW, ENUM_CURRENT_SETTINGS, EnumDisplaySettingsW};
use windows::Win32::System::Threading::{
    GetCurrentProcess, GetCurrentThread, PROCESS_CREATION_FLAGS, SetPriorityClass,
    SetThreadPriority, THREAD_PRIORITY,
};
use windows::core::PCWSTR;

use crate::backend::PriorityBackend;

/// The real Win32 priority and display calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Priority;

impl PriorityBackend for Win32Priority {
    fn set_priority_class(&self, class: u32) -> i32 {
        // SAFETY: `GetCurrentProcess` returns a pseudo-handle that is always valid
        // for the calling process and never needs closing.
        let result = unsafe { SetPriorityClass(GetCurrentProcess(), PROCESS_CREATION_FLAGS(class)) };
        i32::from(result.is_ok())
    }

    fn set_thread_priority(&self, priority: i32) -> i32 {
        // SAFETY: `GetCurrentThread` returns a pseudo-handle that is always valid
        // for the calling thread and never needs closing.
        let result = unsafe { SetThreadPriority(GetCurrentThread(), THREAD_PRIORITY(priority)) };
        i32::from(result.is_ok())
    }

    fn current_display_frequency(&self) -> Option<u32> {
        let mut mode = DEVMODEW {
            dmSize: u16::try_from(std::mem::size_of::<DEVMODEW>()).ok()?,
            ..Default::default()
        };

        // SAFETY: a null device name selects the display of the calling thread, and
        // `mode` is a writable DEVMODEW with `dmSize` filled in as the API requires.
        let found = unsafe { EnumDisplaySettingsW(PCWSTR::null(), ENUM_CURRENT_SETTINGS, &mut mode) };

        found.as_bool().then_some(mode.dmDisplayFrequency)
    }
}
