//! Windows priority exports.

use std::ffi::c_int;

use stimrt_priority::PriorityShim;

use crate::{STIMRT_FALSE, STIMRT_TRUE};

/// Set the process priority class; returns the OS result unchanged.
#[unsafe(no_mangle)]
pub extern "C" fn stimrt_set_process_priority(priority_class: c_int) -> c_int {
    PriorityShim::native().set_process_priority(priority_class)
}

/// Set the calling thread's priority; returns the OS result unchanged.
#[unsafe(no_mangle)]
pub extern "C" fn stimrt_set_thread_priority(priority: c_int) -> c_int {
    PriorityShim::native().set_thread_priority(priority)
}

/// Write the current display refresh rate in Hz to `out_hz`.
///
/// Returns `1` on success, `0` when the settings cannot be read or `out_hz` is null.
///
/// # Safety
///
/// `out_hz` must be null or valid for a write of one `f64`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn stimrt_get_refresh(out_hz: *mut f64) -> c_int {
    if out_hz.is_null() {
        return STIMRT_FALSE;
    }
    match PriorityShim::native().get_refresh() {
        Ok(hz) => {
            // SAFETY: non-null and writable per the caller contract.
            unsafe { out_hz.write(hz) };
            STIMRT_TRUE
        }
        Err(_) => STIMRT_FALSE,
    }
}
