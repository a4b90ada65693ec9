//! Bits++ exports.

use std::ffi::{CStr, c_char, c_int};
use std::ptr;

use stimrt_bits::{BitsBox, BitsConfig, VendorLibrary};
use tracing::warn;

use crate::{STIMRT_FALSE, as_flag};

/// Opaque Bits++ device handle owned by the host.
pub struct BitsHandle {
    device: BitsBox<VendorLibrary>,
}

/// Load the vendor library and return a device handle.
///
/// A null `library_path` uses the default library name, overridden by
/// `STIMRT_BITS_LIBRARY`. Returns null when the library cannot be loaded.
///
/// # Safety
///
/// `library_path` must be null or point to a NUL-terminated string that stays
/// valid for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn stimrt_bits_open(library_path: *const c_char) -> *mut BitsHandle {
    let config = if library_path.is_null() {
        BitsConfig::from_env()
    } else {
        // SAFETY: non-null and NUL-terminated per the caller contract.
        let raw = unsafe { CStr::from_ptr(library_path) };
        match raw.to_str() {
            Ok(path) => BitsConfig::new().with_library_path(path),
            Err(e) => {
                warn!(error = %e, "Bits++ library path is not valid UTF-8");
                return ptr::null_mut();
            }
        }
    };

    match BitsBox::open(&config) {
        Ok(device) => Box::into_raw(Box::new(BitsHandle { device })),
        Err(e) => {
            warn!(error = %e, "stimrt_bits_open failed");
            ptr::null_mut()
        }
    }
}

/// Release a handle from [`stimrt_bits_open`]. Null is ignored.
///
/// # Safety
///
/// `handle` must be null or a pointer returned by [`stimrt_bits_open`] that has
/// not been closed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn stimrt_bits_close(handle: *mut BitsHandle) {
    if !handle.is_null() {
        // SAFETY: the pointer came from `Box::into_raw` and is released exactly once.
        drop(unsafe { Box::from_raw(handle) });
    }
}

/// Initialise the device. `1` on success, `0` on failure or a null handle.
///
/// # Safety
///
/// `handle` must be null or a live pointer from [`stimrt_bits_open`], not used
/// concurrently from another thread.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn stimrt_bits_init(handle: *mut BitsHandle) -> c_int {
    // SAFETY: null or live and exclusively borrowed per the caller contract.
    match unsafe { handle.as_mut() } {
        Some(handle) => as_flag(&handle.device.init()),
        None => STIMRT_FALSE,
    }
}

/// Forward `flags` unmodified to `bitsSetVideoMode`. `1` on success, `0` otherwise.
///
/// # Safety
///
/// Same contract as [`stimrt_bits_init`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn stimrt_bits_set_video_mode(handle: *mut BitsHandle, flags: u32) -> c_int {
    // SAFETY: null or live and exclusively borrowed per the caller contract.
    match unsafe { handle.as_mut() } {
        Some(handle) => as_flag(&handle.device.set_video_mode_raw(flags)),
        None => STIMRT_FALSE,
    }
}
