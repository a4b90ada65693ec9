//! C ABI surface for the stimrt shims.
//!
//! The host runtime loads this library and calls the `stimrt_*` exports. Each
//! export keeps the raw-integer contract the host already expects:
//!
//! | Export | Success | Failure |
//! |--------|---------|---------|
//! | `stimrt_bits_init`, `stimrt_bits_set_video_mode` | `1` | `0` |
//! | `stimrt_set_process_priority`, `stimrt_set_thread_priority` (Windows) | OS result | `0` |
//! | `stimrt_get_refresh` (Windows) | `1`, rate written out | `0` |
//! | `stimrt_set_self_policy_priority` | `0` | `-1` |
//! | `stimrt_stop_memory_paging` | `0` (also when unsupported) | OS status |
//!
//! The Bits++ device is an explicit handle from `stimrt_bits_open`, released
//! with `stimrt_bits_close`. Null handles are reported as failures.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod bits;
pub mod logging;
pub mod posix;

#[cfg(windows)]
pub mod priority;

use std::ffi::c_int;

/// Legacy boolean success value.
pub const STIMRT_TRUE: c_int = 1;

/// Legacy boolean failure value.
pub const STIMRT_FALSE: c_int = 0;

fn as_flag<T, E>(result: &Result<T, E>) -> c_int {
    if result.is_ok() {
        STIMRT_TRUE
    } else {
        STIMRT_FALSE
    }
}
