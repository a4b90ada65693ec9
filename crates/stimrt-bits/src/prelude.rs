//! Prelude module for common Bits++ types.
//!
//! This module provides a convenient way to import the most commonly used
//! types from the Bits++ crate.

pub use crate::config::BitsConfig;
pub use crate::device::BitsBox;
pub use crate::driver::{BitsDriver, BitsStatus, VendorLibrary};
pub use crate::error::{BitsError, BitsResult};
pub use crate::mode::VideoMode;
