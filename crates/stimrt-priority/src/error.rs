//! Error types for the priority shim.

use thiserror::Error;

/// Error type for priority-shim operations.
///
/// Priority changes report the OS's raw code instead of an error; only the
/// refresh query can fail this way.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityError {
    /// The current display settings could not be enumerated.
    #[error("Cannot read the current display settings")]
    DisplaySettingsUnavailable,
}

/// Result type for priority-shim operations.
pub type PriorityResult<T> = Result<T, PriorityError>;
