//! Error types for the POSIX real-time shim.

use std::io;

use thiserror::Error;

use crate::policy::SchedPolicy;

/// Error type for typed real-time operations.
#[derive(Error, Debug)]
pub enum PosixRtError {
    /// The OS refused the request.
    #[error("{operation} rejected by the OS: {source}")]
    Rejected {
        /// OS call that failed.
        operation: &'static str,
        /// `errno` captured right after the call.
        #[source]
        source: io::Error,
    },

    /// The facility does not exist on this platform.
    #[error("{operation} is not available on this platform")]
    Unsupported {
        /// OS call that is missing.
        operation: &'static str,
    },

    /// The requested priority lies outside what the OS allows for the policy.
    #[error("Priority {priority} outside {min}..={max} for {policy:?}")]
    InvalidPriorityRange {
        /// Policy that was requested.
        policy: SchedPolicy,
        /// Priority that was requested.
        priority: i32,
        /// Lowest priority the OS accepts for `policy`.
        min: i32,
        /// Highest priority the OS accepts for `policy`.
        max: i32,
    },
}

impl PosixRtError {
    /// Raw `errno` of a rejection.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            PosixRtError::Rejected { source, .. } => source.raw_os_error(),
            PosixRtError::Unsupported { .. } | PosixRtError::InvalidPriorityRange { .. } => None,
        }
    }

    /// Whether the failure means the capability is missing rather than refused.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, PosixRtError::Unsupported { .. })
    }
}

/// Result type for typed real-time operations.
pub type PosixRtResult<T = ()> = Result<T, PosixRtError>;
