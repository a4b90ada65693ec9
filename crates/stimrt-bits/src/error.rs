//! Error types for the Bits++ shim.

use std::path::PathBuf;
use thiserror::Error;

use crate::driver::BitsStatus;
use crate::mode::VideoMode;

/// Error type for Bits++ operations.
#[derive(Error, Debug)]
pub enum BitsError {
    /// The vendor library could not be opened.
    #[error("Failed to load Bits++ library {}: {source}", .path.display())]
    LibraryLoad {
        /// Path that was handed to the loader.
        path: PathBuf,
        /// Loader error.
        #[source]
        source: libloading::Error,
    },

    /// The vendor library does not export a required symbol.
    #[error("Bits++ library is missing symbol `{symbol}`: {source}")]
    MissingSymbol {
        /// Name of the missing export.
        symbol: &'static str,
        /// Loader error.
        #[source]
        source: libloading::Error,
    },

    /// `bitsInit` reported a negative status.
    #[error("Bits++ initialisation failed with vendor status {status}")]
    InitFailed {
        /// Raw vendor status.
        status: BitsStatus,
    },

    /// `bitsSetVideoMode` reported a nonzero status.
    #[error("Bits++ rejected video mode {:#010x} with vendor status {status}", .mode.bits())]
    SetVideoModeFailed {
        /// Raw vendor status.
        status: BitsStatus,
        /// Mode that was requested.
        mode: VideoMode,
    },

    /// Both gamma-correct and no-gamma-correct bits were requested.
    #[error("Video mode {:#010x} requests gamma correction both on and off", .mode.bits())]
    ConflictingGammaFlags {
        /// Offending mode.
        mode: VideoMode,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    InvalidConfig(String),
}

impl BitsError {
    /// Raw vendor status, if this error came from the vendor library.
    pub fn vendor_status(&self) -> Option<BitsStatus> {
        match self {
            BitsError::InitFailed { status } | BitsError::SetVideoModeFailed { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

/// Result type for Bits++ operations.
pub type BitsResult<T = ()> = Result<T, BitsError>;
