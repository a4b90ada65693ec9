//! Control shim for the CRS Bits++ video processor.
//!
//! The device itself is driven by a proprietary stdcall library shipped by the
//! vendor. This crate resolves the two entry points the host needs,
//! `bitsInit` and `bitsSetVideoMode`, and forwards calls to them verbatim:
//!
//! - **[`VendorLibrary`]**: the vendor shared library, loaded at runtime
//! - **[`BitsDriver`]**: the capability seam, so tests can substitute a fake
//! - **[`BitsBox`]**: an explicit device handle owning its driver
//! - **[`VideoMode`]**: typed video-mode flags that still carry unknown vendor bits
//!
//! Vendor status codes are never decoded. A negative `bitsInit` status or a
//! nonzero `bitsSetVideoMode` status is surfaced as-is inside [`BitsError`].
//!
//! # Example
//!
//! ```no_run
//! use stimrt_bits::{BitsBox, BitsConfig, VideoMode};
//!
//! let config = BitsConfig::from_env();
//! let mut bits = BitsBox::open(&config).expect("vendor library missing");
//! bits.init().expect("Bits++ did not initialise");
//! bits.set_video_mode(VideoMode::GAMMA_CORRECT)
//!     .expect("video mode rejected");
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod device;
pub mod driver;
pub mod error;
pub mod mode;
pub mod prelude;

pub use config::BitsConfig;
pub use device::BitsBox;
pub use driver::{BitsDriver, BitsStatus, VendorLibrary};
pub use error::{BitsError, BitsResult};
pub use mode::VideoMode;

/// Name of the vendor initialiser export.
pub const INIT_SYMBOL: &str = "bitsInit";

/// Name of the vendor video-mode export.
pub const SET_VIDEO_MODE_SYMBOL: &str = "bitsSetVideoMode";
