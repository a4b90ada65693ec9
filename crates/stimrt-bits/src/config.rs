//! Bits++ shim configuration.

use std::ffi::CString;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{BitsError, BitsResult};

/// Environment variable that overrides [`BitsConfig::library_path`].
pub const LIBRARY_ENV_VAR: &str = "STIMRT_BITS_LIBRARY";

#[cfg(windows)]
const DEFAULT_LIBRARY: &str = "bits.dll";

#[cfg(target_os = "macos")]
const DEFAULT_LIBRARY: &str = "libbits.dylib";

#[cfg(not(any(windows, target_os = "macos")))]
const DEFAULT_LIBRARY: &str = "libbits.so";

/// Where to find the vendor library and what to hand to `bitsInit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BitsConfig {
    /// Path (or bare name, resolved by the platform loader) of the vendor library.
    pub library_path: PathBuf,

    /// Configuration string passed to `bitsInit`. Empty by default.
    pub init_config: String,
}

impl Default for BitsConfig {
    fn default() -> Self {
        Self {
            library_path: PathBuf::from(DEFAULT_LIBRARY),
            init_config: String::new(),
        }
    }
}

impl BitsConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with the library path taken from
    /// `STIMRT_BITS_LIBRARY` when it is set and non-empty.
    pub fn from_env() -> Self {
        Self::default().with_env_override(std::env::var_os(LIBRARY_ENV_VAR))
    }

    fn with_env_override(mut self, value: Option<std::ffi::OsString>) -> Self {
        if let Some(path) = value.filter(|v| !v.is_empty()) {
            self.library_path = PathBuf::from(path);
        }
        self
    }

    /// Set the library path.
    pub fn with_library_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.library_path = path.into();
        self
    }

    /// Set the `bitsInit` configuration string.
    pub fn with_init_config(mut self, config: impl Into<String>) -> Self {
        self.init_config = config.into();
        self
    }

    /// The init configuration as a C string.
    ///
    /// # Errors
    ///
    /// Returns [`BitsError::InvalidConfig`] if the string contains a NUL byte.
    pub fn init_config_cstring(&self) -> BitsResult<CString> {
        CString::new(self.init_config.as_str()).map_err(|e| {
            BitsError::InvalidConfig(format!(
                "init_config contains a NUL byte at offset {}",
                e.nul_position()
            ))
        })
    }
}
