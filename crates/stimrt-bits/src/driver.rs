//! Vendor library binding and the driver capability.

use std::ffi::{CStr, c_char, c_int};
use std::fmt;
use std::path::{Path, PathBuf};

use libloading::Library;
use tracing::{debug, info};

use crate::error::{BitsError, BitsResult};
use crate::{INIT_SYMBOL, SET_VIDEO_MODE_SYMBOL};

/// Raw status code returned by the vendor library.
///
/// The meaning of individual codes belongs to the vendor and is not decoded here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct BitsStatus(pub i32);

impl BitsStatus {
    /// `bitsInit` treats every non-negative status as success.
    pub fn is_init_success(self) -> bool {
        self.0 >= 0
    }

    /// `bitsSetVideoMode` only succeeds with zero.
    pub fn is_mode_success(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for BitsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Access to the two Bits++ vendor entry points.
///
/// Implementations forward each call once and report the raw status.
#[cfg_attr(test, mockall::automock)]
pub trait BitsDriver: Send {
    /// Forward to `bitsInit` with the given configuration string.
    fn init(&mut self, config: &CStr) -> i32;

    /// Forward to `bitsSetVideoMode` with the given flags.
    fn set_video_mode(&mut self, flags: u32) -> i32;
}

impl<D: BitsDriver + ?Sized> BitsDriver for Box<D> {
    fn init(&mut self, config: &CStr) -> i32 {
        (**self).init(config)
    }

    fn set_video_mode(&mut self, flags: u32) -> i32 {
        (**self).set_video_mode(flags)
    }
}

type BitsInitFn = unsafe extern "system" fn(*const c_char) -> c_int;
type BitsSetVideoModeFn = unsafe extern "system" fn(u32) -> c_int;

/// The vendor's Bits++ shared library.
///
/// The library stays loaded for as long as this value lives, which keeps the
/// resolved function pointers valid.
pub struct VendorLibrary {
    init_fn: BitsInitFn,
    set_video_mode_fn: BitsSetVideoModeFn,
    path: PathBuf,
    _library: Library,
}

impl VendorLibrary {
    /// Load the vendor library and resolve both entry points.
    ///
    /// # Errors
    ///
    /// Returns [`BitsError::LibraryLoad`] if the library cannot be opened and
    /// [`BitsError::MissingSymbol`] if either export is absent.
    pub fn load(path: impl AsRef<Path>) -> BitsResult<Self> {
        let path = path.as_ref();

        // SAFETY: loading runs the library's initialisers; the vendor library is
        // trusted by the caller that named it.
        let library = unsafe { Library::new(path) }.map_err(|source| BitsError::LibraryLoad {
            path: path.to_path_buf(),
            source,
        })?;

        // SAFETY: the export is declared by the vendor header as
        // `int __stdcall bitsInit(char *)`, matching `BitsInitFn`.
        let init_fn = unsafe { library.get::<BitsInitFn>(INIT_SYMBOL) }
            .map(|symbol| *symbol)
            .map_err(|source| BitsError::MissingSymbol {
                symbol: INIT_SYMBOL,
                source,
            })?;

        // SAFETY: the export is declared by the vendor header as
        // `int __stdcall bitsSetVideoMode(unsigned long)`, matching `BitsSetVideoModeFn`.
        let set_video_mode_fn =
            unsafe { library.get::<BitsSetVideoModeFn>(SET_VIDEO_MODE_SYMBOL) }
                .map(|symbol| *symbol)
                .map_err(|source| BitsError::MissingSymbol {
                    symbol: SET_VIDEO_MODE_SYMBOL,
                    source,
                })?;

        info!(path = %path.display(), "Loaded Bits++ vendor library");

        Ok(Self {
            init_fn,
            set_video_mode_fn,
            path: path.to_path_buf(),
            _library: library,
        })
    }

    /// Path the library was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Debug for VendorLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VendorLibrary")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl BitsDriver for VendorLibrary {
    fn init(&mut self, config: &CStr) -> i32 {
        debug!(library = %self.path.display(), "bitsInit");
        // SAFETY: `init_fn` was resolved from `_library`, which is still loaded,
        // and `config` is a valid NUL-terminated string for the whole call.
        unsafe { (self.init_fn)(config.as_ptr()) }
    }

    fn set_video_mode(&mut self, flags: u32) -> i32 {
        debug!(library = %self.path.display(), flags, "bitsSetVideoMode");
        // SAFETY: `set_video_mode_fn` was resolved from `_library`, which is still loaded.
        unsafe { (self.set_video_mode_fn)(flags) }
    }
}
