//! Explicit Bits++ device handle.

use std::ffi::CString;

use tracing::{debug, warn};

use crate::config::BitsConfig;
use crate::driver::{BitsDriver, BitsStatus, VendorLibrary};
use crate::error::{BitsError, BitsResult};
use crate::mode::VideoMode;

/// A Bits++ box reached through a [`BitsDriver`].
///
/// Every method is a single pass-through. Nothing is cached between calls, so
/// calling [`init`](Self::init) twice reaches the vendor twice and exposes its
/// own "already open" behaviour.
#[derive(Debug)]
pub struct BitsBox<D: BitsDriver> {
    driver: D,
    init_config: CString,
}

impl BitsBox<VendorLibrary> {
    /// Load the vendor library named by `config` and wrap it.
    ///
    /// The device is not initialised; call [`init`](Self::init) next.
    ///
    /// # Errors
    ///
    /// Returns the loader error, or [`BitsError::InvalidConfig`] for a bad
    /// init configuration string.
    pub fn open(config: &BitsConfig) -> BitsResult<Self> {
        let init_config = config.init_config_cstring()?;
        let driver = VendorLibrary::load(&config.library_path)?;
        Ok(Self {
            driver,
            init_config,
        })
    }
}

impl<D: BitsDriver> BitsBox<D> {
    /// Wrap a driver; `bitsInit` will receive an empty configuration string.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            init_config: CString::default(),
        }
    }

    /// Wrap a driver with a custom `bitsInit` configuration string.
    ///
    /// # Errors
    ///
    /// Returns [`BitsError::InvalidConfig`] if `config` contains a NUL byte.
    pub fn with_init_config(driver: D, config: &str) -> BitsResult<Self> {
        let init_config = BitsConfig::default()
            .with_init_config(config)
            .init_config_cstring()?;
        Ok(Self {
            driver,
            init_config,
        })
    }

    /// Borrow the underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Mutably borrow the underlying driver.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Release the underlying driver.
    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Initialise the box.
    ///
    /// # Errors
    ///
    /// Returns [`BitsError::InitFailed`] carrying the vendor status when it is negative.
    pub fn init(&mut self) -> BitsResult {
        let status = BitsStatus(self.driver.init(&self.init_config));
        if status.is_init_success() {
            debug!(status = status.0, "Bits++ initialised");
            Ok(())
        } else {
            warn!(status = status.0, "Bits++ initialisation failed");
            Err(BitsError::InitFailed { status })
        }
    }

    /// Set the video mode after rejecting contradictory gamma bits.
    ///
    /// # Errors
    ///
    /// Returns [`BitsError::ConflictingGammaFlags`] before reaching the vendor,
    /// or [`BitsError::SetVideoModeFailed`] for a nonzero vendor status.
    pub fn set_video_mode(&mut self, mode: VideoMode) -> BitsResult {
        let mode = mode.check()?;
        self.set_video_mode_raw(mode.bits())
    }

    /// Forward `flags` to the vendor exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`BitsError::SetVideoModeFailed`] for a nonzero vendor status.
    pub fn set_video_mode_raw(&mut self, flags: u32) -> BitsResult {
        let status = BitsStatus(self.driver.set_video_mode(flags));
        if status.is_mode_success() {
            debug!(mode = ?VideoMode::from_raw(flags), "Bits++ video mode set");
            Ok(())
        } else {
            warn!(
                mode = ?VideoMode::from_raw(flags),
                status = status.0,
                "Bits++ rejected video mode"
            );
            Err(BitsError::SetVideoModeFailed {
                status,
                mode: VideoMode::from_raw(flags),
            })
        }
    }

    /// Re-initialise the box, optionally switching its gamma correction off.
    ///
    /// Nothing further is sent when initialisation fails.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's error.
    pub fn reset(&mut self, no_gamma: bool) -> BitsResult {
        self.init()?;
        if no_gamma {
            self.set_video_mode(VideoMode::NO_GAMMA_CORRECT)?;
        }
        Ok(())
    }

    /// Initialise the box and have it read its LUT from the frame buffer with
    /// its own gamma correction off.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's error.
    pub fn enable_lut_mode(&mut self) -> BitsResult {
        self.init()?;
        self.set_video_mode(VideoMode::LUT_FROM_SCREEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::MockBitsDriver;
    use mockall::Sequence;
    use mockall::predicate::eq;

    #[test]
    fn test_init_success_and_failure() {
        let mut mock = MockBitsDriver::new();
        let mut seq = Sequence::new();
        mock.expect_init()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(0);
        mock.expect_init()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(-4);

        let mut bits = BitsBox::new(mock);
        assert!(bits.init().is_ok());
        match bits.init() {
            Err(BitsError::InitFailed { status }) => assert_eq!(status, BitsStatus(-4)),
            other => panic!("expected InitFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_positive_init_status_is_success() {
        let mut mock = MockBitsDriver::new();
        mock.expect_init().times(1).return_const(2);
        let mut bits = BitsBox::new(mock);
        assert!(bits.init().is_ok());
    }

    #[test]
    fn test_set_video_mode_forwards_exact_bits() {
        let mut mock = MockBitsDriver::new();
        mock.expect_set_video_mode()
            .with(eq(0x0000_8000))
            .times(1)
            .return_const(0);

        let mut bits = BitsBox::new(mock);
        assert!(bits.set_video_mode(VideoMode::GAMMA_CORRECT).is_ok());
    }

    #[test]
    fn test_set_video_mode_nonzero_is_failure() {
        let mut mock = MockBitsDriver::new();
        mock.expect_set_video_mode().times(1).return_const(1);

        let mut bits = BitsBox::new(mock);
        let err = bits.set_video_mode(VideoMode::PALETTE_8BIT);
        match err {
            Err(BitsError::SetVideoModeFailed { status, mode }) => {
                assert_eq!(status, BitsStatus(1));
                assert_eq!(mode, VideoMode::PALETTE_8BIT);
            }
            other => panic!("expected SetVideoModeFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_conflicting_gamma_never_reaches_vendor() {
        let mut mock = MockBitsDriver::new();
        mock.expect_set_video_mode().never();

        let mut bits = BitsBox::new(mock);
        let result = bits.set_video_mode(VideoMode::GAMMA_CORRECT | VideoMode::NO_GAMMA_CORRECT);
        assert!(matches!(
            result,
            Err(BitsError::ConflictingGammaFlags { .. })
        ));
    }

    #[test]
    fn test_raw_mode_skips_flag_check() {
        let mut mock = MockBitsDriver::new();
        mock.expect_set_video_mode()
            .with(eq(0x0000_c000))
            .times(1)
            .return_const(0);

        let mut bits = BitsBox::new(mock);
        assert!(bits.set_video_mode_raw(0x0000_c000).is_ok());
    }

    #[test]
    fn test_reset_stops_after_failed_init() {
        let mut mock = MockBitsDriver::new();
        mock.expect_init().times(1).return_const(-1);
        mock.expect_set_video_mode().never();

        let mut bits = BitsBox::new(mock);
        assert!(matches!(
            bits.reset(true),
            Err(BitsError::InitFailed { .. })
        ));
    }

    #[test]
    fn test_reset_without_gamma_switch() {
        let mut mock = MockBitsDriver::new();
        mock.expect_init().times(1).return_const(0);
        mock.expect_set_video_mode().never();

        let mut bits = BitsBox::new(mock);
        assert!(bits.reset(false).is_ok());
    }

    #[test]
    fn test_enable_lut_mode_sequence() {
        let mut mock = MockBitsDriver::new();
        let mut seq = Sequence::new();
        mock.expect_init()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(0);
        mock.expect_set_video_mode()
            .with(eq(0x0008_4000))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(0);

        let mut bits = BitsBox::new(mock);
        assert!(bits.enable_lut_mode().is_ok());
    }

    #[test]
    fn test_with_init_config_rejects_nul() {
        let result = BitsBox::with_init_config(MockBitsDriver::new(), "bad\0config");
        assert!(matches!(result, Err(BitsError::InvalidConfig(_))));
    }
}
