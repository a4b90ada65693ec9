//! Integration tests for the Bits++ shim.

use std::ffi::{CStr, CString};

use stimrt_bits::prelude::*;
use tracing_test::traced_test;

/// Records every call and replays scripted statuses.
#[derive(Debug, Default)]
struct RecordingDriver {
    init_configs: Vec<CString>,
    modes: Vec<u32>,
    init_statuses: Vec<i32>,
    mode_status: i32,
    open: bool,
}

impl RecordingDriver {
    /// Behaves like the vendor library: a second init without closing reports
    /// "already open".
    fn vendor_like() -> Self {
        Self::default()
    }

    fn scripted(init_statuses: Vec<i32>, mode_status: i32) -> Self {
        Self {
            init_statuses,
            mode_status,
            ..Self::default()
        }
    }
}

const ALREADY_OPEN: i32 = -3;

impl BitsDriver for RecordingDriver {
    fn init(&mut self, config: &CStr) -> i32 {
        self.init_configs.push(config.to_owned());
        if !self.init_statuses.is_empty() {
            return self.init_statuses.remove(0);
        }
        if self.open {
            ALREADY_OPEN
        } else {
            self.open = true;
            0
        }
    }

    fn set_video_mode(&mut self, flags: u32) -> i32 {
        self.modes.push(flags);
        self.mode_status
    }
}

#[test]
fn test_init_passes_empty_config() {
    let mut bits = BitsBox::new(RecordingDriver::vendor_like());
    assert!(bits.init().is_ok());

    let driver = bits.into_driver();
    assert_eq!(driver.init_configs.len(), 1);
    assert!(driver.init_configs.iter().all(|c| c.as_bytes().is_empty()));
}

#[test]
fn test_second_init_reaches_vendor() {
    let mut bits = BitsBox::new(RecordingDriver::vendor_like());
    assert!(bits.init().is_ok());

    match bits.init() {
        Err(BitsError::InitFailed { status }) => assert_eq!(status, BitsStatus(ALREADY_OPEN)),
        other => panic!("expected the vendor's already-open status, got {other:?}"),
    }
    assert_eq!(bits.driver().init_configs.len(), 2);
}

#[test]
fn test_custom_init_config_is_forwarded() -> Result<(), BitsError> {
    let mut bits = BitsBox::with_init_config(RecordingDriver::vendor_like(), "port=USB1")?;
    bits.init()?;
    assert_eq!(
        bits.driver().init_configs.first().map(|c| c.as_bytes().to_vec()),
        Some(b"port=USB1".to_vec())
    );
    Ok(())
}

#[test]
fn test_gamma_correct_on_initialised_device() -> Result<(), BitsError> {
    let mut bits = BitsBox::new(RecordingDriver::vendor_like());
    bits.init()?;
    bits.set_video_mode(VideoMode::from_raw(0x0000_8000))?;
    assert_eq!(bits.driver().modes, vec![0x0000_8000]);
    Ok(())
}

#[test]
fn test_reset_with_no_gamma() -> Result<(), BitsError> {
    let mut bits = BitsBox::new(RecordingDriver::vendor_like());
    bits.reset(true)?;
    assert_eq!(bits.driver().init_configs.len(), 1);
    assert_eq!(bits.driver().modes, vec![VideoMode::NO_GAMMA_CORRECT.bits()]);
    Ok(())
}

#[test]
fn test_enable_lut_mode_stops_on_init_failure() {
    let mut bits = BitsBox::new(RecordingDriver::scripted(vec![-1], 0));
    assert!(matches!(
        bits.enable_lut_mode(),
        Err(BitsError::InitFailed { .. })
    ));
    assert!(bits.driver().modes.is_empty());
}

#[test]
fn test_mode_failure_keeps_vendor_status() {
    let mut bits = BitsBox::new(RecordingDriver::scripted(vec![0], -2));
    let err = bits
        .enable_lut_mode()
        .err()
        .and_then(|e| e.vendor_status());
    assert_eq!(err, Some(BitsStatus(-2)));
    assert_eq!(bits.driver().modes, vec![0x0008_4000]);
}

#[test]
fn test_boxed_driver_in_handle() -> Result<(), BitsError> {
    let driver: Box<dyn BitsDriver> = Box::new(RecordingDriver::vendor_like());
    let mut bits = BitsBox::new(driver);
    bits.init()?;
    bits.set_video_mode(VideoMode::PALETTE_8BIT)?;
    Ok(())
}

#[test]
fn test_open_with_missing_library_fails() {
    let config = BitsConfig::new().with_library_path("/nonexistent/crs/libbits.so");
    assert!(matches!(
        BitsBox::open(&config),
        Err(BitsError::LibraryLoad { .. })
    ));
}

#[test]
#[traced_test]
fn test_failures_are_logged() {
    let mut bits = BitsBox::new(RecordingDriver::scripted(vec![-5], 0));
    assert!(bits.init().is_err());
    assert!(logs_contain("Bits++ initialisation failed"));
}
