//! Bits++ video-mode flags.

use bitflags::bitflags;

use crate::error::{BitsError, BitsResult};

bitflags! {
    /// Video-mode flags understood by `bitsSetVideoMode`.
    ///
    /// Callers combine flags with `|` before handing them to the device.
    /// Bits not named here are vendor-specific; they are retained and passed
    /// through unmodified.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct VideoMode: u32 {
        /// Normal 8-bit palette (VSG) mode
        const PALETTE_8BIT        = 0x0000_0001;

        /// Disable the box's own gamma correction
        const NO_GAMMA_CORRECT    = 0x0000_4000;

        /// Enable the box's own gamma correction
        const GAMMA_CORRECT       = 0x0000_8000;

        /// Read the LUT from the video signal itself
        const VIDEO_ENCODED_COMMS = 0x0008_0000;

        const _ = !0;
    }
}

impl VideoMode {
    /// Mode used to drive the LUT from the frame buffer with the box's gamma off.
    pub const LUT_FROM_SCREEN: Self =
        Self::from_bits_retain(Self::NO_GAMMA_CORRECT.bits() | Self::VIDEO_ENCODED_COMMS.bits());

    /// Wrap a raw vendor bitmask without dropping any bits.
    pub const fn from_raw(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }

    /// Reject combinations the device cannot honour.
    ///
    /// Only the gamma pair is checked; everything else is the vendor's call.
    ///
    /// # Errors
    ///
    /// Returns [`BitsError::ConflictingGammaFlags`] when both gamma bits are set.
    pub fn check(self) -> BitsResult<Self> {
        if self.contains(Self::GAMMA_CORRECT | Self::NO_GAMMA_CORRECT) {
            return Err(BitsError::ConflictingGammaFlags { mode: self });
        }
        Ok(self)
    }
}

impl From<u32> for VideoMode {
    fn from(bits: u32) -> Self {
        Self::from_raw(bits)
    }
}

impl From<VideoMode> for u32 {
    fn from(mode: VideoMode) -> Self {
        mode.bits()
    }
}
