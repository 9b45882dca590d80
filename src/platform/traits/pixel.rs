//! Addressable pixel strip interface trait
//!
//! This module defines the interface for fixed-length addressable RGB strips
//! (e.g. the WS2812 underglow pixels on the Maqueen Plus V2 chassis).

use crate::platform::Result;

/// Addressable pixel strip interface trait
///
/// Implementations hold a staging buffer of RGB triples. `set_pixel` only
/// updates the staging buffer; nothing is visible on the hardware until
/// `show` latches the buffer out to the strip.
pub trait PixelStripInterface {
    /// Number of pixels on the strip
    fn len(&self) -> usize;

    /// `true` if the strip has no pixels
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stage one pixel's color as an `[r, g, b]` triple
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Pixel(PixelError::InvalidIndex)` if `index`
    /// is past the end of the strip.
    fn set_pixel(&mut self, index: usize, rgb: [u8; 3]) -> Result<()>;

    /// Latch the staging buffer out to the strip
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Pixel(PixelError::FlushFailed)` if the data
    /// line could not be driven.
    fn show(&mut self) -> Result<()>;
}
