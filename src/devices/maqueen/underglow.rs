//! Maqueen Plus V2 underglow strip
//!
//! Four addressable RGB pixels under the chassis, driven through the
//! platform's pixel-strip interface. Pixel writes are staged; the strip
//! only changes when the staging buffer is latched, so every operation
//! here ends with a flush.

use crate::devices::traits::Rgb;
use crate::platform::{PixelStripInterface, Result};

/// Number of underglow pixels on the chassis
pub const UNDERGLOW_PIXELS: usize = 4;

/// Underglow strip controller
#[derive(Debug)]
pub struct Underglow<S>
where
    S: PixelStripInterface,
{
    strip: S,
}

impl<S> Underglow<S>
where
    S: PixelStripInterface,
{
    /// Take ownership of the strip
    pub fn new(strip: S) -> Self {
        Self { strip }
    }

    /// Set every pixel to `color` and latch the strip in one update
    pub fn set_all(&mut self, color: Rgb) -> Result<()> {
        for index in 0..self.strip.len() {
            self.strip.set_pixel(index, color.to_triple())?;
        }
        self.strip.show()
    }

    /// Set a single pixel to `color` and latch the strip
    pub fn set_one(&mut self, index: usize, color: Rgb) -> Result<()> {
        self.strip.set_pixel(index, color.to_triple())?;
        self.strip.show()
    }

    /// Turn the whole strip off
    pub fn off(&mut self) -> Result<()> {
        self.set_all(Rgb::OFF)
    }

    /// Borrow the underlying strip (used by tests to inspect mock state)
    pub fn strip(&self) -> &S {
        &self.strip
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::error::{PixelError, PlatformError};
    use crate::platform::mock::MockPixelStrip;

    #[test]
    fn test_set_all_updates_every_pixel_one_flush() {
        let mut glow = Underglow::new(MockPixelStrip::new(UNDERGLOW_PIXELS));
        glow.set_all(Rgb::GREEN).unwrap();

        assert_eq!(glow.strip().show_count(), 1);
        for pixel in glow.strip().committed() {
            assert_eq!(*pixel, [0x00, 0xFF, 0x00]);
        }
    }

    #[test]
    fn test_set_one_flushes() {
        let mut glow = Underglow::new(MockPixelStrip::new(UNDERGLOW_PIXELS));
        glow.set_one(2, Rgb::BLUE).unwrap();

        assert_eq!(glow.strip().show_count(), 1);
        assert_eq!(glow.strip().committed()[2], [0x00, 0x00, 0xFF]);
        assert_eq!(glow.strip().committed()[0], [0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_off_is_all_black() {
        let mut glow = Underglow::new(MockPixelStrip::new(UNDERGLOW_PIXELS));
        glow.set_all(Rgb::RED).unwrap();
        glow.off().unwrap();

        for pixel in glow.strip().committed() {
            assert_eq!(*pixel, [0, 0, 0]);
        }
    }

    #[test]
    fn test_out_of_range_pixel_is_fatal() {
        let mut glow = Underglow::new(MockPixelStrip::new(UNDERGLOW_PIXELS));
        let err = glow.set_one(UNDERGLOW_PIXELS, Rgb::RED).unwrap_err();
        assert_eq!(err, PlatformError::Pixel(PixelError::InvalidIndex));
        // Nothing latched on the failed write
        assert_eq!(glow.strip().show_count(), 0);
    }
}
