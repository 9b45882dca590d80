//! 24-bit RGB color value
//!
//! Colors cross the device boundary as three independent byte channels;
//! this type owns the lossless, order-preserving decomposition.

/// A 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const RED: Rgb = Rgb::from_packed(0xFF0000);
    pub const ORANGE: Rgb = Rgb::from_packed(0xFFA500);
    pub const YELLOW: Rgb = Rgb::from_packed(0xFFFF00);
    pub const GREEN: Rgb = Rgb::from_packed(0x00FF00);
    pub const BLUE: Rgb = Rgb::from_packed(0x0000FF);
    pub const INDIGO: Rgb = Rgb::from_packed(0x4B0082);
    pub const VIOLET: Rgb = Rgb::from_packed(0x8A2BE2);
    pub const PURPLE: Rgb = Rgb::from_packed(0xFF00FF);
    // Warm white tuned for the boards' LEDs rather than 0xFFFFFF
    pub const WHITE: Rgb = Rgb::from_packed(0xFF9070);
    pub const OFF: Rgb = Rgb::from_packed(0x000000);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decompose a packed 0xRRGGBB value
    ///
    /// Bits above the low 24 are masked off; this is the named saturating
    /// conversion for colors, never an error.
    pub const fn from_packed(color: u32) -> Self {
        Self {
            r: ((color >> 16) & 0xFF) as u8,
            g: ((color >> 8) & 0xFF) as u8,
            b: (color & 0xFF) as u8,
        }
    }

    /// Recompose into a packed 0xRRGGBB value
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// The `[r, g, b]` triple sent to pixel strips
    pub const fn to_triple(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<u32> for Rgb {
    fn from(color: u32) -> Self {
        Self::from_packed(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_channel_order() {
        let c = Rgb::from_packed(0x123456);
        assert_eq!(c.r, 0x12);
        assert_eq!(c.g, 0x34);
        assert_eq!(c.b, 0x56);
    }

    #[test]
    fn test_round_trip_is_lossless() {
        for &packed in &[0x000000, 0xFF0000, 0x00FF00, 0x0000FF, 0xFF9070, 0xFFFFFF] {
            assert_eq!(Rgb::from_packed(packed).to_packed(), packed);
        }
    }

    #[test]
    fn test_high_bits_masked() {
        assert_eq!(Rgb::from_packed(0xAB123456), Rgb::from_packed(0x123456));
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(Rgb::RED.to_packed(), 0xFF0000);
        assert_eq!(Rgb::OFF.to_packed(), 0x000000);
        assert_eq!(Rgb::WHITE.to_triple(), [0xFF, 0x90, 0x70]);
    }
}
