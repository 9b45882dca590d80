//! Line/IR sensing capabilities
//!
//! Two polymorphic variants exist: five continuous analog channels on the
//! Maqueen, two binary on/off-line channels on the Cutebot. A board
//! implements exactly one of these traits.

use crate::platform::Result;

/// Left or right sensor selector for the two-channel boards
///
/// Selecting an undefined side was a fatal caller error in the original
/// firmware; here the enum makes it unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    Left,
    Right,
}

/// Logical line-sensor position, far left to far right
///
/// Logical positions are resolved to physical register addresses through a
/// board-revision-dependent channel map, so a caller always sees
/// left-to-right ordering regardless of how the board is wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineChannel {
    FarLeft,
    Left,
    Middle,
    Right,
    FarRight,
}

impl LineChannel {
    /// All channels, left to right
    pub const ALL: [LineChannel; 5] = [
        LineChannel::FarLeft,
        LineChannel::Left,
        LineChannel::Middle,
        LineChannel::Right,
        LineChannel::FarRight,
    ];

    /// Logical index, 0 = far left
    pub const fn index(self) -> usize {
        match self {
            LineChannel::FarLeft => 0,
            LineChannel::Left => 1,
            LineChannel::Middle => 2,
            LineChannel::Right => 3,
            LineChannel::FarRight => 4,
        }
    }
}

/// Continuous line sensing (five analog channels)
pub trait AnalogLineSensing {
    /// Read one channel's reflectance intensity
    ///
    /// On a line reads around 240, on white paper around 70.
    fn read_line_channel(&mut self, channel: LineChannel) -> Result<u16>;

    /// Read all five channels, ordered left to right
    fn read_line_channels(&mut self) -> Result<[u16; 5]>;
}

/// Binary line sensing (two digital channels)
pub trait BinaryLineSensing {
    /// `true` if the selected sensor sees the line
    ///
    /// The sensors are active-low: digital low means "on line".
    fn is_on_line(&self, side: Side) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_ordered_left_to_right() {
        for (i, ch) in LineChannel::ALL.iter().enumerate() {
            assert_eq!(ch.index(), i);
        }
    }
}
