//! Headlight capability

use crate::platform::Result;

/// Which headlight(s) an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeadlightSide {
    Left,
    Right,
    Both,
}

/// Headlight capability
///
/// The value a headlight takes differs per board: the Maqueen's LEDs are
/// binary on/off (`Value = bool`), the Cutebot's are full RGB
/// (`Value = Rgb`). Selecting `Both` is a board-level detail too: the
/// Maqueen has a combined two-byte register write, the Cutebot issues two
/// independent frames.
pub trait Headlights {
    /// Board-specific headlight value type
    type Value: Copy;

    /// Set the selected headlight(s)
    fn set_headlights(&mut self, side: HeadlightSide, value: Self::Value) -> Result<()>;
}
