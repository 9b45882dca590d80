//! GPIO interface trait
//!
//! This module defines the digital pin interface that platform
//! implementations must provide.

use crate::platform::Result;

/// GPIO interface trait
///
/// Platform implementations must provide this interface for digital pin
/// control. A single trait covers output drive, input sampling and blocking
/// pulse-width measurement; a given pin is used in only one of those roles
/// at a time.
///
/// # Safety Invariants
///
/// - GPIO pin must be initialized before use
/// - Only one owner per GPIO pin instance
/// - No concurrent access to the same GPIO pin from multiple contexts
pub trait GpioInterface {
    /// Set GPIO pin high (logic level 1)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidMode)` if the pin is
    /// not configured as an output.
    fn set_high(&mut self) -> Result<()>;

    /// Set GPIO pin low (logic level 0)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidMode)` if the pin is
    /// not configured as an output.
    fn set_low(&mut self) -> Result<()>;

    /// Read GPIO pin state
    ///
    /// Returns `true` if the pin is high, `false` if low.
    fn read(&self) -> bool;

    /// Measure the width of the next pulse on this pin, in microseconds
    ///
    /// Blocks until the pin has been in the `active_high` state and
    /// returned from it, then reports how long the active state lasted.
    /// If no complete pulse is observed within `timeout_us`, the timeout
    /// value itself is returned; callers treat that sentinel as "no pulse",
    /// not as an error.
    ///
    /// # Arguments
    ///
    /// * `active_high` - `true` to time a high pulse, `false` for a low pulse
    /// * `timeout_us` - Maximum time to wait, in microseconds
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio` only for pin-level faults (e.g. the
    /// pin is not configured as an input). A timeout is not an error.
    fn measure_pulse_us(&mut self, active_high: bool, timeout_us: u32) -> Result<u32>;
}
