//! Timer interface trait
//!
//! This module defines the blocking delay and timestamp interface that
//! platform implementations must provide.

use crate::platform::Result;

/// Timer interface trait
///
/// Platform implementations must provide microsecond-resolution blocking
/// delays and a monotonic microsecond timestamp.
pub trait TimerInterface {
    /// Block for `us` microseconds
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer` if the delay cannot be scheduled.
    fn delay_us(&mut self, us: u32) -> Result<()>;

    /// Block for `ms` milliseconds
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer` if the delay cannot be scheduled.
    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.delay_us(ms.saturating_mul(1000))
    }

    /// Monotonic timestamp in microseconds since boot
    fn now_us(&self) -> u64;

    /// Monotonic timestamp in milliseconds since boot
    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }
}
