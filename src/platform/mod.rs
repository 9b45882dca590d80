//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the microcontroller hosting
//! the robot. All platform-specific code must be isolated behind the traits
//! defined here; device drivers never touch a concrete HAL directly.

pub mod error;
pub mod traits;

// Mock implementations for host-side tests
#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{GpioInterface, I2cConfig, I2cInterface, PixelStripInterface, TimerInterface};
