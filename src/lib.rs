//! edubot-hal - Hardware abstraction layer for micro:bit educational robots
//!
//! This library drives the expansion boards of two differential-drive
//! classroom robots: the DFRobot Maqueen Plus V2 (five analog line sensors,
//! servos, addressable underglow) and the ELECFREAKS Smart Cutebot (two
//! digital line sensors, RGB headlights). Both boards sit behind the same
//! I2C address; the drivers translate high-level commands into fixed-width
//! register frames and GPIO pulse timing, and raw sensor bytes back into
//! physical units.

#![cfg_attr(not(test), no_std)]

// The mock platform is host-only tooling; link std for it even in
// non-test builds so its recording buffers can grow.
#[cfg(all(feature = "mock", not(test)))]
extern crate std;

// Platform abstraction layer: I2C, GPIO, timing and pixel-strip traits plus
// mock implementations for host tests. All platform-specific code stays
// behind these traits.
pub mod platform;

// Device drivers using platform abstraction
pub mod devices;

// Logging abstraction shared by all modules
pub mod core;
