//! Mock platform implementations for testing
//!
//! These mocks record every interaction for test verification and let tests
//! script sensor responses (I2C read bytes, pin levels, echo pulse widths).

pub mod gpio;
pub mod i2c;
pub mod pixel;
pub mod timer;

pub use gpio::MockGpio;
pub use i2c::{I2cTransaction, MockI2c};
pub use pixel::MockPixelStrip;
pub use timer::MockTimer;
