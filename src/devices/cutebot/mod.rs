//! ELECFREAKS Smart Cutebot expansion board
//!
//! Two digital line-follow sensors on GPIO pins, RGB headlights, and motors
//! whose device speed range is 0-100 rather than the application's 0-255.
//! Every command is a fixed 4-byte frame; the two motors are addressed by
//! separate frames rather than one combined write.

pub mod driver;
pub mod registers;

pub use driver::CutebotDriver;
