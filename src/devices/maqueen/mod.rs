//! DFRobot Maqueen Plus V2 expansion board
//!
//! Five analog line-follow channels, binary headlights, three servo
//! outputs and a four-pixel addressable underglow strip. The board reports
//! a revision string at startup; revision 2.0 boards have their line
//! sensors wired in the opposite physical order, so the driver probes the
//! revision once and fixes a channel map for the life of the process.

pub mod driver;
pub mod registers;
pub mod underglow;

pub use driver::{BoardRevision, ChannelMap, MaqueenDriver, Servo};
pub use underglow::Underglow;
