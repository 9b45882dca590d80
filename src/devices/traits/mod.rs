//! Device capability traits and shared value types
//!
//! The two robot boards are structurally different (frame layouts, direction
//! encodings, sensor hardware) but expose the same capabilities. These
//! traits are that shared surface; a caller composed against them cannot
//! tell the boards apart except through the associated types.

pub mod color;
pub mod drive;
pub mod light;
pub mod line;
pub mod range;

pub use color::Rgb;
pub use drive::{Direction, Drive};
pub use light::{HeadlightSide, Headlights};
pub use line::{AnalogLineSensing, BinaryLineSensing, LineChannel, Side};
pub use range::RangeSensor;
