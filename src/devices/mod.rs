//! Device drivers for the robot expansion boards
//!
//! Two structurally distinct drivers implement a shared capability surface
//! (`traits`): the five-sensor Maqueen Plus V2 board and the two-sensor
//! Smart Cutebot board. The ultrasonic rangefinder is a third driver shared
//! by both robots, differing only in which pins it is wired to.

pub mod bus;
pub mod convert;
pub mod cutebot;
pub mod maqueen;
pub mod rangefinder;
pub mod traits;
