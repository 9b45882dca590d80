//! Core infrastructure shared by all modules
//!
//! Currently this is the logging abstraction; everything else in the crate
//! is either platform boundary or device driver.

pub mod logging;
