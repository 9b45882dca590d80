//! Distance sensing capability

use crate::platform::Result;

/// Distance sensing capability
pub trait RangeSensor {
    /// Measure the distance to the nearest obstacle, in centimeters
    ///
    /// An out-of-range or absent echo is not an error; it reports the
    /// sensor's maximum distance as a sentinel.
    fn range_cm(&mut self) -> Result<u16>;
}
