//! Numeric domain conversions
//!
//! Application values are 8-bit (speeds 0-255, color channels 0-255); the
//! boards sometimes want a different range. Out-of-range input is saturated,
//! never rejected, and every saturating conversion is a named operation so
//! the policy is visible at the call site.

/// Rescale an application speed (0-255) to the Cutebot's 0-100 device range
///
/// Truncating integer rescale followed by a clamp to 100, mirroring the
/// board firmware's expectations. 255 maps to 100, 0 maps to 0.
pub fn scale_to_percent(speed: u8) -> u8 {
    (((speed as u32) * 100) / 255).min(100) as u8
}
