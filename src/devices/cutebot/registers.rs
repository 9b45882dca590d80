//! Smart Cutebot register map
//!
//! Every command frame is 4 bytes: `[selector, b1, b2, b3]`, padded with
//! zero where a peripheral uses fewer payload bytes.

/// Motor selectors; one frame per side: `[selector, dir, speed_pct, 0]`
pub const MOTOR_LEFT: u8 = 0x01;
pub const MOTOR_RIGHT: u8 = 0x02;

/// Direction byte encoding for the motor frames
pub const DIR_FORWARD: u8 = 0x02;
pub const DIR_BACKWARD: u8 = 0x01;

/// RGB headlight selectors; `[selector, r, g, b]`
pub const LED_LEFT: u8 = 0x04;
pub const LED_RIGHT: u8 = 0x08;
