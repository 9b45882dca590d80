//! Maqueen Plus V2 register map
//!
//! All peripherals are sub-addressed through the first byte of each command
//! frame written to the shared expansion board address.

/// Motor control register; one 5-byte frame drives both sides:
/// `[MOTOR, left_dir, left_speed, right_dir, right_speed]`
pub const MOTOR: u8 = 0x00;

/// Direction bit encoding for the motor frame
pub const DIR_FORWARD: u8 = 0x00;
pub const DIR_BACKWARD: u8 = 0x01;

/// Headlight state registers (one byte each, 0 = off, 1 = on);
/// writing two bytes at LED_LEFT sets both in one frame
pub const LED_LEFT: u8 = 0x0B;
pub const LED_RIGHT: u8 = 0x0C;

/// Servo angle registers (one byte each)
pub const SERVO_1: u8 = 0x14;
pub const SERVO_2: u8 = 0x15;
pub const SERVO_3: u8 = 0x16;

/// Digital line-state bitmask register (one byte, one bit per sensor)
pub const LINE_STATE: u8 = 0x1D;

/// Analog line sensor registers, two bytes each, little-endian.
/// Physical naming is the board's own: L2 is the leftmost sensor on a
/// revision 2.1 board.
pub const ANALOG_R2: u8 = 0x1E;
pub const ANALOG_R1: u8 = 0x20;
pub const ANALOG_M: u8 = 0x22;
pub const ANALOG_L1: u8 = 0x24;
pub const ANALOG_L2: u8 = 0x26;

/// Board revision string: one count byte, then `count` ASCII bytes
pub const VERSION_COUNT: u8 = 0x32;
pub const VERSION_DATA: u8 = 0x33;

/// Wheel separation in meters (chassis geometry, for caller-side odometry)
pub const AXLE_WIDTH_M: f32 = 0.095;
