//! Smart Cutebot driver implementation

use super::registers;
use crate::devices::bus::ExpansionBus;
use crate::devices::convert::scale_to_percent;
use crate::devices::traits::{
    BinaryLineSensing, Direction, Drive, HeadlightSide, Headlights, Rgb, Side,
};
use crate::platform::{GpioInterface, I2cInterface, Result};

/// Smart Cutebot driver
///
/// Owns the expansion bus and the two IR line-sensor input pins. There is
/// no init sequence: the board has no revision probe and no derived state.
///
/// # Type Parameters
///
/// * `I2C` - Any type implementing `I2cInterface`
/// * `L`, `R` - Left/right IR sensor pins implementing `GpioInterface`
#[derive(Debug)]
pub struct CutebotDriver<I2C, L, R>
where
    I2C: I2cInterface,
    L: GpioInterface,
    R: GpioInterface,
{
    bus: ExpansionBus<I2C>,
    left_ir: L,
    right_ir: R,
}

impl<I2C, L, R> CutebotDriver<I2C, L, R>
where
    I2C: I2cInterface,
    L: GpioInterface,
    R: GpioInterface,
{
    /// Take ownership of the bus and the IR sensor pins
    pub fn new(i2c: I2C, left_ir: L, right_ir: R) -> Self {
        Self {
            bus: ExpansionBus::new(i2c),
            left_ir,
            right_ir,
        }
    }

    /// Borrow the expansion bus (used by tests to inspect mock logs)
    pub fn bus(&self) -> &ExpansionBus<I2C> {
        &self.bus
    }

    /// Borrow the left IR pin
    pub fn left_ir(&self) -> &L {
        &self.left_ir
    }

    /// Borrow the right IR pin
    pub fn right_ir(&self) -> &R {
        &self.right_ir
    }

    fn encode_direction(dir: Direction) -> u8 {
        match dir {
            Direction::Forward => registers::DIR_FORWARD,
            Direction::Backward => registers::DIR_BACKWARD,
        }
    }

    /// One motor's 4-byte frame, speed rescaled to the board's 0-100 range
    fn motor_frame(selector: u8, speed: u8, dir: Direction) -> [u8; 4] {
        [selector, Self::encode_direction(dir), scale_to_percent(speed), 0]
    }
}

impl<I2C, L, R> Drive for CutebotDriver<I2C, L, R>
where
    I2C: I2cInterface,
    L: GpioInterface,
    R: GpioInterface,
{
    /// Two frames, left side then right; the board has no combined write.
    fn set_motors(
        &mut self,
        left_speed: u8,
        left_dir: Direction,
        right_speed: u8,
        right_dir: Direction,
    ) -> Result<()> {
        self.bus
            .send(&Self::motor_frame(registers::MOTOR_LEFT, left_speed, left_dir))?;
        self.bus
            .send(&Self::motor_frame(registers::MOTOR_RIGHT, right_speed, right_dir))
    }
}

impl<I2C, L, R> BinaryLineSensing for CutebotDriver<I2C, L, R>
where
    I2C: I2cInterface,
    L: GpioInterface,
    R: GpioInterface,
{
    /// Active-low sensors: digital low means the sensor sees the line.
    fn is_on_line(&self, side: Side) -> bool {
        match side {
            Side::Left => !self.left_ir.read(),
            Side::Right => !self.right_ir.read(),
        }
    }
}

impl<I2C, L, R> Headlights for CutebotDriver<I2C, L, R>
where
    I2C: I2cInterface,
    L: GpioInterface,
    R: GpioInterface,
{
    type Value = Rgb;

    /// RGB headlights; `Both` issues two independent frames, left first.
    fn set_headlights(&mut self, side: HeadlightSide, color: Rgb) -> Result<()> {
        if side != HeadlightSide::Right {
            self.bus
                .send(&[registers::LED_LEFT, color.r, color.g, color.b])?;
        }
        if side != HeadlightSide::Left {
            self.bus
                .send(&[registers::LED_RIGHT, color.r, color.g, color.b])?;
        }
        Ok(())
    }
}
