//! Expansion board bus protocol
//!
//! Both robot expansion boards are a single co-processor behind one shared
//! I2C address. Every peripheral is sub-addressed through the first payload
//! byte of a fixed-width command frame; no peripheral has its own bus
//! identity. This module owns that framing idiom so the drivers never touch
//! raw addresses.

use crate::platform::{I2cInterface, Result};

/// Shared I2C address of the expansion board co-processor
pub const EXPANSION_BOARD_ADDR: u8 = 0x10;

/// Command framing over the expansion board address
///
/// `send` writes one complete frame in a single bus transaction. `query`
/// models the boards' register-read idiom: a one-byte selector write
/// followed by a separate read, never a combined repeated-START
/// transaction.
///
/// Any bus fault propagates unchanged; the board is a physically wired
/// co-processor, so there is no retry policy.
#[derive(Debug)]
pub struct ExpansionBus<I2C>
where
    I2C: I2cInterface,
{
    i2c: I2C,
}

impl<I2C> ExpansionBus<I2C>
where
    I2C: I2cInterface,
{
    /// Take ownership of the bus
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Write one complete command frame, first byte selecting the register
    pub fn send(&mut self, frame: &[u8]) -> Result<()> {
        self.i2c.write(EXPANSION_BOARD_ADDR, frame)
    }

    /// Select a register, then read `buf.len()` bytes from it
    pub fn query(&mut self, selector: u8, buf: &mut [u8]) -> Result<()> {
        self.i2c.write(EXPANSION_BOARD_ADDR, &[selector])?;
        self.i2c.read(EXPANSION_BOARD_ADDR, buf)
    }

    /// Borrow the underlying bus (used by tests to inspect mock logs)
    pub fn i2c(&self) -> &I2C {
        &self.i2c
    }

    /// Release the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}
