//! Mock I2C implementation for testing

use crate::platform::{
    error::{I2cError, PlatformError},
    traits::{I2cConfig, I2cInterface},
    Result,
};
use core::cell::RefCell;
use std::vec::Vec;

/// I2C transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cTransaction {
    /// Write transaction
    Write { addr: u8, data: Vec<u8> },
    /// Read transaction
    Read { addr: u8, len: usize },
}

/// Mock I2C implementation
///
/// Records all transactions for test verification, allows pre-programming
/// expected read data, and can be told to fail the next transaction to
/// exercise fault propagation.
#[derive(Debug)]
pub struct MockI2c {
    config: I2cConfig,
    transactions: RefCell<Vec<I2cTransaction>>,
    read_data: RefCell<Vec<u8>>,
    fail_with: RefCell<Option<I2cError>>,
}

impl MockI2c {
    /// Create a new mock I2C
    pub fn new(config: I2cConfig) -> Self {
        Self {
            config,
            transactions: RefCell::new(Vec::new()),
            read_data: RefCell::new(Vec::new()),
            fail_with: RefCell::new(None),
        }
    }

    /// Get transaction log (for test verification)
    pub fn transactions(&self) -> Vec<I2cTransaction> {
        self.transactions.borrow().clone()
    }

    /// Clear transaction log
    pub fn clear_transactions(&self) {
        self.transactions.borrow_mut().clear();
    }

    /// Append data to return for read operations
    pub fn set_read_data(&self, data: &[u8]) {
        self.read_data.borrow_mut().extend_from_slice(data);
    }

    /// Fail every transaction from now on with the given bus fault
    pub fn fail_with(&self, error: I2cError) {
        *self.fail_with.borrow_mut() = Some(error);
    }

    /// Get current frequency
    pub fn frequency(&self) -> u32 {
        self.config.frequency
    }

    fn check_fault(&self) -> Result<()> {
        match *self.fail_with.borrow() {
            Some(e) => Err(PlatformError::I2c(e)),
            None => Ok(()),
        }
    }
}

impl Default for MockI2c {
    fn default() -> Self {
        Self::new(I2cConfig::default())
    }
}

impl I2cInterface for MockI2c {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        self.check_fault()?;
        self.transactions.borrow_mut().push(I2cTransaction::Write {
            addr,
            data: data.to_vec(),
        });
        Ok(())
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()> {
        self.check_fault()?;
        self.transactions.borrow_mut().push(I2cTransaction::Read {
            addr,
            len: buffer.len(),
        });

        let mut read_data = self.read_data.borrow_mut();
        let to_read = core::cmp::min(buffer.len(), read_data.len());
        buffer[..to_read].copy_from_slice(&read_data[..to_read]);
        read_data.drain(..to_read);

        Ok(())
    }
}
