//! Mock GPIO implementation for testing

use crate::platform::{traits::GpioInterface, Result};
use core::cell::RefCell;
use std::vec::Vec;

/// Mock GPIO implementation
///
/// Tracks the pin level, records every output transition in order, and lets
/// tests script the result of pulse-width measurements. If no pulse result
/// is scripted, `measure_pulse_us` reports the timeout sentinel, matching a
/// pin that never sees an edge.
#[derive(Debug, Default)]
pub struct MockGpio {
    state: RefCell<bool>,
    transitions: RefCell<Vec<bool>>,
    pulse_results: RefCell<Vec<u32>>,
}

impl MockGpio {
    /// Create a new mock GPIO, initially low
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input state (for simulating input pin reads)
    pub fn set_input_state(&self, high: bool) {
        *self.state.borrow_mut() = high;
    }

    /// Queue a pulse width (µs) to be returned by `measure_pulse_us`
    pub fn push_pulse_us(&self, us: u32) {
        self.pulse_results.borrow_mut().push(us);
    }

    /// Output transitions recorded so far, oldest first
    pub fn transitions(&self) -> Vec<bool> {
        self.transitions.borrow().clone()
    }
}

impl GpioInterface for MockGpio {
    fn set_high(&mut self) -> Result<()> {
        *self.state.borrow_mut() = true;
        self.transitions.borrow_mut().push(true);
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        *self.state.borrow_mut() = false;
        self.transitions.borrow_mut().push(false);
        Ok(())
    }

    fn read(&self) -> bool {
        *self.state.borrow()
    }

    fn measure_pulse_us(&mut self, _active_high: bool, timeout_us: u32) -> Result<u32> {
        let mut results = self.pulse_results.borrow_mut();
        if results.is_empty() {
            // No scripted pulse: behave like a pin with no edges
            Ok(timeout_us)
        } else {
            Ok(results.remove(0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_gpio_output_transitions() {
        let mut gpio = MockGpio::new();
        assert!(!gpio.read());

        gpio.set_high().unwrap();
        assert!(gpio.read());
        gpio.set_low().unwrap();
        assert!(!gpio.read());

        assert_eq!(gpio.transitions(), vec![true, false]);
    }

    #[test]
    fn test_mock_gpio_input() {
        let gpio = MockGpio::new();
        assert!(!gpio.read());

        // Simulate external signal
        gpio.set_input_state(true);
        assert!(gpio.read());
    }

    #[test]
    fn test_mock_gpio_scripted_pulse() {
        let mut gpio = MockGpio::new();
        gpio.push_pulse_us(1500);

        assert_eq!(gpio.measure_pulse_us(true, 38_000).unwrap(), 1500);
        // Queue exhausted: falls back to the timeout sentinel
        assert_eq!(gpio.measure_pulse_us(true, 38_000).unwrap(), 38_000);
    }
}
