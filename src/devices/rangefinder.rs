//! HC-SR04 style ultrasonic rangefinder
//!
//! Both robots carry the same trigger/echo sensor, just wired to different
//! pins, so a single driver serves both: raise the trigger for at least
//! 10 µs to fire a ping, then time how long the echo pin stays high. The
//! echo duration converts to centimeters through the speed of sound,
//! halved for the round trip.

use crate::devices::traits::RangeSensor;
use crate::platform::{GpioInterface, Result, TimerInterface};

/// Shortest distance the sensor can resolve, in centimeters.
///
/// Declared by the sensor datasheet but deliberately not applied as a
/// lower clamp on results; see `range_cm` and the asymmetry test below.
pub const MIN_DISTANCE_CM: u16 = 2;

/// Reported for an absent or out-of-range echo, in centimeters
pub const MAX_DISTANCE_CM: u16 = 450;

/// Echo durations at or past this are "no echo", in microseconds
pub const MAX_ECHO_DURATION_US: u32 = 38_000;

/// Speed of sound in centimeters per microsecond (343.4 m/s)
pub const SPEED_OF_SOUND_CM_PER_US: f32 = 0.034_34;

/// Trigger settle time before the ping pulse, in microseconds
const TRIGGER_SETTLE_US: u32 = 2;

/// Hardware-mandated minimum trigger pulse width, in microseconds
const TRIGGER_PULSE_US: u32 = 10;

/// Ultrasonic rangefinder driver
///
/// # Type Parameters
///
/// * `TRIG` - Trigger output pin implementing `GpioInterface`
/// * `ECHO` - Echo input pin implementing `GpioInterface`
/// * `T` - Delay source implementing `TimerInterface`
#[derive(Debug)]
pub struct UltrasonicRangefinder<TRIG, ECHO, T>
where
    TRIG: GpioInterface,
    ECHO: GpioInterface,
    T: TimerInterface,
{
    trigger: TRIG,
    echo: ECHO,
    timer: T,
}

impl<TRIG, ECHO, T> UltrasonicRangefinder<TRIG, ECHO, T>
where
    TRIG: GpioInterface,
    ECHO: GpioInterface,
    T: TimerInterface,
{
    /// Take ownership of the trigger pin, echo pin and timer
    pub fn new(trigger: TRIG, echo: ECHO, timer: T) -> Self {
        Self {
            trigger,
            echo,
            timer,
        }
    }

    /// Convert an echo duration to centimeters, truncating
    ///
    /// Round-trip time, so the one-way distance is half.
    fn duration_to_cm(duration_us: u32) -> u16 {
        (duration_us as f32 * SPEED_OF_SOUND_CM_PER_US / 2.0) as u16
    }

    /// Borrow the trigger pin (used by tests to inspect mock state)
    pub fn trigger(&self) -> &TRIG {
        &self.trigger
    }

    /// Borrow the timer (used by tests to inspect simulated time)
    pub fn timer(&self) -> &T {
        &self.timer
    }
}

impl<TRIG, ECHO, T> RangeSensor for UltrasonicRangefinder<TRIG, ECHO, T>
where
    TRIG: GpioInterface,
    ECHO: GpioInterface,
    T: TimerInterface,
{
    /// Fire one ping and report the distance in centimeters
    ///
    /// An echo at or beyond `MAX_ECHO_DURATION_US` (including the
    /// measurement timing out) reports `MAX_DISTANCE_CM`; that is a normal
    /// open-air outcome, not an error. Results below `MIN_DISTANCE_CM` are
    /// passed through unclamped, matching the board firmware this replaces.
    fn range_cm(&mut self) -> Result<u16> {
        // Settle, then hold the trigger high for the mandated pulse width
        self.trigger.set_low()?;
        self.timer.delay_us(TRIGGER_SETTLE_US)?;
        self.trigger.set_high()?;
        self.timer.delay_us(TRIGGER_PULSE_US)?;
        self.trigger.set_low()?;

        let duration_us = self
            .echo
            .measure_pulse_us(true, MAX_ECHO_DURATION_US)?;
        if duration_us >= MAX_ECHO_DURATION_US {
            crate::log_debug!("rangefinder: no echo within {} us", MAX_ECHO_DURATION_US);
            return Ok(MAX_DISTANCE_CM);
        }
        Ok(Self::duration_to_cm(duration_us))
    }
}
