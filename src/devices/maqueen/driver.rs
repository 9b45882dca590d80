//! Maqueen Plus V2 driver implementation

use super::registers;
use crate::devices::bus::ExpansionBus;
use crate::devices::traits::{
    AnalogLineSensing, Direction, Drive, HeadlightSide, Headlights, LineChannel,
};
use crate::platform::{I2cInterface, Result};

/// Maximum bytes of the board revision string kept by the driver
const VERSION_CAPACITY: usize = 16;

/// Board revision, probed once at init
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardRevision {
    /// Revision 2.0: line sensors wired right-to-left
    V2_0,
    /// Revision 2.1: line sensors wired left-to-right
    V2_1,
    /// Unrecognized revision tag; treated like 2.1
    Unknown,
}

impl BoardRevision {
    /// Classify a probed version string by its trailing 3 characters
    pub fn from_version(version: &str) -> Self {
        match version.get(version.len().wrapping_sub(3)..) {
            Some("2.0") => BoardRevision::V2_0,
            Some("2.1") => BoardRevision::V2_1,
            _ => BoardRevision::Unknown,
        }
    }
}

/// Immutable mapping from logical channel (left-to-right) to the physical
/// analog register it reads from
///
/// Fixed once at init from the probed board revision; the only durable
/// derived state in the HAL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelMap([u8; 5]);

impl ChannelMap {
    /// Revision 2.1 wiring (and the power-on default)
    pub const IDENTITY: ChannelMap = ChannelMap([
        registers::ANALOG_L2,
        registers::ANALOG_L1,
        registers::ANALOG_M,
        registers::ANALOG_R1,
        registers::ANALOG_R2,
    ]);

    /// Revision 2.0 wiring (sensor row mounted mirrored)
    pub const REVERSED: ChannelMap = ChannelMap([
        registers::ANALOG_R2,
        registers::ANALOG_R1,
        registers::ANALOG_M,
        registers::ANALOG_L1,
        registers::ANALOG_L2,
    ]);

    /// Map a board revision to its channel ordering
    pub fn for_revision(revision: BoardRevision) -> Self {
        match revision {
            BoardRevision::V2_0 => ChannelMap::REVERSED,
            BoardRevision::V2_1 | BoardRevision::Unknown => ChannelMap::IDENTITY,
        }
    }

    /// Physical register for a logical channel
    pub fn register(&self, channel: LineChannel) -> u8 {
        self.0[channel.index()]
    }
}

/// Servo output selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Servo {
    S1,
    S2,
    S3,
}

impl Servo {
    fn register(self) -> u8 {
        match self {
            Servo::S1 => registers::SERVO_1,
            Servo::S2 => registers::SERVO_2,
            Servo::S3 => registers::SERVO_3,
        }
    }
}

/// Maqueen Plus V2 driver
///
/// Owns the expansion bus plus the channel map derived from the probed
/// board revision. Construct with `new`, then call `init` once before
/// reading line sensors; motors and lights work without init.
///
/// # Type Parameters
///
/// * `I2C` - Any type implementing `I2cInterface`
#[derive(Debug)]
pub struct MaqueenDriver<I2C>
where
    I2C: I2cInterface,
{
    bus: ExpansionBus<I2C>,
    revision: BoardRevision,
    channel_map: ChannelMap,
    version: heapless::String<VERSION_CAPACITY>,
}

impl<I2C> MaqueenDriver<I2C>
where
    I2C: I2cInterface,
{
    /// Create a new driver (revision not yet probed, identity channel map)
    pub fn new(i2c: I2C) -> Self {
        Self {
            bus: ExpansionBus::new(i2c),
            revision: BoardRevision::Unknown,
            channel_map: ChannelMap::IDENTITY,
            version: heapless::String::new(),
        }
    }

    /// Create and initialize a driver in one step
    pub fn new_initialized(i2c: I2C) -> Result<Self> {
        let mut driver = Self::new(i2c);
        driver.init()?;
        Ok(driver)
    }

    /// Probe the board revision and fix the line-sensor channel map
    ///
    /// An unrecognized revision tag keeps the identity ordering. Safe to
    /// call again; the map is simply recomputed from the fresh probe.
    pub fn init(&mut self) -> Result<()> {
        self.version = self.query_version()?;
        self.revision = BoardRevision::from_version(&self.version);
        self.channel_map = ChannelMap::for_revision(self.revision);
        match self.revision {
            BoardRevision::Unknown => {
                crate::log_warn!(
                    "Maqueen revision tag not recognized ({}); keeping identity channel order",
                    self.version.as_str()
                );
            }
            _ => {
                crate::log_info!("Maqueen board version: {}", self.version.as_str());
            }
        }
        Ok(())
    }

    /// Read the board version string from the expansion board
    ///
    /// One count byte at VERSION_COUNT, then `count` ASCII bytes at
    /// VERSION_DATA. Counts beyond the driver's capacity are truncated;
    /// a payload that is not valid UTF-8 yields an empty string (and thus
    /// an unrecognized revision).
    pub fn query_version(&mut self) -> Result<heapless::String<VERSION_CAPACITY>> {
        let mut count_buf = [0u8; 1];
        self.bus.query(registers::VERSION_COUNT, &mut count_buf)?;
        let count = (count_buf[0] as usize).min(VERSION_CAPACITY);

        let mut data = [0u8; VERSION_CAPACITY];
        self.bus.query(registers::VERSION_DATA, &mut data[..count])?;

        let mut version = heapless::String::new();
        if let Ok(text) = core::str::from_utf8(&data[..count]) {
            // Capacity matches the read bound, so this cannot overflow
            let _ = version.push_str(text);
        }
        Ok(version)
    }

    /// Revision probed by the last `init`
    pub fn revision(&self) -> BoardRevision {
        self.revision
    }

    /// Channel map fixed by the last `init`
    pub fn channel_map(&self) -> ChannelMap {
        self.channel_map
    }

    /// Version string probed by the last `init`
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Set one servo output to `angle` degrees
    pub fn set_servo(&mut self, servo: Servo, angle: u8) -> Result<()> {
        self.bus.send(&[servo.register(), angle])
    }

    /// Borrow the expansion bus (used by tests to inspect mock logs)
    pub fn bus(&self) -> &ExpansionBus<I2C> {
        &self.bus
    }

    fn encode_direction(dir: Direction) -> u8 {
        match dir {
            Direction::Forward => registers::DIR_FORWARD,
            Direction::Backward => registers::DIR_BACKWARD,
        }
    }
}

impl<I2C> Drive for MaqueenDriver<I2C>
where
    I2C: I2cInterface,
{
    /// One 5-byte frame sets both sides; speeds are already in the board's
    /// 0-255 device range.
    fn set_motors(
        &mut self,
        left_speed: u8,
        left_dir: Direction,
        right_speed: u8,
        right_dir: Direction,
    ) -> Result<()> {
        self.bus.send(&[
            registers::MOTOR,
            Self::encode_direction(left_dir),
            left_speed,
            Self::encode_direction(right_dir),
            right_speed,
        ])
    }
}

impl<I2C> AnalogLineSensing for MaqueenDriver<I2C>
where
    I2C: I2cInterface,
{
    /// Select-then-read of one analog register; the two raw bytes combine
    /// little-endian into the reflectance intensity.
    fn read_line_channel(&mut self, channel: LineChannel) -> Result<u16> {
        let mut raw = [0u8; 2];
        self.bus.query(self.channel_map.register(channel), &mut raw)?;
        Ok(u16::from_le_bytes(raw))
    }

    fn read_line_channels(&mut self) -> Result<[u16; 5]> {
        let mut values = [0u16; 5];
        for channel in LineChannel::ALL {
            values[channel.index()] = self.read_line_channel(channel)?;
        }
        Ok(values)
    }
}

impl<I2C> Headlights for MaqueenDriver<I2C>
where
    I2C: I2cInterface,
{
    type Value = bool;

    /// Binary headlights; `Both` is a single combined frame because the
    /// two state registers are adjacent.
    fn set_headlights(&mut self, side: HeadlightSide, on: bool) -> Result<()> {
        let state = on as u8;
        match side {
            HeadlightSide::Left => self.bus.send(&[registers::LED_LEFT, state]),
            HeadlightSide::Right => self.bus.send(&[registers::LED_RIGHT, state]),
            HeadlightSide::Both => self.bus.send(&[registers::LED_LEFT, state, state]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::bus::EXPANSION_BOARD_ADDR;
    use crate::platform::mock::{I2cTransaction, MockI2c};

    fn frames(driver: &MaqueenDriver<MockI2c>) -> Vec<I2cTransaction> {
        driver.bus().i2c().transactions()
    }

    /// Queue a version probe response: count byte, then the string bytes
    fn script_version(i2c: &MockI2c, version: &str) {
        i2c.set_read_data(&[version.len() as u8]);
        i2c.set_read_data(version.as_bytes());
    }

    #[test]
    fn test_set_motors_single_frame() {
        let mut driver = MaqueenDriver::new(MockI2c::default());
        driver
            .set_motors(80, Direction::Forward, 90, Direction::Backward)
            .unwrap();

        assert_eq!(
            frames(&driver),
            vec![I2cTransaction::Write {
                addr: EXPANSION_BOARD_ADDR,
                data: vec![registers::MOTOR, 0, 80, 1, 90],
            }]
        );
    }

    #[test]
    fn test_spin_left_direction_encoding() {
        let mut driver = MaqueenDriver::new(MockI2c::default());
        driver.spin_left(100).unwrap();

        // Left backward (1), right forward (0), equal speeds
        assert_eq!(
            frames(&driver),
            vec![I2cTransaction::Write {
                addr: EXPANSION_BOARD_ADDR,
                data: vec![registers::MOTOR, 1, 100, 0, 100],
            }]
        );
    }

    #[test]
    fn test_spin_right_mirrors() {
        let mut driver = MaqueenDriver::new(MockI2c::default());
        driver.spin_right(100).unwrap();

        assert_eq!(
            frames(&driver),
            vec![I2cTransaction::Write {
                addr: EXPANSION_BOARD_ADDR,
                data: vec![registers::MOTOR, 0, 100, 1, 100],
            }]
        );
    }

    #[test]
    fn test_stop_zeroes_both_speeds() {
        let mut driver = MaqueenDriver::new(MockI2c::default());
        driver.stop().unwrap();

        assert_eq!(
            frames(&driver),
            vec![I2cTransaction::Write {
                addr: EXPANSION_BOARD_ADDR,
                data: vec![registers::MOTOR, 0, 0, 0, 0],
            }]
        );
    }

    #[test]
    fn test_headlights_both_is_one_three_byte_frame() {
        let mut driver = MaqueenDriver::new(MockI2c::default());
        driver.set_headlights(HeadlightSide::Both, true).unwrap();

        assert_eq!(
            frames(&driver),
            vec![I2cTransaction::Write {
                addr: EXPANSION_BOARD_ADDR,
                data: vec![registers::LED_LEFT, 1, 1],
            }]
        );
    }

    #[test]
    fn test_headlights_single_sides() {
        let mut driver = MaqueenDriver::new(MockI2c::default());
        driver.set_headlights(HeadlightSide::Left, true).unwrap();
        driver.set_headlights(HeadlightSide::Right, false).unwrap();

        assert_eq!(
            frames(&driver),
            vec![
                I2cTransaction::Write {
                    addr: EXPANSION_BOARD_ADDR,
                    data: vec![registers::LED_LEFT, 1],
                },
                I2cTransaction::Write {
                    addr: EXPANSION_BOARD_ADDR,
                    data: vec![registers::LED_RIGHT, 0],
                },
            ]
        );
    }

    #[test]
    fn test_servo_frame() {
        let mut driver = MaqueenDriver::new(MockI2c::default());
        driver.set_servo(Servo::S2, 90).unwrap();

        assert_eq!(
            frames(&driver),
            vec![I2cTransaction::Write {
                addr: EXPANSION_BOARD_ADDR,
                data: vec![registers::SERVO_2, 90],
            }]
        );
    }

    #[test]
    fn test_init_v2_1_keeps_identity_map() {
        let i2c = MockI2c::default();
        script_version(&i2c, "MQ2.1");
        let driver = MaqueenDriver::new_initialized(i2c).unwrap();

        assert_eq!(driver.revision(), BoardRevision::V2_1);
        assert_eq!(driver.channel_map(), ChannelMap::IDENTITY);
        assert_eq!(driver.version(), "MQ2.1");
    }

    #[test]
    fn test_init_v2_0_reverses_channel_map() {
        let i2c = MockI2c::default();
        script_version(&i2c, "MQ2.0");
        let driver = MaqueenDriver::new_initialized(i2c).unwrap();

        assert_eq!(driver.revision(), BoardRevision::V2_0);
        assert_eq!(driver.channel_map(), ChannelMap::REVERSED);
    }

    #[test]
    fn test_init_unrecognized_tag_keeps_identity_map() {
        let i2c = MockI2c::default();
        script_version(&i2c, "MQ9.9");
        let driver = MaqueenDriver::new_initialized(i2c).unwrap();

        assert_eq!(driver.revision(), BoardRevision::Unknown);
        assert_eq!(driver.channel_map(), ChannelMap::IDENTITY);
    }

    #[test]
    fn test_version_probe_transactions() {
        let i2c = MockI2c::default();
        script_version(&i2c, "2.1");
        let mut driver = MaqueenDriver::new(i2c);
        driver.init().unwrap();

        assert_eq!(
            frames(&driver),
            vec![
                I2cTransaction::Write {
                    addr: EXPANSION_BOARD_ADDR,
                    data: vec![registers::VERSION_COUNT],
                },
                I2cTransaction::Read {
                    addr: EXPANSION_BOARD_ADDR,
                    len: 1,
                },
                I2cTransaction::Write {
                    addr: EXPANSION_BOARD_ADDR,
                    data: vec![registers::VERSION_DATA],
                },
                I2cTransaction::Read {
                    addr: EXPANSION_BOARD_ADDR,
                    len: 3,
                },
            ]
        );
    }

    #[test]
    fn test_read_line_channel_combines_little_endian() {
        let i2c = MockI2c::default();
        i2c.set_read_data(&[0x40, 0x01]); // low byte first -> 0x0140
        let mut driver = MaqueenDriver::new(i2c);

        let value = driver.read_line_channel(LineChannel::Middle).unwrap();
        assert_eq!(value, 0x0140);
    }

    #[test]
    fn test_read_all_identity_order() {
        let i2c = MockI2c::default();
        // Five channels, two bytes each, distinct values
        for v in 1..=5u8 {
            i2c.set_read_data(&[v, 0]);
        }
        let mut driver = MaqueenDriver::new(i2c);

        let values = driver.read_line_channels().unwrap();
        assert_eq!(values, [1, 2, 3, 4, 5]);

        // Identity map walks the registers leftmost (L2) to rightmost (R2)
        let selectors: Vec<u8> = frames(&driver)
            .into_iter()
            .filter_map(|t| match t {
                I2cTransaction::Write { data, .. } => Some(data[0]),
                _ => None,
            })
            .collect();
        assert_eq!(
            selectors,
            vec![
                registers::ANALOG_L2,
                registers::ANALOG_L1,
                registers::ANALOG_M,
                registers::ANALOG_R1,
                registers::ANALOG_R2,
            ]
        );
    }

    #[test]
    fn test_read_all_reversed_order_still_left_to_right() {
        let i2c = MockI2c::default();
        script_version(&i2c, "2.0");
        let mut driver = MaqueenDriver::new_initialized(i2c).unwrap();
        driver.bus().i2c().clear_transactions();
        for v in 1..=5u8 {
            driver.bus().i2c().set_read_data(&[v, 0]);
        }

        // Result is always 5 values, left to right, whatever the map
        let values = driver.read_line_channels().unwrap();
        assert_eq!(values, [1, 2, 3, 4, 5]);

        let selectors: Vec<u8> = frames(&driver)
            .into_iter()
            .filter_map(|t| match t {
                I2cTransaction::Write { data, .. } => Some(data[0]),
                _ => None,
            })
            .collect();
        assert_eq!(
            selectors,
            vec![
                registers::ANALOG_R2,
                registers::ANALOG_R1,
                registers::ANALOG_M,
                registers::ANALOG_L1,
                registers::ANALOG_L2,
            ]
        );
    }

    #[test]
    fn test_bus_fault_propagates_from_sensing() {
        use crate::platform::error::{I2cError, PlatformError};

        let i2c = MockI2c::default();
        i2c.fail_with(I2cError::BusError);
        let mut driver = MaqueenDriver::new(i2c);

        assert_eq!(
            driver.read_line_channels().unwrap_err(),
            PlatformError::I2c(I2cError::BusError)
        );
    }
}
