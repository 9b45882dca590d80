//! Differential drive capability
//!
//! Open-loop motor control: every operation issues bus frames immediately,
//! with no queuing, ramping or feedback.

use crate::platform::Result;

/// Motor rotation direction
///
/// The bit encoding on the wire differs per board (the Maqueen uses 0/1,
/// the Cutebot 2/1), so encoding lives with each board's register map, not
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Forward,
    Backward,
}

/// Differential drive capability
///
/// All convenience operations are expressed through `set_motors`. Speeds
/// are the 0-255 application domain; boards rescale internally where their
/// device range differs.
pub trait Drive {
    /// Set both motor speeds (0-255) and directions, left then right
    fn set_motors(
        &mut self,
        left_speed: u8,
        left_dir: Direction,
        right_speed: u8,
        right_dir: Direction,
    ) -> Result<()>;

    /// Stop both motors
    fn stop(&mut self) -> Result<()> {
        self.drive_forward(0)
    }

    /// Drive forward at `speed` (0-255)
    fn drive_forward(&mut self, speed: u8) -> Result<()> {
        self.set_motors(speed, Direction::Forward, speed, Direction::Forward)
    }

    /// Drive backward at `speed` (0-255)
    fn drive_backward(&mut self, speed: u8) -> Result<()> {
        self.set_motors(speed, Direction::Backward, speed, Direction::Backward)
    }

    /// Spin in place to the left at `speed` (0-255)
    fn spin_left(&mut self, speed: u8) -> Result<()> {
        self.set_motors(speed, Direction::Backward, speed, Direction::Forward)
    }

    /// Spin in place to the right at `speed` (0-255)
    fn spin_right(&mut self, speed: u8) -> Result<()> {
        self.set_motors(speed, Direction::Forward, speed, Direction::Backward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records set_motors calls so the provided methods can be verified
    /// independently of any board's frame layout.
    #[derive(Default)]
    struct RecordingDrive {
        calls: Vec<(u8, Direction, u8, Direction)>,
    }

    impl Drive for RecordingDrive {
        fn set_motors(
            &mut self,
            left_speed: u8,
            left_dir: Direction,
            right_speed: u8,
            right_dir: Direction,
        ) -> Result<()> {
            self.calls.push((left_speed, left_dir, right_speed, right_dir));
            Ok(())
        }
    }

    #[test]
    fn test_spin_left_sets_opposite_directions() {
        let mut drive = RecordingDrive::default();
        drive.spin_left(100).unwrap();
        assert_eq!(
            drive.calls,
            vec![(100, Direction::Backward, 100, Direction::Forward)]
        );
    }

    #[test]
    fn test_spin_right_mirrors_spin_left() {
        let mut drive = RecordingDrive::default();
        drive.spin_right(100).unwrap();
        assert_eq!(
            drive.calls,
            vec![(100, Direction::Forward, 100, Direction::Backward)]
        );
    }

    #[test]
    fn test_straight_drive_sets_equal_sides() {
        let mut drive = RecordingDrive::default();
        drive.drive_forward(200).unwrap();
        drive.drive_backward(50).unwrap();
        assert_eq!(
            drive.calls,
            vec![
                (200, Direction::Forward, 200, Direction::Forward),
                (50, Direction::Backward, 50, Direction::Backward),
            ]
        );
    }

    #[test]
    fn test_stop_is_zero_speed_forward() {
        let mut drive = RecordingDrive::default();
        drive.stop().unwrap();
        assert_eq!(
            drive.calls,
            vec![(0, Direction::Forward, 0, Direction::Forward)]
        );
    }
}
