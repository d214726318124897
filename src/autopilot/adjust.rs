// src/autopilot/adjust.rs

//! # Target Adjustment
//!
//! Discrete nudges applied to the active targets, and the display forms of
//! those targets.

use crate::FULL_TURN;
use core::fmt;

/// Coarse and fine increments for one kind of target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Increment without the modifier held.
    pub coarse: f64,
    /// Increment with the modifier held, one tenth of `coarse`.
    pub fine: f64,
}

impl Step {
    /// The increment to use for the modifier state.
    pub fn size(self, fine: bool) -> f64 {
        if fine {
            self.fine
        } else {
            self.coarse
        }
    }
}

/// Heading increments, in degrees.
pub const HEADING_STEP: Step = Step {
    coarse: 0.4,
    fine: 0.04,
};

/// Altitude increments.
pub const ALTITUDE_STEP: Step = Step {
    coarse: 4.0,
    fine: 0.4,
};

/// Vertical speed increments.
pub const VERTICAL_SPEED_STEP: Step = Step {
    coarse: 0.4,
    fine: 0.04,
};

/// Direction of a nudge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Decrease the target.
    Down,
    /// Increase the target.
    Up,
}

/// Directional gestures seen during one tick.
///
/// Each gesture counts once per tick. When both directions of an axis are
/// pressed together, the decrement wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NudgeInput {
    /// Turn the heading target left.
    pub heading_down: bool,
    /// Turn the heading target right.
    pub heading_up: bool,
    /// Lower the vertical target.
    pub vertical_down: bool,
    /// Raise the vertical target.
    pub vertical_up: bool,
    /// Modifier held, use fine steps.
    pub fine: bool,
}

impl NudgeInput {
    /// Heading nudge for this tick, if any.
    pub fn heading(&self) -> Option<Direction> {
        pick(self.heading_down, self.heading_up)
    }

    /// Vertical nudge for this tick, if any.
    pub fn vertical(&self) -> Option<Direction> {
        pick(self.vertical_down, self.vertical_up)
    }
}

fn pick(down: bool, up: bool) -> Option<Direction> {
    if down {
        Some(Direction::Down)
    } else if up {
        Some(Direction::Up)
    } else {
        None
    }
}

fn signed(direction: Direction, step: f64) -> f64 {
    match direction {
        Direction::Down => -step,
        Direction::Up => step,
    }
}

/// Wraps a heading into `[0, 360)`.
pub fn wrap_heading(heading: f64) -> f64 {
    let wrapped = heading % FULL_TURN;
    let wrapped = if wrapped < 0.0 {
        wrapped + FULL_TURN
    } else {
        wrapped
    };
    // A tiny negative remainder rounds up to a full turn.
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

/// Nudges a heading target, wrapping into `[0, 360)`.
pub fn nudge_heading(target: f64, direction: Direction, fine: bool) -> f64 {
    wrap_heading(target + signed(direction, HEADING_STEP.size(fine)))
}

/// Nudges an altitude target, never below zero.
pub fn nudge_altitude(target: f64, direction: Direction, fine: bool) -> f64 {
    floor_altitude(target + signed(direction, ALTITUDE_STEP.size(fine)))
}

/// Nudges a vertical speed target. Negative targets are allowed.
pub fn nudge_vertical_speed(target: f64, direction: Direction, fine: bool) -> f64 {
    target + signed(direction, VERTICAL_SPEED_STEP.size(fine))
}

/// Clamps an altitude target at zero.
pub fn floor_altitude(altitude: f64) -> f64 {
    if altitude < 0.0 {
        0.0
    } else {
        altitude
    }
}

/// Heading target, displayed to two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingTarget(pub f64);

impl fmt::Display for HeadingTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// The target of the vertical cascade, which depends on the altitude hold mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalTarget {
    /// Altitude to hold, displayed to one decimal.
    Altitude(f64),
    /// Vertical speed to hold, displayed to three decimals.
    VerticalSpeed(f64),
}

impl VerticalTarget {
    /// The numeric target.
    pub fn value(self) -> f64 {
        match self {
            VerticalTarget::Altitude(value) | VerticalTarget::VerticalSpeed(value) => value,
        }
    }
}

impl fmt::Display for VerticalTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerticalTarget::Altitude(altitude) => write!(f, "{:.1}", altitude),
            VerticalTarget::VerticalSpeed(speed) => write!(f, "{:.3}", speed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use core::fmt::Write;

    /// Fixed-capacity buffer for checking `Display` output without allocating.
    struct Buffer {
        bytes: [u8; 32],
        len: usize,
    }

    impl Buffer {
        fn new() -> Self {
            Self {
                bytes: [0; 32],
                len: 0,
            }
        }

        fn as_str(&self) -> &str {
            core::str::from_utf8(&self.bytes[..self.len]).unwrap()
        }
    }

    impl Write for Buffer {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            let end = self.len + s.len();
            if end > self.bytes.len() {
                return Err(fmt::Error);
            }
            self.bytes[self.len..end].copy_from_slice(s.as_bytes());
            self.len = end;
            Ok(())
        }
    }

    #[test]
    fn test_nudge_prefers_decrement() {
        let input = NudgeInput {
            heading_down: true,
            heading_up: true,
            vertical_down: true,
            vertical_up: true,
            fine: false,
        };
        assert_eq!(Some(Direction::Down), input.heading());
        assert_eq!(Some(Direction::Down), input.vertical());
        assert_eq!(None, NudgeInput::default().heading());

        let input = NudgeInput {
            vertical_up: true,
            ..NudgeInput::default()
        };
        assert_eq!(Some(Direction::Up), input.vertical());
        assert_eq!(None, input.heading());
    }

    #[test]
    fn test_fine_step_is_one_tenth_of_coarse() {
        for step in [HEADING_STEP, ALTITUDE_STEP, VERTICAL_SPEED_STEP] {
            assert!(value_close(step.coarse / 10.0, step.fine));
        }
        assert!(value_close(90.4, nudge_heading(90.0, Direction::Up, false)));
        assert!(value_close(90.04, nudge_heading(90.0, Direction::Up, true)));
    }

    #[test]
    fn test_heading_nudge_wraps() {
        assert!(value_close(359.6, nudge_heading(0.0, Direction::Down, false)));
        assert!(value_close(359.96, nudge_heading(0.0, Direction::Down, true)));
        assert!(value_close(0.2, nudge_heading(359.8, Direction::Up, false)));
        let heading = nudge_heading(359.6, Direction::Up, false);
        assert!((0.0..FULL_TURN).contains(&heading));
    }

    #[test]
    fn test_wrap_heading() {
        assert_eq!(0.0, wrap_heading(360.0));
        assert_eq!(10.0, wrap_heading(370.0));
        assert_eq!(350.0, wrap_heading(-10.0));
        assert_eq!(0.0, wrap_heading(-1.0e-20));
        assert_eq!(123.5, wrap_heading(123.5));
    }

    #[test]
    fn test_altitude_nudge_never_below_zero() {
        let mut altitude = 9.0;
        for _ in 0..10 {
            altitude = nudge_altitude(altitude, Direction::Down, false);
            assert!(altitude >= 0.0);
        }
        assert_eq!(0.0, altitude);
        assert!(value_close(0.4, nudge_altitude(altitude, Direction::Up, true)));
    }

    #[test]
    fn test_vertical_speed_nudge_goes_negative() {
        let speed = nudge_vertical_speed(0.0, Direction::Down, false);
        assert!(value_close(-0.4, speed));
        assert!(value_close(-0.44, nudge_vertical_speed(speed, Direction::Down, true)));
    }

    #[test]
    fn test_target_display_precision() {
        let mut buffer = Buffer::new();
        write!(buffer, "{}", HeadingTarget(12.3456)).unwrap();
        assert_eq!("12.35", buffer.as_str());

        let mut buffer = Buffer::new();
        write!(buffer, "{}", VerticalTarget::Altitude(1500.04)).unwrap();
        assert_eq!("1500.0", buffer.as_str());

        let mut buffer = Buffer::new();
        write!(buffer, "{}", VerticalTarget::VerticalSpeed(-2.5)).unwrap();
        assert_eq!("-2.500", buffer.as_str());
        assert_eq!(-2.5, VerticalTarget::VerticalSpeed(-2.5).value());
    }
}
