// src/test_utils.rs

//! This module contains utilities for testing.

use crate::{ControlAxes, VesselState};

/// A constant defining the tolerance within which floating-point values
/// are considered close enough to be equal.
pub const TEST_TOLERANCE: f64 = 1e-5;

/// Checks if two floating point numbers are close enough to be considered
/// equal.
///
/// # Arguments
/// * `target` - The target value.
/// * `value` - The value to compare against the target.
///
/// # Returns
/// `true` if the absolute difference between `target` and `value` is less than
/// `TEST_TOLERANCE`, otherwise `false`.
pub fn value_close(target: f64, value: f64) -> bool {
    num_traits::float::FloatCore::abs(target - value) < TEST_TOLERANCE
}

/// A level vessel at 1000 m heading north, neither climbing nor sinking.
pub fn level_vessel() -> VesselState {
    VesselState {
        heading: 0.0,
        roll: 0.0,
        yaw: 0.0,
        altitude: 1000.0,
        vertical_speed: 0.0,
        angle_of_attack: 0.0,
    }
}

/// Pilot axes with no stick input.
pub fn centered_axes() -> ControlAxes {
    ControlAxes::default()
}
