// src/autopilot/vessel.rs

//! Per-tick inputs read from the host and control axes written back to it.

/// Snapshot of the controlled vessel, read once per control tick.
///
/// The autopilot never writes to it. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VesselState {
    /// Compass heading in `[0, 360)`.
    pub heading: f64,
    /// Bank angle.
    pub roll: f64,
    /// Yaw angle.
    pub yaw: f64,
    /// Altitude above sea level.
    pub altitude: f64,
    /// Vertical speed, positive when climbing.
    pub vertical_speed: f64,
    /// Angle of attack.
    pub angle_of_attack: f64,
}

impl VesselState {
    /// Whether the heading cascade can run on this snapshot.
    pub fn heading_inputs_finite(&self) -> bool {
        self.heading.is_finite() && self.roll.is_finite() && self.yaw.is_finite()
    }

    /// Whether the vertical cascade can run on this snapshot.
    /// Altitude only matters while holding altitude.
    pub fn vertical_inputs_finite(&self, altitude_hold: bool) -> bool {
        (!altitude_hold || self.altitude.is_finite())
            && self.vertical_speed.is_finite()
            && self.angle_of_attack.is_finite()
    }
}

/// Roll, yaw and pitch commands, each in `[-1, 1]`.
///
/// Handed to [`Autopilot::control`](crate::Autopilot::control) holding the
/// pilot's raw input, and returned holding the autopilot's commands for
/// every axis an active cascade drives.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlAxes {
    /// Roll command, positive rolls right.
    pub roll: f64,
    /// Yaw command.
    pub yaw: f64,
    /// Pitch command.
    pub pitch: f64,
}

impl ControlAxes {
    /// Lower limit of every axis.
    pub const MIN: f64 = -1.0;
    /// Upper limit of every axis.
    pub const MAX: f64 = 1.0;

    /// Creates axes from raw pilot input.
    pub fn new(roll: f64, yaw: f64, pitch: f64) -> Self {
        Self { roll, yaw, pitch }
    }
}
