// src/autopilot/config.rs

//! Tuning for every controller in the autopilot.

use crate::{Channel, PidConfig};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Gains and bounds for each [`Channel`].
///
/// The configuration is fixed once an [`Autopilot`](crate::Autopilot) is
/// built from it. Loading and saving named tunings is left to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AutopilotConfig {
    /// Heading to bank angle.
    pub heading_bank: PidConfig<f64>,
    /// Heading to yaw angle.
    pub heading_yaw: PidConfig<f64>,
    /// Bank angle to roll command.
    pub aileron: PidConfig<f64>,
    /// Yaw angle to yaw command.
    pub rudder: PidConfig<f64>,
    /// Altitude to climb rate.
    pub altitude: PidConfig<f64>,
    /// Climb rate to angle of attack.
    pub angle_of_attack: PidConfig<f64>,
    /// Angle of attack to pitch command.
    pub elevator: PidConfig<f64>,
}

fn tuning(
    kp: f64,
    ki: f64,
    kd: f64,
    output_limit: f64,
    integral_limit: f64,
    input_limits: Option<(f64, f64)>,
) -> PidConfig<f64> {
    PidConfig {
        kp,
        ki,
        kd,
        output_min: -output_limit,
        output_max: output_limit,
        integral_min: -integral_limit,
        integral_max: integral_limit,
        input_limits,
    }
}

impl AutopilotConfig {
    /// Stock tuning for a light fixed-wing craft.
    ///
    /// Example Usage
    /// ```
    /// use flight_hold_autopilot::{Autopilot, AutopilotConfig};
    ///
    /// let mut config = AutopilotConfig::new();
    ///
    /// // Bank harder toward the target heading.
    /// config.heading_bank.kp = 4.0;
    /// config.heading_bank.output_min = -35.0;
    /// config.heading_bank.output_max = 35.0;
    ///
    /// let autopilot = Autopilot::new(config).unwrap();
    /// assert_eq!(4.0, autopilot.config().heading_bank.kp);
    /// ```
    pub fn new() -> Self {
        Self {
            heading_bank: tuning(3.0, 0.1, 0.0, 30.0, 0.1, None),
            heading_yaw: tuning(0.0, 0.0, 0.0, 2.0, 2.0, None),
            aileron: tuning(0.01, 0.01, 0.01, 1.0, 0.1, Some((-180.0, 180.0))),
            rudder: tuning(0.05, 0.01, 0.1, 1.0, 0.1, None),
            // Altitude below sea level reads as zero.
            altitude: tuning(0.1, 0.0, 0.0, 30.0, 1.0, Some((0.0, f64::MAX))),
            angle_of_attack: tuning(3.0, 0.4, 1.5, 10.0, 10.0, None),
            elevator: tuning(0.01, 0.01, 0.01, 1.0, 0.1, None),
        }
    }

    /// The configuration of `channel`.
    pub fn get(&self, channel: Channel) -> &PidConfig<f64> {
        match channel {
            Channel::HeadingBank => &self.heading_bank,
            Channel::HeadingYaw => &self.heading_yaw,
            Channel::Aileron => &self.aileron,
            Channel::Rudder => &self.rudder,
            Channel::Altitude => &self.altitude,
            Channel::AngleOfAttack => &self.angle_of_attack,
            Channel::Elevator => &self.elevator,
        }
    }
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self::new()
    }
}
