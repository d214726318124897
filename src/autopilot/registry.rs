// src/autopilot/registry.rs

//! The fixed set of controllers, one per control channel.

use crate::{AutopilotConfig, AutopilotError, Pid, PidConfig};
use core::fmt;

/// Identifies one controller in the [`ControllerRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Heading error to bank angle.
    HeadingBank,
    /// Heading error to yaw angle.
    HeadingYaw,
    /// Bank angle error to roll command.
    Aileron,
    /// Yaw angle error to yaw command.
    Rudder,
    /// Altitude error to climb rate.
    Altitude,
    /// Climb rate error to angle of attack.
    AngleOfAttack,
    /// Angle of attack error to pitch command.
    Elevator,
}

impl Channel {
    /// Every channel, in cascade order.
    pub const ALL: [Channel; 7] = [
        Channel::HeadingBank,
        Channel::HeadingYaw,
        Channel::Aileron,
        Channel::Rudder,
        Channel::Altitude,
        Channel::AngleOfAttack,
        Channel::Elevator,
    ];

    /// Short lowercase name used in logs and errors.
    pub fn name(self) -> &'static str {
        match self {
            Channel::HeadingBank => "heading-bank",
            Channel::HeadingYaw => "heading-yaw",
            Channel::Aileron => "aileron",
            Channel::Rudder => "rudder",
            Channel::Altitude => "altitude",
            Channel::AngleOfAttack => "angle-of-attack",
            Channel::Elevator => "elevator",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One [`Pid`] controller per [`Channel`], created together and never
/// added to or removed from.
pub struct ControllerRegistry {
    heading_bank: Pid<f64>,
    heading_yaw: Pid<f64>,
    aileron: Pid<f64>,
    rudder: Pid<f64>,
    altitude: Pid<f64>,
    angle_of_attack: Pid<f64>,
    elevator: Pid<f64>,
}

fn build(channel: Channel, config: PidConfig<f64>) -> Result<Pid<f64>, AutopilotError> {
    Pid::with_config(config).map_err(|source| AutopilotError::InvalidController { channel, source })
}

impl ControllerRegistry {
    /// Builds every controller, failing on the first misconfigured channel.
    pub fn with_config(config: &AutopilotConfig) -> Result<Self, AutopilotError> {
        Ok(ControllerRegistry {
            heading_bank: build(Channel::HeadingBank, config.heading_bank)?,
            heading_yaw: build(Channel::HeadingYaw, config.heading_yaw)?,
            aileron: build(Channel::Aileron, config.aileron)?,
            rudder: build(Channel::Rudder, config.rudder)?,
            altitude: build(Channel::Altitude, config.altitude)?,
            angle_of_attack: build(Channel::AngleOfAttack, config.angle_of_attack)?,
            elevator: build(Channel::Elevator, config.elevator)?,
        })
    }

    /// The controller for `channel`.
    pub fn get(&self, channel: Channel) -> &Pid<f64> {
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

    /// The controller for `channel`, mutably.
    pub fn get_mut(&mut self, channel: Channel) -> &mut Pid<f64> {
        match channel {
            Channel::HeadingBank => &mut self.heading_bank,
            Channel::HeadingYaw => &mut self.heading_yaw,
            Channel::Aileron => &mut self.aileron,
            Channel::Rudder => &mut self.rudder,
            Channel::Altitude => &mut self.altitude,
            Channel::AngleOfAttack => &mut self.angle_of_attack,
            Channel::Elevator => &mut self.elevator,
        }
    }

    /// Clears the accumulated state of each listed controller.
    pub fn clear(&mut self, channels: &[Channel]) {
        for &channel in channels {
            self.get_mut(channel).clear();
        }
    }

    /// Sets the same setpoint on each listed controller.
    pub fn set_setpoints(&mut self, channels: &[Channel], setpoint: f64) {
        for &channel in channels {
            self.get_mut(channel).set_setpoint(setpoint);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PidConfigError;

    #[test]
    fn test_registry_builds_from_default_config() {
        let config = AutopilotConfig::default();
        let registry = ControllerRegistry::with_config(&config).unwrap();

        for channel in Channel::ALL {
            assert_eq!(config.get(channel), registry.get(channel).config());
            assert_eq!(0.0, registry.get(channel).setpoint());
        }
    }

    #[test]
    fn test_registry_names_the_misconfigured_channel() {
        let mut config = AutopilotConfig::default();
        config.elevator.integral_min = 1.0;
        config.elevator.integral_max = -1.0;

        let error = ControllerRegistry::with_config(&config).map(|_| ());
        assert_eq!(
            Err(AutopilotError::InvalidController {
                channel: Channel::Elevator,
                source: PidConfigError::InvertedIntegralBounds,
            }),
            error
        );
    }

    #[test]
    fn test_registry_channels_are_distinct() {
        let mut registry = ControllerRegistry::with_config(&AutopilotConfig::default()).unwrap();
        for (index, channel) in Channel::ALL.into_iter().enumerate() {
            registry.get_mut(channel).set_setpoint(index as f64);
        }
        for (index, channel) in Channel::ALL.into_iter().enumerate() {
            assert_eq!(index as f64, registry.get(channel).setpoint());
        }
    }

    #[test]
    fn test_registry_clear_only_touches_listed_channels() {
        let mut registry = ControllerRegistry::with_config(&AutopilotConfig::default()).unwrap();
        registry.set_setpoints(&Channel::ALL, 10.0);
        for channel in Channel::ALL {
            let _ = registry.get_mut(channel).response(0.0, 0.1);
        }

        registry.clear(&[Channel::Aileron, Channel::Rudder]);

        assert_eq!(0.0, registry.get(Channel::Aileron).accumulated_error());
        assert_eq!(0.0, registry.get(Channel::Rudder).previous_error());
        assert_ne!(0.0, registry.get(Channel::Elevator).accumulated_error());
        assert_eq!(10.0, registry.get(Channel::Aileron).setpoint());
    }
}
