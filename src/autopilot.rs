// src/autopilot.rs

//! # Autopilot Session
//!
//! An [`Autopilot`] owns the controller registry and the mode switches for
//! one vessel. The host drives it from two places:
//!
//! - the fly-by-wire callback calls [`Autopilot::control`] each control tick;
//! - the per-frame update applies mode toggles ([`Autopilot::set_mode`]) and
//!   directional nudges ([`Autopilot::apply_nudges`]).
//!
//! Both run on the host's main thread, so the session needs no locking.
//!
//! ## Mode transitions
//!
//! | mode | on | off |
//! |---|---|---|
//! | heading hold | capture heading into heading-bank and heading-yaw | clear heading-bank, heading-yaw, aileron, rudder |
//! | vertical hold | capture altitude or vertical speed | clear altitude, heading-bank, elevator |
//! | altitude hold | capture altitude | capture vertical speed |
//!
//! Leaving vertical hold clears heading-bank and leaves angle-of-attack
//! untouched.

pub mod adjust;
pub use adjust::*;
pub mod cascade;
pub use cascade::*;
pub mod config;
pub use config::*;
pub mod modes;
pub use modes::*;
pub mod registry;
pub use registry::*;
pub mod vessel;
pub use vessel::*;

use crate::{AutopilotError, Pid};
use log::{debug, trace, warn};

/// Controllers cleared when heading hold disengages.
const HEADING_CHANNELS: [Channel; 4] = [
    Channel::HeadingBank,
    Channel::HeadingYaw,
    Channel::Aileron,
    Channel::Rudder,
];

/// Controllers cleared when vertical hold disengages.
const VERTICAL_CLEARED_CHANNELS: [Channel; 3] =
    [Channel::Altitude, Channel::HeadingBank, Channel::Elevator];

/// Controllers sharing the heading target.
const HEADING_TARGET_CHANNELS: [Channel; 2] = [Channel::HeadingBank, Channel::HeadingYaw];

/// Heading, altitude and vertical speed hold for one vessel.
pub struct Autopilot {
    registry: ControllerRegistry,
    modes: Modes,
    config: AutopilotConfig,
}

impl Autopilot {
    /// Builds every controller with all modes off.
    ///
    /// Example Usage
    /// ```
    /// use flight_hold_autopilot::{Autopilot, AutopilotConfig, ControlAxes, Mode, VesselState};
    ///
    /// let mut autopilot = Autopilot::new(AutopilotConfig::default()).unwrap();
    /// let vessel = VesselState {
    ///     heading: 359.0,
    ///     altitude: 1200.0,
    ///     ..VesselState::default()
    /// };
    ///
    /// autopilot.set_mode(Mode::HeadingHold, true, &vessel);
    /// autopilot.set_heading_target(1.0).unwrap();
    ///
    /// // The pilot is not touching the stick.
    /// let mut axes = ControlAxes::default();
    /// autopilot.control(Some(&vessel), &mut axes, 0.02);
    ///
    /// // Two degrees to the right across north, not 358 to the left.
    /// assert!(axes.roll > 0.0);
    /// ```
    pub fn new(config: AutopilotConfig) -> Result<Self, AutopilotError> {
        let registry = ControllerRegistry::with_config(&config)?;
        Ok(Autopilot {
            registry,
            modes: Modes::new(),
            config,
        })
    }

    /// The tuning this session was built with.
    pub fn config(&self) -> &AutopilotConfig {
        &self.config
    }

    /// Every controller, read-only.
    pub fn registry(&self) -> &ControllerRegistry {
        &self.registry
    }

    /// The controller for `channel`.
    pub fn controller(&self, channel: Channel) -> &Pid<f64> {
        self.registry.get(channel)
    }

    /// Whether `mode` is on.
    pub fn is_active(&self, mode: Mode) -> bool {
        self.modes.is_active(mode)
    }

    /// Turns `mode` on or off, running its entry or exit action if the state
    /// changed. Targets are captured from `vessel`.
    pub fn set_mode(&mut self, mode: Mode, active: bool, vessel: &VesselState) {
        let Some(transition) = self.modes.set(mode, active) else {
            return;
        };
        debug!("{:?} {:?}", mode, transition);

        match (mode, transition) {
            (Mode::HeadingHold, Transition::Engaged) => self.capture_heading(vessel),
            (Mode::HeadingHold, Transition::Disengaged) => self.registry.clear(&HEADING_CHANNELS),
            (Mode::VerticalHold, Transition::Engaged) => self.capture_vertical(vessel),
            (Mode::VerticalHold, Transition::Disengaged) => {
                self.registry.clear(&VERTICAL_CLEARED_CHANNELS)
            }
            // Switching between altitude and vertical speed recaptures
            // whether or not vertical hold is on.
            (Mode::AltitudeHold, _) => self.capture_vertical(vessel),
        }
    }

    /// Shorthand for [`set_mode`](Self::set_mode) with [`Mode::HeadingHold`].
    pub fn set_heading_hold(&mut self, active: bool, vessel: &VesselState) {
        self.set_mode(Mode::HeadingHold, active, vessel);
    }

    /// Shorthand for [`set_mode`](Self::set_mode) with [`Mode::VerticalHold`].
    pub fn set_vertical_hold(&mut self, active: bool, vessel: &VesselState) {
        self.set_mode(Mode::VerticalHold, active, vessel);
    }

    /// Shorthand for [`set_mode`](Self::set_mode) with [`Mode::AltitudeHold`].
    pub fn set_altitude_hold(&mut self, active: bool, vessel: &VesselState) {
        self.set_mode(Mode::AltitudeHold, active, vessel);
    }

    /// Runs one control tick.
    ///
    /// `axes` holds the pilot's input on entry. Each active cascade
    /// overwrites the axes it drives. Without a vessel, or with a
    /// non-positive `dt`, the tick is skipped. A cascade whose inputs are not
    /// finite is skipped without affecting the other.
    pub fn control(&mut self, vessel: Option<&VesselState>, axes: &mut ControlAxes, dt: f64) {
        let Some(vessel) = vessel else {
            trace!("no vessel, skipping control tick");
            return;
        };
        if !(dt > 0.0 && dt.is_finite()) {
            warn!("skipping control tick with dt {}", dt);
            return;
        }

        if self.modes.is_active(Mode::HeadingHold) {
            if vessel.heading_inputs_finite() && axes.roll.is_finite() {
                heading_cascade(&mut self.registry, vessel, axes, dt);
            } else {
                warn!("skipping heading cascade on non-finite input {:?}", vessel);
            }
        }

        if self.modes.is_active(Mode::VerticalHold) {
            let altitude_hold = self.modes.is_active(Mode::AltitudeHold);
            if vessel.vertical_inputs_finite(altitude_hold) {
                vertical_cascade(&mut self.registry, vessel, altitude_hold, axes, dt);
            } else {
                warn!("skipping vertical cascade on non-finite input {:?}", vessel);
            }
        }
    }

    /// Applies this tick's directional nudges to the active targets.
    pub fn apply_nudges(&mut self, input: NudgeInput) {
        if let Some(direction) = input.heading() {
            if self.modes.is_active(Mode::HeadingHold) {
                let heading = nudge_heading(self.heading_target().0, direction, input.fine);
                self.registry.set_setpoints(&HEADING_TARGET_CHANNELS, heading);
                trace!("heading target nudged to {}", HeadingTarget(heading));
            }
        }

        if let Some(direction) = input.vertical() {
            if self.modes.is_active(Mode::VerticalHold) {
                let target = match self.vertical_target() {
                    VerticalTarget::Altitude(altitude) => {
                        VerticalTarget::Altitude(nudge_altitude(altitude, direction, input.fine))
                    }
                    VerticalTarget::VerticalSpeed(speed) => VerticalTarget::VerticalSpeed(
                        nudge_vertical_speed(speed, direction, input.fine),
                    ),
                };
                self.write_vertical_target(target);
                trace!("vertical target nudged to {}", target);
            }
        }
    }

    /// The heading being held.
    pub fn heading_target(&self) -> HeadingTarget {
        HeadingTarget(self.registry.get(Channel::HeadingBank).setpoint())
    }

    /// The altitude or vertical speed being held, per the altitude hold mode.
    pub fn vertical_target(&self) -> VerticalTarget {
        if self.modes.is_active(Mode::AltitudeHold) {
            VerticalTarget::Altitude(self.registry.get(Channel::Altitude).setpoint())
        } else {
            VerticalTarget::VerticalSpeed(self.registry.get(Channel::AngleOfAttack).setpoint())
        }
    }

    /// Sets the heading target, wrapped into `[0, 360)`.
    /// A non-finite value is rejected and the previous target kept.
    pub fn set_heading_target(&mut self, heading: f64) -> Result<HeadingTarget, AutopilotError> {
        let heading = wrap_heading(finite(heading)?);
        self.registry.set_setpoints(&HEADING_TARGET_CHANNELS, heading);
        debug!("heading target set to {}", HeadingTarget(heading));
        Ok(HeadingTarget(heading))
    }

    /// Parses `text` and sets the heading target.
    pub fn set_heading_target_str(&mut self, text: &str) -> Result<HeadingTarget, AutopilotError> {
        let result = parse_target(text).and_then(|heading| self.set_heading_target(heading));
        if let Err(error) = &result {
            warn!("heading target {:?} rejected: {}", text, error);
        }
        result
    }

    /// Sets the altitude (floored at zero) or vertical speed target,
    /// per the altitude hold mode.
    /// A non-finite value is rejected and the previous target kept.
    pub fn set_vertical_target(&mut self, value: f64) -> Result<VerticalTarget, AutopilotError> {
        let value = finite(value)?;
        let target = match self.vertical_target() {
            VerticalTarget::Altitude(_) => VerticalTarget::Altitude(floor_altitude(value)),
            VerticalTarget::VerticalSpeed(_) => VerticalTarget::VerticalSpeed(value),
        };
        self.write_vertical_target(target);
        debug!("vertical target set to {}", target);
        Ok(target)
    }

    /// Parses `text` and sets the vertical target.
    pub fn set_vertical_target_str(&mut self, text: &str) -> Result<VerticalTarget, AutopilotError> {
        let result = parse_target(text).and_then(|value| self.set_vertical_target(value));
        if let Err(error) = &result {
            warn!("vertical target {:?} rejected: {}", text, error);
        }
        result
    }

    fn capture_heading(&mut self, vessel: &VesselState) {
        match finite(vessel.heading) {
            Ok(heading) => {
                let heading = wrap_heading(heading);
                self.registry.set_setpoints(&HEADING_TARGET_CHANNELS, heading);
                debug!("heading target captured at {}", HeadingTarget(heading));
            }
            Err(_) => warn!("heading {} not captured, keeping previous target", vessel.heading),
        }
    }

    fn capture_vertical(&mut self, vessel: &VesselState) {
        let target = if self.modes.is_active(Mode::AltitudeHold) {
            VerticalTarget::Altitude(vessel.altitude)
        } else {
            VerticalTarget::VerticalSpeed(vessel.vertical_speed)
        };
        if finite(target.value()).is_err() {
            warn!("{:?} not captured, keeping previous target", target);
            return;
        }
        self.write_vertical_target(target);
        debug!("vertical target captured at {}", target);
    }

    fn write_vertical_target(&mut self, target: VerticalTarget) {
        match target {
            VerticalTarget::Altitude(altitude) => {
                self.registry.get_mut(Channel::Altitude).set_setpoint(altitude)
            }
            VerticalTarget::VerticalSpeed(speed) => {
                self.registry.get_mut(Channel::AngleOfAttack).set_setpoint(speed)
            }
        }
    }
}

fn finite(value: f64) -> Result<f64, AutopilotError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AutopilotError::NonFiniteTarget)
    }
}

fn parse_target(text: &str) -> Result<f64, AutopilotError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| AutopilotError::MalformedTarget)
}
