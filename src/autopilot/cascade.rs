// src/autopilot/cascade.rs

//! # Cascade Evaluation
//!
//! Each cascade feeds one controller's output into the next controller's
//! setpoint within the same tick, so stage order inside a cascade is fixed.
//! The heading and vertical cascades do not share controllers and may run
//! in either order.
//!
//! Controllers compute `setpoint - measured`, so every stage output already
//! points the way the next stage should move. Rising above the target
//! altitude yields a negative climb rate request without any sign flip.

use crate::{Channel, ControlAxes, ControllerRegistry, VesselState};

/// Half a turn, in degrees.
pub const HALF_TURN: f64 = 180.0;
/// A full turn, in degrees.
pub const FULL_TURN: f64 = 360.0;

/// Heading to feed the heading controllers so that `setpoint - heading`
/// takes the short way around the compass.
///
/// ```
/// use flight_hold_autopilot::effective_heading;
///
/// // 10 degrees past north, target 350: turn left 20 degrees.
/// assert_eq!(370.0, effective_heading(350.0, 10.0));
/// // 350 degrees, target 10: turn right 20 degrees.
/// assert_eq!(-10.0, effective_heading(10.0, 350.0));
/// ```
pub fn effective_heading(setpoint: f64, heading: f64) -> f64 {
    let difference = setpoint - heading;
    if difference < -HALF_TURN {
        heading - FULL_TURN
    } else if difference > HALF_TURN {
        heading + FULL_TURN
    } else {
        heading
    }
}

/// Runs heading-bank and heading-yaw, then aileron and rudder.
///
/// The aileron command is added to the pilot's roll input and clamped.
/// The rudder command replaces the yaw axis.
pub fn heading_cascade(
    registry: &mut ControllerRegistry,
    vessel: &VesselState,
    axes: &mut ControlAxes,
    dt: f64,
) {
    let heading = effective_heading(
        registry.get(Channel::HeadingBank).setpoint(),
        vessel.heading,
    );

    let bank = registry.get_mut(Channel::HeadingBank).response(heading, dt);
    let yaw = registry.get_mut(Channel::HeadingYaw).response(heading, dt);
    registry.get_mut(Channel::Aileron).set_setpoint(bank);
    registry.get_mut(Channel::Rudder).set_setpoint(yaw);

    let aileron = registry.get_mut(Channel::Aileron).response(vessel.roll, dt);
    let rudder = registry.get_mut(Channel::Rudder).response(vessel.yaw, dt);
    axes.roll = (aileron + axes.roll).clamp(ControlAxes::MIN, ControlAxes::MAX);
    axes.yaw = rudder.clamp(ControlAxes::MIN, ControlAxes::MAX);
}

/// Runs altitude (when holding altitude), angle of attack, then elevator,
/// and writes the pitch axis.
pub fn vertical_cascade(
    registry: &mut ControllerRegistry,
    vessel: &VesselState,
    altitude_hold: bool,
    axes: &mut ControlAxes,
    dt: f64,
) {
    if altitude_hold {
        let climb_rate = registry.get_mut(Channel::Altitude).response(vessel.altitude, dt);
        registry
            .get_mut(Channel::AngleOfAttack)
            .set_setpoint(climb_rate);
    }

    let angle_of_attack = registry
        .get_mut(Channel::AngleOfAttack)
        .response(vessel.vertical_speed, dt);
    registry
        .get_mut(Channel::Elevator)
        .set_setpoint(angle_of_attack);

    let elevator = registry
        .get_mut(Channel::Elevator)
        .response(vessel.angle_of_attack, dt);
    axes.pitch = elevator.clamp(ControlAxes::MIN, ControlAxes::MAX);
}
