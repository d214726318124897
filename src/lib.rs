// src/lib.rs

//! # Cascaded PID Flight Hold Autopilot
//!
//! This crate provides a `no_std`, no-alloc autopilot core that converts
//! pilot-set targets (heading, vertical speed, altitude) into roll, yaw and
//! pitch commands each control tick. A fixed set of PID controllers is wired
//! into two cascades, and a small mode state machine decides when each cascade
//! runs and how its targets are captured, nudged and cleared.
//!
//! The host owns the vehicle. Each tick it hands the autopilot a
//! [`VesselState`] snapshot and the pilot's [`ControlAxes`], and the autopilot
//! writes its commands back into those axes.

#![no_std]
#![deny(missing_docs)]

pub mod autopilot;
pub mod error;
pub mod pid;

#[doc(inline)]
pub use autopilot::*;
#[doc(inline)]
pub use error::*;
#[doc(inline)]
pub use pid::*;

#[cfg(test)]
mod test_utils;
