// src/pid.rs

//! # PID Control Module
//!
//! This module provides the compute callback and the controller type used for
//! every channel of the autopilot. The controller is generic over [`Number`],
//! so floating point and fixed point types both work.

use piddiy::Number as PiddiyNumber;

pub mod bounded;
pub use bounded::*;
pub mod controller;
pub use controller::*;

/// Custom trait to encapsulate base number requirements.
pub trait Number: PiddiyNumber {
    /// Clamps generic PartialOrd values within a given range.
    fn clamp(self, min: Self, max: Self) -> Self {
        if self < min {
            min
        } else if max < self {
            max
        } else {
            self
        }
    }
}

impl<T: PiddiyNumber> Number for T {}
