// src/error.rs

//! Error types for controller construction and target edits.

use crate::Channel;
use thiserror::Error;

/// Invalid bounds in a [`PidConfig`](crate::PidConfig).
///
/// Every bound pair must satisfy `min <= max`. NaN bounds fail the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PidConfigError {
    /// `output_min` is greater than `output_max`.
    #[error("output bounds are inverted or NaN")]
    InvertedOutputBounds,
    /// `integral_min` is greater than `integral_max`.
    #[error("accumulated error bounds are inverted or NaN")]
    InvertedIntegralBounds,
    /// The measured-input range is inverted.
    #[error("input bounds are inverted or NaN")]
    InvertedInputBounds,
}

/// Errors reported by an [`Autopilot`](crate::Autopilot) session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AutopilotError {
    /// A channel's controller could not be built from its configuration.
    #[error("{channel} controller misconfigured: {source}")]
    InvalidController {
        /// The channel whose configuration was rejected.
        channel: Channel,
        /// What was wrong with it.
        #[source]
        source: PidConfigError,
    },
    /// Target text did not parse as a number.
    #[error("target is not a number")]
    MalformedTarget,
    /// Target value was NaN or infinite.
    #[error("target is not finite")]
    NonFiniteTarget,
}
