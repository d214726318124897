// src/pid/controller.rs

//! # Bounded PID Controller
//!
//! A single-input, single-output feedback loop built on
//! [`piddiy::PidController`] and [`compute_bounded`]. The controller
//! clamps the measurement (optionally), the accumulated error and the output,
//! and remembers its last output for display.

use crate::{compute_bounded, BoundedControlData, Number, PidConfigError};
use piddiy::PidController;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Gains and bounds for one [`Pid`] controller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PidConfig<T> {
    /// Proportional gain.
    pub kp: T,
    /// Integral gain.
    pub ki: T,
    /// Derivative gain.
    pub kd: T,
    /// Lower output limit.
    pub output_min: T,
    /// Upper output limit.
    pub output_max: T,
    /// Lower limit for the accumulated error.
    pub integral_min: T,
    /// Upper limit for the accumulated error.
    pub integral_max: T,
    /// Optional `(min, max)` range for the measured input.
    pub input_limits: Option<(T, T)>,
}

impl<T: Number> PidConfig<T> {
    /// Creates a proportional-only configuration with unit bounds.
    /// These should be replaced with values tuned for the vehicle.
    ///
    /// Example Usage
    /// ```
    /// use flight_hold_autopilot::{Pid, PidConfig};
    ///
    /// let mut config = PidConfig::<f64>::new();
    /// config.kp = 0.05;
    /// config.ki = 0.01;
    /// config.kd = 0.1;
    /// config.integral_min = -0.1;
    /// config.integral_max = 0.1;
    ///
    /// let mut rudder = Pid::with_config(config).unwrap();
    /// let command = rudder.response(2.0, 0.02);
    /// assert!((-1.0..=1.0).contains(&command));
    /// ```
    pub fn new() -> Self {
        Self {
            kp: T::one(),
            ki: T::zero(),
            kd: T::zero(),
            output_min: -T::one(),
            output_max: T::one(),
            integral_min: -T::one(),
            integral_max: T::one(),
            input_limits: None,
        }
    }

    /// Returns the configuration with the given measured-input range.
    pub fn with_input_limits(mut self, min: T, max: T) -> Self {
        self.input_limits = Some((min, max));
        self
    }

    /// Checks that every bound pair satisfies `min <= max`.
    pub fn validate(&self) -> Result<(), PidConfigError> {
        // Written as `!(min <= max)` so NaN bounds are rejected too.
        if !(self.output_min <= self.output_max) {
            return Err(PidConfigError::InvertedOutputBounds);
        }
        if !(self.integral_min <= self.integral_max) {
            return Err(PidConfigError::InvertedIntegralBounds);
        }
        if let Some((min, max)) = self.input_limits {
            if !(min <= max) {
                return Err(PidConfigError::InvertedInputBounds);
            }
        }
        Ok(())
    }
}

impl<T: Number> Default for PidConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// PID controller with clamped output and clamped accumulated error.
pub struct Pid<T: Number> {
    pid: PidController<T, BoundedControlData<T>>,
    config: PidConfig<T>,
    last_output: T,
}

impl<T: Number> Pid<T> {
    /// Creates a controller from a validated configuration.
    /// The setpoint starts at zero.
    pub fn with_config(config: PidConfig<T>) -> Result<Self, PidConfigError> {
        config.validate()?;

        let mut pid = PidController::new();
        pid.compute_fn(compute_bounded)
            .set_point(T::zero())
            .kp(config.kp)
            .ki(config.ki)
            .kd(config.kd);

        Ok(Pid {
            pid,
            config,
            last_output: T::zero(),
        })
    }

    /// Computes the clamped response to `measured` over the tick interval `dt`.
    ///
    /// A NaN measurement or a non-positive `dt` leaves the controller
    /// untouched and returns the last output.
    #[allow(clippy::eq_op)]
    pub fn response(&mut self, measured: T, dt: T) -> T {
        if measured != measured || !(dt > T::zero()) {
            return self.last_output;
        }
        let data = BoundedControlData {
            measurement: measured,
            dt,
            integral_min: self.config.integral_min,
            integral_max: self.config.integral_max,
            input_limits: self.config.input_limits,
        };
        let output = self
            .pid
            .compute(data)
            .clamp(self.config.output_min, self.config.output_max);
        self.last_output = output;
        output
    }

    /// Zeroes the accumulated and previous error.
    /// Gains, bounds and the setpoint are left alone.
    pub fn clear(&mut self) {
        self.pid.integral = T::zero();
        self.pid.error = T::zero();
    }

    /// The value the controller drives its measurement toward.
    pub fn setpoint(&self) -> T {
        self.pid.set_point
    }

    /// Replaces the setpoint.
    pub fn set_setpoint(&mut self, setpoint: T) {
        self.pid.set_point = setpoint;
    }

    /// Accumulated error after the last response.
    pub fn accumulated_error(&self) -> T {
        self.pid.integral
    }

    /// Error seen by the last response.
    pub fn previous_error(&self) -> T {
        self.pid.error
    }

    /// Output of the last response.
    pub fn last_output(&self) -> T {
        self.last_output
    }

    /// Gains and bounds the controller was built with.
    pub fn config(&self) -> &PidConfig<T> {
        &self.config
    }
}
