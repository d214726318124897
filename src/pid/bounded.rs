// src/pid/bounded.rs

//! # Bounded PID Control Module
//!
//! This module provides a compute function and control data structure
//! to perform PID (Proportional-Integral-Derivative) calculations with a
//! clamped measurement and a clamped accumulated error.

use crate::Number;
use piddiy::PidController;

/// Control data for the bounded PID compute callback.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundedControlData<T> {
    /// The measured value reported by the plant.
    pub measurement: T,
    /// The time delta since the last computation.
    pub dt: T,
    /// Lower limit for the accumulated error, used to prevent integral windup.
    pub integral_min: T,
    /// Upper limit for the accumulated error, used to prevent integral windup.
    pub integral_max: T,
    /// Optional `(min, max)` range the measurement is clamped into before
    /// the error is computed.
    pub input_limits: Option<(T, T)>,
}

/// Bounded PID compute callback.
///
/// Returns `(error, integral, derivative)`. `piddiy` stores the error and
/// integral back into the controller, so the next call differentiates
/// against this call's error.
pub fn compute_bounded<T: Number>(
    pid: &mut PidController<T, BoundedControlData<T>>,
    data: BoundedControlData<T>,
) -> (T, T, T) {
    let measurement = match data.input_limits {
        Some((min, max)) => data.measurement.clamp(min, max),
        None => data.measurement,
    };
    let error = pid.set_point - measurement;
    let integral = (pid.integral + error * data.dt).clamp(data.integral_min, data.integral_max);
    let derivative = (error - pid.error) / data.dt;

    (error, integral, derivative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn data(measurement: f64) -> BoundedControlData<f64> {
        BoundedControlData {
            measurement,
            dt: 1.0,
            integral_min: -100.0,
            integral_max: 100.0,
            input_limits: None,
        }
    }

    /// Test that the integral term is clamped to the upper limit.
    #[test]
    fn test_pid_bounded_integral_clamping() {
        let mut pid = PidController::new();
        pid.compute_fn(compute_bounded)
            .set_point(50.0)
            .kp(1.0)
            .ki(5.0)
            .kd(0.1);

        // This would normally push integral way over 100 if not clamped
        for _ in 0..10 {
            let _ = pid.compute(data(0.0));
        }

        let (_, integral, _) = compute_bounded(&mut pid, data(0.0));
        assert!(
            value_close(100.0, integral),
            "Integral should be clamped to 100."
        );
    }

    /// Test that asymmetric integral bounds clamp the lower side.
    #[test]
    fn test_pid_bounded_asymmetric_integral_clamping() {
        let mut pid = PidController::new();
        pid.compute_fn(compute_bounded).set_point(-10.0).kp(1.0);
        let data = BoundedControlData {
            integral_min: -2.0,
            integral_max: 50.0,
            ..data(0.0)
        };

        for _ in 0..5 {
            let _ = pid.compute(data);
        }

        assert!(
            value_close(-2.0, pid.integral),
            "Integral should stop at the lower bound."
        );
    }

    /// Test that the measurement is clamped before the error is computed.
    #[test]
    fn test_pid_bounded_input_clamping() {
        let mut pid = PidController::new();
        pid.compute_fn(compute_bounded).set_point(10.0).kp(1.0);
        let data = BoundedControlData {
            input_limits: Some((0.0, 5.0)),
            ..data(-20.0)
        };

        let (error, _, _) = compute_bounded(&mut pid, data);
        assert!(
            value_close(10.0, error),
            "Negative measurement should be floored at zero."
        );

        let (error, _, _) = compute_bounded(&mut pid, BoundedControlData {
            measurement: 8.0,
            ..data
        });
        assert!(
            value_close(5.0, error),
            "Measurement should be capped at five."
        );
    }

    /// Measurement limits and lopsided integral bounds across several ticks.
    #[test]
    fn test_pid_bounded_limited_input_response() {
        let mut pid = PidController::new();
        pid.compute_fn(compute_bounded)
            .set_point(5.0)
            .kp(1.0)
            .ki(2.0)
            .kd(0.5);
        let limited = |measurement| BoundedControlData {
            measurement,
            dt: 0.5,
            integral_min: -2.0,
            integral_max: 0.5,
            input_limits: Some((0.0, 8.0)),
        };

        // 20 reads as 8.
        let (error, integral, derivative) = compute_bounded(&mut pid, limited(20.0));
        assert!(value_close(-3.0, error));
        assert!(value_close(-1.5, integral));
        assert!(value_close(-6.0, derivative));
        assert!(value_close(-9.0, pid.compute(limited(20.0))));

        // -4 reads as 0, and the integral stops at its upper bound.
        let (error, integral, derivative) = compute_bounded(&mut pid, limited(-4.0));
        assert!(value_close(5.0, error));
        assert!(value_close(0.5, integral));
        assert!(value_close(16.0, derivative));
        assert!(value_close(14.0, pid.compute(limited(-4.0))));

        let (error, integral, derivative) = compute_bounded(&mut pid, limited(5.0));
        assert!(value_close(0.0, error));
        assert!(value_close(0.5, integral));
        assert!(value_close(-10.0, derivative));
        assert!(value_close(-4.0, pid.compute(limited(5.0))));
    }
}
