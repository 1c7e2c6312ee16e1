//! Error types for curve operations.
//!
//! Precondition violations (bad instrument shape, non-extending maturity)
//! and calibration non-convergence are distinct variants: the former means
//! the input was rejected before any numerics ran, the latter that the
//! solver gave up. Either way the curve is left unchanged.

use pwflat_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone)]
pub enum CurveError {
    /// Knot times are not strictly increasing.
    #[error("Non-monotonic knots at index {index}: {prev:.4} >= {current:.4}")]
    NonMonotonicKnots {
        /// Index where monotonicity violation occurred.
        index: usize,
        /// Previous knot time.
        prev: f64,
        /// Current knot time.
        current: f64,
    },

    /// Instrument maturity does not extend the curve.
    #[error("Maturity {maturity:.4} does not extend the curve (last knot {last:.4})")]
    MaturityNotExtending {
        /// The offending maturity.
        maturity: f64,
        /// Current last knot of the curve.
        last: f64,
    },

    /// Invalid calibration instrument.
    #[error("Invalid instrument: {reason}")]
    InvalidInstrument {
        /// Description of what's wrong with the instrument.
        reason: String,
    },

    /// Invalid value (NaN, Inf, or domain error).
    #[error("Invalid value: {reason}")]
    InvalidValue {
        /// Description of why value is invalid.
        reason: String,
    },

    /// Parallel time/amount arrays have different lengths.
    #[error("Length mismatch: {times} times vs {amounts} amounts")]
    LengthMismatch {
        /// Number of payment times.
        times: usize,
        /// Number of cash amounts.
        amounts: usize,
    },

    /// Curve calibration failed to converge.
    #[error(
        "Calibration failed after {iterations} iterations (residual: {residual:.2e}): {message}"
    )]
    CalibrationFailure {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
        /// Description of failure.
        message: String,
    },
}

impl CurveError {
    /// Creates a non-monotonic knots error.
    #[must_use]
    pub fn non_monotonic_knots(index: usize, prev: f64, current: f64) -> Self {
        Self::NonMonotonicKnots {
            index,
            prev,
            current,
        }
    }

    /// Creates a maturity-not-extending error.
    #[must_use]
    pub fn maturity_not_extending(maturity: f64, last: f64) -> Self {
        Self::MaturityNotExtending { maturity, last }
    }

    /// Creates an invalid instrument error.
    #[must_use]
    pub fn invalid_instrument(reason: impl Into<String>) -> Self {
        Self::InvalidInstrument {
            reason: reason.into(),
        }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    /// Creates a length mismatch error.
    #[must_use]
    pub fn length_mismatch(times: usize, amounts: usize) -> Self {
        Self::LengthMismatch { times, amounts }
    }

    /// Creates a calibration failure error.
    #[must_use]
    pub fn calibration_failed(iterations: u32, residual: f64, message: impl Into<String>) -> Self {
        Self::CalibrationFailure {
            iterations,
            residual,
            message: message.into(),
        }
    }

    /// Maps a solver error into a calibration failure.
    ///
    /// Numeric degeneracy (a zero Jacobian mid-iteration) is treated as
    /// non-convergence, not a crash.
    #[must_use]
    pub fn from_solver(err: &MathError) -> Self {
        match *err {
            MathError::ConvergenceFailed {
                iterations,
                residual,
            } => Self::calibration_failed(iterations, residual, "solver did not converge"),
            MathError::DerivativeNearZero { value } => {
                Self::calibration_failed(0, value, "degenerate duration (zero Jacobian)")
            }
            MathError::InvalidInput { ref reason } => {
                Self::calibration_failed(0, f64::NAN, reason.clone())
            }
        }
    }

    /// Returns true for precondition violations, false for numeric failures.
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        !matches!(self, Self::CalibrationFailure { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_monotonic_display() {
        let err = CurveError::non_monotonic_knots(3, 2.0, 1.5);
        let msg = format!("{}", err);
        assert!(msg.contains("Non-monotonic"));
        assert!(msg.contains("index 3"));
    }

    #[test]
    fn test_maturity_not_extending_display() {
        let err = CurveError::maturity_not_extending(1.0, 2.0);
        let msg = format!("{}", err);
        assert!(msg.contains("does not extend"));
    }

    #[test]
    fn test_calibration_failure_display() {
        let err = CurveError::calibration_failed(100, 1e-6, "solver did not converge");
        let msg = format!("{}", err);
        assert!(msg.contains("100 iterations"));
        assert!(msg.contains("solver did not converge"));
    }

    #[test]
    fn test_from_solver_degenerate_jacobian() {
        let err = CurveError::from_solver(&MathError::derivative_near_zero(0.0));
        assert!(matches!(err, CurveError::CalibrationFailure { .. }));
        assert!(!err.is_precondition());
    }

    #[test]
    fn test_precondition_classification() {
        assert!(CurveError::invalid_instrument("empty").is_precondition());
        assert!(!CurveError::calibration_failed(1, 0.0, "x").is_precondition());
    }
}
