//! Numeric input validation shared by the workout constructors.

use crate::error::{Result, TrailogError};

/// Require a finite number strictly greater than zero.
pub fn require_positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TrailogError::InvalidMetric {
            field,
            value,
            expected: "a finite number greater than 0",
        })
    }
}

/// Require a finite number greater than or equal to zero.
pub fn require_non_negative(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(TrailogError::InvalidMetric {
            field,
            value,
            expected: "a finite number of at least 0",
        })
    }
}

/// Require a finite number within `-limit..=limit`.
pub(crate) fn require_within(
    field: &'static str,
    value: f64,
    limit: f64,
    expected: &'static str,
) -> Result<f64> {
    if value.is_finite() && (-limit..=limit).contains(&value) {
        Ok(value)
    } else {
        Err(TrailogError::InvalidMetric {
            field,
            value,
            expected,
        })
    }
}
