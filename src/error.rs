//! Errors raised while configuring or drawing stamps

use thiserror::Error;

/// Errors that can occur when building or drawing a stamp
///
/// Every check happens before the first surface call, so a failed
/// construction or `draw` never leaves a partial shape behind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StampError {
    #[error("invalid configuration: `{parameter}` {reason}")]
    InvalidConfiguration {
        /// Name of the offending parameter
        parameter: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

impl StampError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        StampError::InvalidConfiguration {
            parameter,
            reason: reason.into(),
        }
    }

    /// Name of the parameter that failed validation
    pub fn parameter(&self) -> &'static str {
        match self {
            StampError::InvalidConfiguration { parameter, .. } => parameter,
        }
    }
}

/// Shorthand result type for stamp operations
pub type Result<T> = std::result::Result<T, StampError>;

/// Check that a value is finite and strictly positive
pub(crate) fn ensure_positive(parameter: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(StampError::invalid(parameter, format!("must be finite, got {value}")));
    }
    if value <= 0.0 {
        return Err(StampError::invalid(parameter, format!("must be > 0, got {value}")));
    }
    Ok(value)
}

/// Check that a value is finite
pub(crate) fn ensure_finite(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(StampError::invalid(parameter, format!("must be finite, got {value}")))
    }
}
