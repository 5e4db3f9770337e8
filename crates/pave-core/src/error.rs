//! Parameter validation errors.
//!
//! Every variant describes a configuration mistake caught before the first
//! event is processed.  Nothing that happens during a run is an error: a run
//! that cannot finish is reported as exhausted in its result.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("fleet size must be at least 1")]
    ZeroFleet,

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("target quantity must not be negative, got {0}")]
    NegativeTarget(f64),

    #[error("{which} speed range is inverted: min {min} > max {max}")]
    InvertedSpeedRange { which: &'static str, min: f64, max: f64 },

    #[error("initial queue threshold {threshold} is outside 1..={fleet}")]
    QueueThresholdOutOfRange { threshold: u32, fleet: u32 },
}

/// Shorthand result type for parameter handling.
pub type ParamResult<T> = Result<T, ParamError>;
