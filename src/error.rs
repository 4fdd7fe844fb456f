//! Error types for the toy-star solver
//!
//! Configuration problems are caught before any stepping begins. Frame
//! access and the optional divergence guard are the only runtime failures.

use thiserror::Error;

/// Errors surfaced by the library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A scenario value is outside the range the scheme accepts
    #[error("invalid configuration: `{field}` {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// Frame buffer read past its end
    #[error("frame index {index} out of range (buffer holds {len} frames)")]
    FrameOutOfRange { index: usize, len: usize },

    /// Density or velocity became non-finite (only when the guard is enabled)
    #[error("solution diverged at step {step} (t = {t})")]
    Diverged { step: usize, t: f64 },
}

/// Result alias used across the library
pub type SimResult<T> = Result<T, SimError>;

/// Shorthand for building an [`SimError::InvalidConfig`]
pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> SimError {
    SimError::InvalidConfig {
        field,
        reason: reason.into(),
    }
}
