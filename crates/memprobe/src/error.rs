//! Error types.
//!
//! The traversal itself cannot fail; errors only arise at its edges, when
//! writing the trace to a caller-supplied sink, serializing a breakdown,
//! or resolving configuration from the environment.

use std::io;

use thiserror::Error;

/// Failure surfaced by [`measure_with`](crate::measure_with) or by
/// rendering a [`Measurement`](crate::Measurement).
#[derive(Debug, Error)]
pub enum MeasureError {
    #[error("failed to write trace to output sink: {0}")]
    Sink(#[from] io::Error),

    #[error("failed to serialize breakdown: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A malformed configuration variable.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var}: expected `1`, `0`, `true` or `false`, found `{value}`")]
    InvalidFlag { var: &'static str, value: String },

    #[error("{var}: expected an unsigned integer, found `{value}`")]
    InvalidLimit { var: &'static str, value: String },

    #[error("{var}: expected `tree` or `text`, found `{value}`")]
    InvalidFormat { var: &'static str, value: String },
}
