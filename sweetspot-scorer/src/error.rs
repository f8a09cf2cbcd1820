//! Error types raised while configuring the weighted scorer.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors returned by [`ScoreWeights::validate`](crate::ScoreWeights::validate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreWeightsError {
    /// A weight was NaN or infinite.
    #[error("score weight `{name}` must be finite")]
    NonFinite {
        /// Name of the offending weight.
        name: &'static str,
    },
    /// A weight was below zero.
    #[error("score weight `{name}` must not be negative (got {value})")]
    Negative {
        /// Name of the offending weight.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}
