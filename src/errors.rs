use thiserror::Error;

use crate::utils::side::Side;

/// Errors surfaced at the boundaries of the comparison engine. Comparing two
/// valid strings never fails; these only arise when turning untyped input
/// (bytes, JSON payloads, configuration files) into text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComparisonError {
    /// One of the inputs is not text.
    #[error("Invalid {side} input: {reason}")]
    InvalidInput {
        /// The side whose input was rejected
        side: Side,
        /// Human-readable description of what was wrong
        reason: String,
    },

    #[error("Malformed service response: {0}")]
    MalformedResponse(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
