//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Input buffer is malformed (propagated from buffer validation).
    #[error(transparent)]
    InvalidInput(#[from] grayify_core::Error),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
