//! Error types for secret reconstruction.

use shamir_math::BigRational;
use thiserror::Error;

/// The Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Enum encapsulating all the possible errors from this library.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    /// Indicates an error from the underlying mathematical library, such as an
    /// invalid base or digit in a share value.
    #[error("{0}")]
    MathError(#[from] shamir_math::Error),

    /// Indicates that fewer shares than the threshold were provided.
    #[error("Too few shares provided: {provided} is below threshold {required}")]
    InsufficientShares {
        /// Number of shares provided.
        provided: usize,
        /// Number of shares required.
        required: usize,
    },

    /// Indicates that the threshold is not a positive integer.
    #[error("Invalid threshold: {0}, must be at least 1")]
    InvalidThreshold(usize),

    /// Indicates that two selected shares have the same x-coordinate.
    #[error("Duplicate x-coordinate: {0}")]
    DuplicateXCoordinate(u64),

    /// Indicates that the shares do not interpolate to an integer secret.
    #[error("The result is not an integer: {0}")]
    NonIntegerResult(String),

    /// Indicates that a share document is malformed.
    #[error("Invalid share document: {0}")]
    Document(String),
}

/// Helper functions to create reconstruction errors.
impl Error {
    /// Create an insufficient shares error.
    pub fn insufficient_shares(provided: usize, required: usize) -> Self {
        Self::InsufficientShares { provided, required }
    }

    /// Create a duplicate x-coordinate error.
    pub fn duplicate_x(x: u64) -> Self {
        Self::DuplicateXCoordinate(x)
    }

    /// Create a non-integer result error from the interpolated value.
    pub fn non_integer(value: &BigRational) -> Self {
        Self::NonIntegerResult(value.to_string())
    }

    /// Create a share document error.
    pub fn document<S: Into<String>>(msg: S) -> Self {
        Self::Document(msg.into())
    }
}
