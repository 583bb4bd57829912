//! Failure modes of vector operations

use thiserror::Error;

/// Errors reported by vector operations
///
/// Operations either fully succeed or fail before producing any value, so
/// there is never a partial result to clean up after one of these.
///
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// Two operands of an elementwise or scalar product have unequal lengths
    #[error("dimension mismatch: expected {expected} components, got {actual}")]
    Dimension {
        /// Dimension of the left-hand (receiving) vector
        expected: usize,

        /// Length of the offending operand
        actual: usize,
    },

    /// The operation is not defined for this combination of operands
    #[error("unsupported operation: {operation}")]
    UnsupportedOperation {
        /// Human-readable name of the rejected operation
        operation: &'static str,
    },

    /// The operation needs a direction, but the vector has zero magnitude
    #[error("{operation} is undefined for a vector of zero magnitude")]
    ZeroMagnitude {
        /// Name of the operation which was attempted
        operation: &'static str,
    },

    /// The magnitude is not a finite real number (e.g. space-like 4-vectors)
    #[error("{operation} is undefined for a vector whose magnitude is not finite")]
    UndefinedMagnitude {
        /// Name of the operation which was attempted
        operation: &'static str,
    },
}
//
impl VectorError {
    /// Report a dimension mismatch
    pub(crate) fn dimension(expected: usize, actual: usize) -> Self {
        tracing::debug!(expected, actual, "Rejected operands of mismatched dimension");
        Self::Dimension { expected, actual }
    }

    /// Report an operation which this vector model leaves undefined
    pub(crate) fn unsupported(operation: &'static str) -> Self {
        tracing::debug!(operation, "Rejected unsupported vector operation");
        Self::UnsupportedOperation { operation }
    }

    /// Report an operation which needs a nonzero magnitude
    pub(crate) fn zero_magnitude(operation: &'static str) -> Self {
        tracing::debug!(operation, "Rejected zero-magnitude vector");
        Self::ZeroMagnitude { operation }
    }

    /// Report an operation which needs a finite magnitude
    pub(crate) fn undefined_magnitude(operation: &'static str) -> Self {
        tracing::debug!(operation, "Rejected vector of non-finite magnitude");
        Self::UndefinedMagnitude { operation }
    }
}

/// Result type of fallible vector operations
pub type Result<T> = std::result::Result<T, VectorError>;
