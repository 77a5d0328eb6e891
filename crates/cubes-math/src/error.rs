use thiserror::Error;

/// Rejected inputs for the fallible matrix constructors.
///
/// Every variant corresponds to an input that would otherwise produce a
/// division by zero or silently propagate NaN into the GPU.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// A scalar or vector argument is degenerate (zero length, non-finite,
    /// out of range). The payload names the offending argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The matrix has no inverse.
    #[error("matrix is singular (not invertible)")]
    Singular,
}
