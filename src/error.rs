use thiserror::Error;

/// Errors raised by the fallible vector operations and the random source.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum VectorError {
    /// The operation divides by the length of a vector that has none.
    #[error("cannot {operation}: vector has zero length")]
    ZeroLength {
        /// Name of the operation that hit the zero vector
        operation: &'static str,
    },

    /// A random range that is empty or has a non-finite bound.
    #[error("invalid range [{min}, {max}]")]
    InvalidRange {
        min: f32,
        max: f32,
    },
}
