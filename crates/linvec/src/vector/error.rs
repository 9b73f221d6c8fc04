use crate::scalar::Mode;

/// Errors surfaced by vector construction, arithmetic and geometry.
///
/// Nothing here is transient or worth retrying.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum VectorError {
    /// A coordinate has no representation in the requested mode.
    #[error("cannot convert coordinate {index} ({value:?}) to {mode}")]
    Conversion {
        index: usize,
        value: String,
        mode: Mode,
    },
    /// Binary operation on vectors of different dimensions.
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
    /// Operation defined for one fixed dimension only (cross product: 3).
    #[error("operation requires dimension {expected}, got {found}")]
    Dimension { expected: usize, found: usize },
    /// A scalar factor has no representation in the vector's mode.
    #[error("scalar {value:?} cannot be coerced to {mode}")]
    TypeMismatch { value: String, mode: Mode },
    #[error("cannot normalize the zero vector")]
    ZeroVector,
    #[error("angle undefined for the zero vector")]
    ZeroVectorAngle,
    #[error("cannot project onto the zero vector")]
    ZeroBasis,
    /// An exact intermediate left the range of `Decimal` (about ±7.9e28).
    #[error("{op} overflowed the exact decimal range")]
    Overflow { op: &'static str },
    /// Positional or symbolic access outside the vector.
    #[error("index {index} out of range for dimension {dimension}")]
    Index { index: String, dimension: usize },
}

/// Result alias for vector operations.
pub type Result<T> = std::result::Result<T, VectorError>;
