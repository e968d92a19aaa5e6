use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
pub enum KdIndexError {
    /// A point or query whose dimensionality disagrees with the tree's.
    #[error("Dimension mismatch: expected {expected} coordinates, got {actual}.")]
    DimensionMismatch {
        /// The dimensionality the tree or builder was created with.
        expected: usize,
        /// The dimensionality of the offending point.
        actual: usize,
    },

    /// A point with no coordinates at all.
    #[error("Points must have at least one coordinate.")]
    ZeroDimension,
}

pub type Result<T> = std::result::Result<T, KdIndexError>;
