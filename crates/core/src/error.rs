//! Error types for permpack.

use thiserror::Error;

/// Result type alias for permpack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or driving an enumerator.
///
/// Exhausting the rotation or permutation space is not an error; advance
/// operations report it as `false`. Counter overflow is reported as `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid box geometry provided.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Invalid container bound provided.
    #[error("Invalid boundary: {0}")]
    InvalidBoundary(String),

    /// A removal request did not match the current slot sequence.
    #[error("Invalid removal: {0}")]
    InvalidRemoval(String),

    /// A restored state is inconsistent with the enumerator it was applied to.
    #[error("Invalid state: {0}")]
    InvalidState(String),
}
