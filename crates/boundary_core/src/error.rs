//! Error types for boundary core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in boundary core operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A discriminant outside the agreed enum set.
    #[error("unknown discriminant: {value}")]
    UnknownDiscriminant {
        /// The raw value received.
        value: u32,
    },

    /// A buffer too small to hold even the NUL terminator.
    #[error("buffer too small: capacity {capacity}")]
    BufferTooSmall {
        /// The declared capacity.
        capacity: usize,
    },
}
