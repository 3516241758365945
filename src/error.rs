//! Error types for container construction and element access.

use thiserror::Error;

/// Result type alias for fallible container operations.
pub type Result<T> = std::result::Result<T, ContainerError>;

/// Errors reported by a [`Container`](crate::Container).
///
/// Removing an absent element or index is not an error; those operations
/// report "no change" through their return value instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// The requested initial capacity was negative, fractional, or does not fit `usize`.
    #[error("invalid capacity {0}: capacity must be a non-negative integer")]
    InvalidCapacity(String),

    /// Storage for the requested number of slots could not be allocated.
    #[error("cannot allocate storage for {0} elements")]
    AllocationFailed(usize),

    /// An index outside of the live range `0..len` was accessed.
    #[error("index {index} is out of bounds for a container of length {len}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The number of live elements at the time of the access.
        len: usize,
    },
}
