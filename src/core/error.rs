// ============================================================================
// observable-collections - Errors
// The failure modes a base container can report, surfaced unchanged
// ============================================================================

use thiserror::Error;

/// Errors raised by base containers, cursors and views.
///
/// The wrappers never invent their own failures: every variant here
/// originates from a base container or from a view that is removal-only
/// by construction. An operation that returns `Err` has not notified.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// An index was outside the valid range for the container.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A range was given with its start after its end.
    #[error("invalid range: from ({from}) > to ({to})")]
    InvalidRange { from: usize, to: usize },

    /// A cursor operation was called without a current element.
    #[error("illegal state: {0}")]
    IllegalState(&'static str),

    /// The container does not support the operation.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

impl CollectionError {
    pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(CollectionError::IndexOutOfBounds { index, len })
        }
    }

    pub(crate) fn check_position(index: usize, len: usize) -> Result<()> {
        if index <= len {
            Ok(())
        } else {
            Err(CollectionError::IndexOutOfBounds { index, len })
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CollectionError>;
