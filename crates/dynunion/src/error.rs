//! Error types for value access

use thiserror::Error;

/// Errors raised by the value accessors.
///
/// Equality, truthiness and rendering never fail; only dereferencing and
/// indexing can reject a value whose active alternative has the wrong shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The active alternative does not support the requested operation
    #[error("Invalid access: cannot {operation} a value holding {found}")]
    InvalidAccess {
        /// Operation attempted ("dereference" or "index")
        operation: &'static str,
        /// Kind name of the active alternative
        found: &'static str,
    },

    /// Sequence index past the end of the backing buffer
    #[error("Index out of bounds: index {index}, length {len}")]
    IndexOutOfBounds {
        /// Requested position
        index: usize,
        /// Length of the sequence at the time of access
        len: usize,
    },

    /// Element written into a sequence that stores another kind
    #[error("Element mismatch: {sequence} at index {index} cannot store this kind")]
    ElementMismatch {
        /// Requested position
        index: usize,
        /// Kind name of the receiving alternative
        sequence: &'static str,
    },
}

impl AccessError {
    pub(crate) fn invalid(operation: &'static str, found: &'static str) -> Self {
        tracing::debug!(operation, found, "rejected value access");
        AccessError::InvalidAccess { operation, found }
    }

    pub(crate) fn out_of_bounds(index: usize, len: usize) -> Self {
        tracing::debug!(index, len, "sequence index out of bounds");
        AccessError::IndexOutOfBounds { index, len }
    }

    pub(crate) fn element_mismatch(index: usize, sequence: &'static str) -> Self {
        tracing::debug!(index, sequence, "element kind rejected by sequence");
        AccessError::ElementMismatch { index, sequence }
    }

    /// Whether this is a shape mismatch rather than a bounds failure
    pub fn is_invalid_access(&self) -> bool {
        matches!(self, AccessError::InvalidAccess { .. })
    }
}

/// Result type alias for value access
pub type Result<T> = std::result::Result<T, AccessError>;
