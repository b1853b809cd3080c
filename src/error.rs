//! Error types for the pagination engine

use thiserror::Error;

/// All errors the pagination engine can produce
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaginationError {
    /// No page geometry is registered under this name
    #[error("unknown page geometry `{name}`")]
    NotFound { name: String },

    /// A geometry, or the capacity left once header/footer are reserved,
    /// does not describe a usable content area
    #[error("invalid page geometry `{name}`: {reason}")]
    InvalidGeometry { name: String, reason: String },

    /// The document model refused to insert a block at the caret
    #[error("block insertion rejected: {reason}")]
    InsertionRejected { reason: String },
}

impl PaginationError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn invalid_geometry(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn insertion_rejected(reason: impl Into<String>) -> Self {
        Self::InsertionRejected {
            reason: reason.into(),
        }
    }

    /// Rejected insertions leave pagination state untouched and may be reported
    /// to the user; every other kind is a caller bug.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InsertionRejected { .. })
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, PaginationError>;
