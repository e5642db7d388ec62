//! Error types for shelfscope.
//!
//! Two layers, mirroring how the library is consumed:
//!
//! - [`ViewStateError`]: the `InvalidViewState` kind. Raised when a caller
//!   hands the table view boundary a sort field, sort direction or filter
//!   value that does not exist. Always a caller bug; never retried.
//! - [`Error`]: everything that can fail at the edges of the crate
//!   (reading snapshots and configuration files).
//!
//! The engines themselves are total: empty record sets, filters that match
//! nothing, and ties all produce defined results rather than errors.
//!
//! # Error Codes
//!
//! - E001-E009: I/O errors
//! - E010-E019: snapshot parse errors
//! - E020-E029: configuration errors
//! - E050-E059: invalid view state

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Structured error code for documentation and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// I/O error - generic
    pub const IO_GENERIC: ErrorCode = ErrorCode("E009");

    /// Snapshot is not valid JSON or has the wrong shape
    pub const SNAPSHOT_SYNTAX: ErrorCode = ErrorCode("E010");
    /// Snapshot contains two records with the same id
    pub const SNAPSHOT_DUPLICATE_ID: ErrorCode = ErrorCode("E011");

    /// Config error - invalid TOML or value
    pub const CONFIG_INVALID: ErrorCode = ErrorCode("E020");

    /// Unknown sort field
    pub const VIEW_SORT_FIELD: ErrorCode = ErrorCode("E050");
    /// Unknown sort direction
    pub const VIEW_SORT_DIRECTION: ErrorCode = ErrorCode("E051");
    /// Unknown status filter value
    pub const VIEW_STATUS_FILTER: ErrorCode = ErrorCode("E052");
    /// Unknown category filter value
    pub const VIEW_CATEGORY_FILTER: ErrorCode = ErrorCode("E053");

    /// Get the error code string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// A view state value was rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewStateError {
    #[error("invalid view state: unknown sort field '{0}' (expected one of: {fields})", fields = crate::view::SortField::names().join(", "))]
    UnknownSortField(String),

    #[error("invalid view state: unknown sort direction '{0}' (expected 'asc' or 'desc')")]
    UnknownSortDirection(String),

    #[error("invalid view state: unknown status filter '{0}' (expected all or one of: {statuses})", statuses = status_names())]
    UnknownStatusFilter(String),

    #[error("invalid view state: category filter '{0}' does not name a category in the catalog")]
    UnknownCategoryFilter(String),
}

fn status_names() -> String {
    crate::catalog::Status::all()
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ViewStateError {
    /// Stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownSortField(_) => ErrorCode::VIEW_SORT_FIELD,
            Self::UnknownSortDirection(_) => ErrorCode::VIEW_SORT_DIRECTION,
            Self::UnknownStatusFilter(_) => ErrorCode::VIEW_STATUS_FILTER,
            Self::UnknownCategoryFilter(_) => ErrorCode::VIEW_CATEGORY_FILTER,
        }
    }

    /// View state errors always come from the caller's input.
    pub fn is_user_fixable(&self) -> bool {
        true
    }
}

/// Main error type for shelfscope operations
#[derive(Debug, Error)]
pub enum Error {
    /// The caller supplied an invalid view state
    #[error(transparent)]
    ViewState(#[from] ViewStateError),

    /// File system related errors
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot parse errors
    #[error("invalid snapshot {}: {source}", path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two records share an id
    #[error("duplicate product id '{id}' in snapshot")]
    DuplicateProductId { id: String },

    /// Configuration file errors
    #[error("invalid configuration {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// JSON errors outside of snapshot loading
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error with path context
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::ViewState(e) => e.code(),
            Self::Io { .. } => ErrorCode::IO_GENERIC,
            Self::Snapshot { .. } | Self::Json(_) => ErrorCode::SNAPSHOT_SYNTAX,
            Self::DuplicateProductId { .. } => ErrorCode::SNAPSHOT_DUPLICATE_ID,
            Self::Config { .. } => ErrorCode::CONFIG_INVALID,
        }
    }

    /// Whether the user can fix this by changing their input or files.
    pub fn is_user_fixable(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

/// Result type alias for shelfscope operations
pub type Result<T> = std::result::Result<T, Error>;
