//! Error types for GLB decoding
//!
//! All errors carry an error code for categorization plus enough context to
//! locate the failure without re-running the decode with logging enabled.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O errors
//! - **E2xxx**: container framing and JSON syntax errors
//! - **E3xxx**: schema errors (wrong kind, missing required field)
//! - **E4xxx**: unsupported features

use std::io;
use thiserror::Error;

/// Result type for GLB operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when decoding GLB files
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading the file
    ///
    /// **Error Code**: E1001
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// Container framing error
    ///
    /// **Error Code**: E2001
    ///
    /// Raised when the 12-byte header or the chunk sequence is invalid:
    /// bad magic, unsupported version, declared length not matching the
    /// buffer, a chunk overrunning the buffer, or chunks other than exactly
    /// \[JSON, BIN\] in that order. Always fatal to the whole decode.
    #[error("[E2001] invalid GLB container: {0}")]
    InvalidContainer(String),

    /// JSON chunk failed to tokenize
    ///
    /// **Error Code**: E2002
    #[error("[E2002] JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Schema error in the JSON document
    ///
    /// **Error Code**: E3001
    ///
    /// A value was present but had the wrong kind or arity for its field, a
    /// required field was missing, or a cross-field consistency rule was
    /// violated (e.g. a camera whose declared type has no matching
    /// sub-block). Fatal to the enclosing entity and therefore to the whole
    /// decode; no partial scene graph is ever returned.
    #[error("[E3001] invalid schema: {entity}: {detail}")]
    InvalidSchema {
        /// The entity (or sub-block) being built when the error occurred
        entity: &'static str,
        /// What went wrong
        detail: String,
    },

    /// Unsupported feature
    ///
    /// **Error Code**: E4001
    ///
    /// Currently only raised for multi-buffer files when resolving raw bytes
    /// for a buffer view whose `buffer` index is not 0.
    #[error("[E4001] unsupported: {0}")]
    Unsupported(String),
}

impl Error {
    /// Build a container error with the offset where framing broke down
    pub(crate) fn container_at(offset: usize, detail: impl Into<String>) -> Self {
        Error::InvalidContainer(format!("{} (at byte offset {})", detail.into(), offset))
    }

    /// Build a schema error for an entity
    pub(crate) fn schema(entity: &'static str, detail: impl Into<String>) -> Self {
        Error::InvalidSchema {
            entity,
            detail: detail.into(),
        }
    }

    /// Build a schema error for a missing required field
    pub(crate) fn missing(entity: &'static str, field: &str) -> Self {
        Error::InvalidSchema {
            entity,
            detail: format!("missing required field '{field}'"),
        }
    }
}
