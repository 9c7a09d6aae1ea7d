//! Error types for the poem indexer.
//!
//! All errors are represented by the [`IngestError`] enum. The variants follow
//! the failure classes of an ingest run: some abort the run (the index is
//! unreachable, the directory walk breaks, a bulk request cannot be delivered),
//! others only cost a single file or a single document.
//!
//! # Examples
//!
//! ```
//! use poem_indexer::error::{IngestError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(IngestError::invalid_config("workers must be greater than zero"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for indexing runs.
#[derive(Error, Debug)]
pub enum IngestError {
    /// I/O errors (file reads, thread spawning, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The search service could not be reached or answered the ping with an error.
    #[error("Connectivity error: {0}")]
    Connectivity(String),

    /// A directory entry could not be read during traversal.
    #[error("Walk error: {0}")]
    Walk(String),

    /// A single input file could not be read or decoded.
    #[error("Decode error in {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    /// A bulk request could not be delivered or its response was unusable.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The index rejected an individual document.
    #[error("Document rejected: {0}")]
    Rejected(String),

    /// Invalid configuration values.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The run was interrupted before all input was processed.
    #[error("Operation cancelled: {0}")]
    Cancelled(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with IngestError.
pub type Result<T> = std::result::Result<T, IngestError>;

impl IngestError {
    /// Create a new connectivity error.
    pub fn connectivity<S: Into<String>>(msg: S) -> Self {
        IngestError::Connectivity(msg.into())
    }

    /// Create a new walk error.
    pub fn walk<S: Into<String>>(msg: S) -> Self {
        IngestError::Walk(msg.into())
    }

    /// Create a new decode error for the given file.
    pub fn decode<P: Into<PathBuf>, S: Into<String>>(path: P, msg: S) -> Self {
        IngestError::Decode {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a new transport error.
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        IngestError::Transport(msg.into())
    }

    /// Create a new document rejection error.
    pub fn rejected<S: Into<String>>(msg: S) -> Self {
        IngestError::Rejected(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        IngestError::Config(msg.into())
    }

    /// Create a new cancelled error.
    pub fn cancelled<S: Into<String>>(msg: S) -> Self {
        IngestError::Cancelled(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        IngestError::Other(msg.into())
    }

    /// Whether this error must abort the whole run.
    ///
    /// Decode failures and per-document rejections are isolated to one file or
    /// one document; everything else stops the run.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            IngestError::Decode { .. } | IngestError::Rejected(_) | IngestError::Json(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = IngestError::connectivity("connection refused");
        assert_eq!(error.to_string(), "Connectivity error: connection refused");

        let error = IngestError::transport("broken pipe");
        assert_eq!(error.to_string(), "Transport error: broken pipe");

        let error = IngestError::decode("poems/tang.json", "expected value at line 1");
        assert_eq!(
            error.to_string(),
            "Decode error in poems/tang.json: expected value at line 1"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let ingest_error = IngestError::from(io_error);

        match ingest_error {
            IngestError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_fatal_classification() {
        assert!(IngestError::connectivity("down").is_fatal());
        assert!(IngestError::walk("permission denied").is_fatal());
        assert!(IngestError::transport("reset").is_fatal());
        assert!(IngestError::cancelled("SIGINT").is_fatal());

        assert!(!IngestError::decode("a.json", "bad").is_fatal());
        assert!(!IngestError::rejected("mapper_parsing_exception").is_fatal());
    }
}
