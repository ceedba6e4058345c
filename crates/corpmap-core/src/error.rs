//! Error types for the company directory.
//!
//! Errors fall into three classes: I/O (missing or unreadable files), parse
//! (malformed JSON) and schema (valid JSON of the wrong shape, such as a
//! record without `coordinates`). None of them is recovered from inside the
//! library; they propagate to the binary or the HTTP handler.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for the company directory.
#[derive(Debug, Error)]
pub enum CorpmapError {
    // File system errors
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("Schema error in {path:?}: {message}")]
    Schema {
        message: String,
        path: Option<PathBuf>,
    },

    // Migration errors
    #[error("Duplicate company names in legacy data: {}", names.join(", "))]
    DuplicateNames { names: Vec<String> },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for directory operations.
pub type Result<T> = std::result::Result<T, CorpmapError>;

impl From<std::io::Error> for CorpmapError {
    fn from(err: std::io::Error) -> Self {
        CorpmapError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for CorpmapError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            CorpmapError::Schema {
                message: err.to_string(),
                path: None,
            }
        } else {
            CorpmapError::Json {
                message: err.to_string(),
                source: Some(err),
            }
        }
    }
}

impl CorpmapError {
    /// Create an IO error with path context.
    ///
    /// A `NotFound` kind becomes [`CorpmapError::FileNotFound`].
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            return CorpmapError::FileNotFound(path);
        }
        CorpmapError::Io {
            message: err.to_string(),
            path: Some(path),
            source: Some(err),
        }
    }

    /// Create a parse or schema error with path context.
    pub fn json_with_path(err: serde_json::Error, path: &Path) -> Self {
        if err.is_data() {
            CorpmapError::Schema {
                message: err.to_string(),
                path: Some(path.to_path_buf()),
            }
        } else {
            CorpmapError::Json {
                message: format!("Failed to parse {}: {}", path.display(), err),
                source: Some(err),
            }
        }
    }

    /// Whether this error means the input file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CorpmapError::FileNotFound(_))
    }

    /// Whether this error was caused by malformed JSON or a record of the wrong shape.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, CorpmapError::Json { .. } | CorpmapError::Schema { .. })
    }
}
