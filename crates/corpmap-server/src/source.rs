//! Where the directory document comes from.

use async_trait::async_trait;
use corpmap_core::{store, CorpmapError, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads the current-schema directory document.
///
/// Implementations must not cache: every call reflects the data as it is now.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Load the whole document, unmodified.
    async fn load(&self) -> Result<Value>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// Reads the document from a JSON file on every call.
#[derive(Debug, Clone)]
pub struct FileDocumentSource {
    path: PathBuf,
}

impl FileDocumentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DocumentSource for FileDocumentSource {
    async fn load(&self) -> Result<Value> {
        let path = self.path.clone();
        debug!("Reading {}", path.display());

        tokio::task::spawn_blocking(move || store::read_json_value(&path))
            .await
            .map_err(|e| CorpmapError::Io {
                message: format!("Read task failed: {}", e),
                path: Some(self.path.clone()),
                source: None,
            })?
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
