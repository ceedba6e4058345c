//! The directory service: one read-only operation over an injected source.

use crate::source::DocumentSource;
use corpmap_core::Result;
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct DirectoryService {
    source: Arc<dyn DocumentSource>,
}

impl DirectoryService {
    pub fn new(source: Arc<dyn DocumentSource>) -> Self {
        Self { source }
    }

    /// Return the whole directory document exactly as stored.
    ///
    /// No filtering, sorting or pagination.
    pub async fn list_companies(&self) -> Result<Value> {
        self.source.load().await
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }
}
