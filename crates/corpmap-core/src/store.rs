//! JSON file persistence.
//!
//! Reads are plain blocking reads. Writes go through a temp file beside the
//! target which is synced and then renamed over it, so a failed run never
//! leaves a half-written directory file behind.

use crate::config::PathsConfig;
use crate::{CorpmapError, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, warn};

/// Read and parse a JSON file into `T`.
///
/// Fails with `FileNotFound` when the file is absent, `Json` when it is not
/// valid JSON and `Schema` when it is valid JSON of the wrong shape.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = read_to_string(path)?;
    let data = serde_json::from_str(&contents)
        .map_err(|e| CorpmapError::json_with_path(e, path))?;
    debug!("Loaded {}", path.display());
    Ok(data)
}

/// Read a JSON file without imposing a schema. Object key order is kept.
pub fn read_json_value(path: &Path) -> Result<serde_json::Value> {
    read_json(path)
}

/// Read a whole file as UTF-8.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| CorpmapError::io_with_path(e, path))
}

/// Path of the backup copy kept by [`write_json_atomic`].
pub fn backup_path(path: &Path) -> PathBuf {
    path.with_extension(PathsConfig::BACKUP_EXTENSION)
}

/// Write data to a JSON file atomically, replacing whatever was there.
///
/// 1. Serializes pretty-printed JSON and validates it by re-parsing
/// 2. Writes a temp file with a PID suffix and syncs it to disk
/// 3. Optionally copies the current target to `<name>.json.bak`
/// 4. Renames the temp file over the target
pub fn write_json_atomic<T: Serialize>(path: &Path, data: &T, keep_backup: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| CorpmapError::io_with_path(e, parent))?;
        }
    }

    let temp_path = path.with_extension(format!("json.{}.tmp", process::id()));

    let mut serialized = serde_json::to_string_pretty(data).map_err(|e| CorpmapError::Json {
        message: format!("Failed to serialize data: {}", e),
        source: Some(e),
    })?;
    serialized.push('\n');

    serde_json::from_str::<serde_json::Value>(&serialized).map_err(|e| CorpmapError::Json {
        message: format!("JSON validation failed: {}", e),
        source: Some(e),
    })?;

    if let Err(e) = write_synced(&temp_path, serialized.as_bytes()) {
        let _ = fs::remove_file(&temp_path);
        return Err(CorpmapError::io_with_path(e, &temp_path));
    }

    if keep_backup && path.exists() {
        let backup = backup_path(path);
        if let Err(e) = fs::copy(path, &backup) {
            // Not fatal; the new data still gets written.
            warn!("Failed to create backup {}: {}", backup.display(), e);
        } else {
            debug!("Created backup: {}", backup.display());
        }
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(CorpmapError::Io {
            message: format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                path.display()
            ),
            path: Some(path.to_path_buf()),
            source: Some(e),
        });
    }

    debug!("Atomically wrote {}", path.display());
    Ok(())
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(bytes)?;
    file.flush()?;
    file.sync_all()
}
