//! Text and JSON file access.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::error::StorageError;

/// Reads a file as UTF-8 text.
pub fn try_read_text(path: impl AsRef<Path>) -> Result<String, StorageError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| StorageError::io(path.display().to_string(), e))
}

/// Reads and parses a JSON file.
pub fn try_read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, StorageError> {
    let path = path.as_ref();
    let content = try_read_text(path)?;
    serde_json::from_str(&content).map_err(|source| StorageError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// Writes `content` to `filename`, joined onto `output_dir` when given.
///
/// The output directory and every ancestor of the final path are created if
/// missing. An existing file is overwritten.
pub fn try_write_text(
    content: &str,
    filename: impl AsRef<Path>,
    output_dir: Option<&Path>,
) -> Result<PathBuf, StorageError> {
    let path = match output_dir {
        Some(dir) => {
            fs::create_dir_all(dir).map_err(|e| StorageError::io(dir.display().to_string(), e))?;
            dir.join(filename)
        }
        None => filename.as_ref().to_path_buf(),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| StorageError::io(parent.display().to_string(), e))?;
        }
    }

    fs::write(&path, content).map_err(|e| StorageError::io(path.display().to_string(), e))?;
    Ok(path)
}

/// Reads a file as UTF-8 text, logging and returning `None` on failure.
pub fn read_text(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    match try_read_text(path) {
        Ok(content) => Some(content),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Error reading file");
            None
        }
    }
}

/// Reads a JSON file, logging and returning `None` on failure.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Option<T> {
    let path = path.as_ref();
    match try_read_json(path) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Error reading JSON file");
            None
        }
    }
}

/// Writes a text file, logging the outcome. Returns the written path on success.
pub fn write_text(
    content: &str,
    filename: impl AsRef<Path>,
    output_dir: Option<&Path>,
) -> Option<PathBuf> {
    let filename = filename.as_ref();
    match try_write_text(content, filename, output_dir) {
        Ok(path) => {
            info!(path = %path.display(), "Content saved");
            Some(path)
        }
        Err(e) => {
            warn!(file = %filename.display(), error = %e, "Error writing file");
            None
        }
    }
}
