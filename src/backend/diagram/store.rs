/**
 * Diagram Store
 *
 * This module persists the diagram document: a single JSON object stored
 * wholesale in one file. A missing file reads as the empty object, so a
 * fresh deployment serves `{}` without any setup step.
 *
 * # Error Handling
 *
 * I/O and parse failures are surfaced to the caller as `BackendError` and
 * are not retried. A store failure is never fatal to the process.
 */

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::backend::error::BackendError;

/// File-backed store for the diagram document
///
/// Cloneable handle; all clones point at the same file. The document is
/// read and replaced in its entirety — there is no partial update.
#[derive(Debug, Clone)]
pub struct DiagramStore {
    path: Arc<PathBuf>,
}

impl DiagramStore {
    /// Create a store backed by the given file path
    ///
    /// The file is not created until the first `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted diagram document
    ///
    /// # Returns
    ///
    /// The stored JSON object, or an empty object if the file does not
    /// exist yet.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::StoreError` if the file cannot be read, or a
    /// serialization error if its contents are not valid JSON.
    pub async fn load(&self) -> Result<Value, BackendError> {
        let bytes = match tokio::fs::read(self.path.as_ref()).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    "[Diagram] No diagram file at {}, serving empty document",
                    self.path.display()
                );
                return Ok(Value::Object(Map::new()));
            }
            Err(e) => {
                return Err(BackendError::store(format!(
                    "Failed to read diagram file {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        let document = serde_json::from_slice(&bytes)?;
        Ok(document)
    }

    /// Overwrite the persisted diagram document
    ///
    /// The document is written pretty-printed so the file stays readable
    /// and diffable.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::StoreError` if the file cannot be written.
    pub async fn save(&self, document: &Value) -> Result<(), BackendError> {
        let contents = serde_json::to_string_pretty(document)?;
        tokio::fs::write(self.path.as_ref(), contents)
            .await
            .map_err(|e| {
                BackendError::store(format!(
                    "Failed to write diagram file {}: {}",
                    self.path.display(),
                    e
                ))
            })?;

        tracing::debug!("[Diagram] Saved diagram to {}", self.path.display());
        Ok(())
    }
}
