//! Reading and writing the pipeline file.

use super::Pipeline;
use crate::error::{JobkitError, Result};
use std::path::Path;
use tracing::debug;

impl Pipeline {
    /// Load the pipeline from disk.
    ///
    /// A missing file is an empty pipeline; a file that exists but does not
    /// parse is a [`JobkitError::DataError`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no pipeline file yet, starting empty");
            return Ok(Pipeline::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            JobkitError::DataError(format!(
                "failed to read pipeline file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content).map_err(|e| match e {
            JobkitError::DataError(msg) => {
                JobkitError::DataError(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| JobkitError::DataError(format!("malformed pipeline JSON: {}", e)))
    }

    /// Serialize as pretty JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self).map_err(|e| {
            JobkitError::DataError(format!("failed to serialize pipeline: {}", e))
        })?;
        json.push('\n');
        Ok(json)
    }

    /// Atomically save the pipeline.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        crate::fs::atomic_write_file(path, &self.to_json()?)
    }
}
