//! Single-blob JSON persistence.
//!
//! The whole [`AppState`] lives in one JSON file, read fully on open and
//! rewritten fully on save. Writes go through a sibling temp file and a
//! rename so a crash mid-save never leaves a truncated blob.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::AppState;

/// Handle to the on-disk state blob.
#[derive(Debug, Clone)]
pub struct BlobStore {
    path: PathBuf,
}

impl BlobStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Blob at the XDG default location,
    /// `~/.local/share/bingelog/state.json`.
    pub fn at_default_path() -> Self {
        Self::new(Config::blob_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted state; a missing blob is a fresh install.
    ///
    /// Unknown fields are ignored and missing fields take their defaults,
    /// so blobs from older and newer versions both load.
    pub fn load(&self) -> Result<AppState> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no state blob, starting fresh");
            return Ok(AppState::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        let state = serde_json::from_str(&raw)
            .map_err(|e| Error::Storage(format!("corrupt state blob {:?}: {}", self.path, e)))?;
        debug!(path = %self.path.display(), bytes = raw.len(), "loaded state blob");
        Ok(state)
    }

    /// Replace the blob with the given state.
    pub fn save(&self, state: &AppState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(state)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &raw)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), bytes = raw.len(), "saved state blob");
        Ok(())
    }

    /// Delete the blob, if present.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
