//! Best-effort progress snapshot on disk.
//!
//! Loading never fails: a missing or unreadable file starts a fresh session.

use super::state::SessionState;
use std::error::Error;
use std::path::{Path, PathBuf};

/// JSON snapshot of a [`SessionState`].
#[derive(Debug, Clone)]
pub struct ProgressFile {
    path: PathBuf,
}

impl ProgressFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ProgressFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot, falling back to an empty session.
    pub fn load(&self) -> SessionState {
        match self.try_load() {
            Ok(Some(state)) => {
                log::info!("Loaded progress from {}", self.path.display());
                state
            }
            Ok(None) => {
                log::info!("No progress file at {}, starting fresh", self.path.display());
                SessionState::default()
            }
            Err(e) => {
                log::warn!("Could not load saved progress: {e}");
                SessionState::default()
            }
        }
    }

    /// Read the snapshot, `Ok(None)` when the file does not exist.
    pub fn try_load(&self) -> Result<Option<SessionState>, Box<dyn Error>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = std::fs::read_to_string(&self.path)
            .map_err(|e| format!("Error reading {}: {e}", self.path.display()))?;
        let mut deserializer = serde_json::Deserializer::from_str(&json);
        let state: SessionState = serde_path_to_error::deserialize(&mut deserializer)
            .map_err(|e| format!("Error parsing {} at '{}': {e}", self.path.display(), e.path()))?;
        Ok(Some(state))
    }

    /// Write the snapshot, creating parent directories as needed.
    pub fn save(&self, state: &SessionState) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Error creating {}: {e}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| format!("Error serializing progress: {e}"))?;
        log::debug!("Writing progress to {}", self.path.display());
        std::fs::write(&self.path, json)
            .map_err(|e| format!("Error writing progress file {}: {e}", self.path.display()))?;
        Ok(())
    }
}
