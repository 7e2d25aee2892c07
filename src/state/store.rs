//! State file I/O

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ProviderError, Result};

use super::ResourceData;

/// Reads and writes one resource's state file
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load state from disk.
    /// Returns `None` if the file doesn't exist, errors on corrupt JSON.
    pub fn load(&self) -> Result<Option<ResourceData>> {
        if !self.path.exists() {
            debug!("No state file at {}", self.path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            ProviderError::State(format!(
                "Failed to read state file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map(Some).map_err(|e| {
            ProviderError::State(format!(
                "Failed to parse state file {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Save state to disk.
    /// Uses atomic write (tmp file + rename); the file may hold secrets so it
    /// is created with 0600 permissions on Unix.
    pub fn save(&self, data: &ResourceData) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                ProviderError::State(format!(
                    "Failed to create state directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(data)
            .map_err(|e| ProviderError::State(format!("Failed to serialize state: {}", e)))?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, &json).map_err(|e| {
            ProviderError::State(format!(
                "Failed to write temp state file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&tmp_path, permissions).map_err(|e| {
                ProviderError::State(format!("Failed to set permissions on state file: {}", e))
            })?;
        }

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            ProviderError::State(format!(
                "Failed to rename temp state file to {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!("Wrote state to {}", self.path.display());
        Ok(())
    }

    /// Remove the state file (entity no longer exists)
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                ProviderError::State(format!(
                    "Failed to remove state file {}: {}",
                    self.path.display(),
                    e
                ))
            })?;
            debug!("Removed state file {}", self.path.display());
        }
        Ok(())
    }
}
