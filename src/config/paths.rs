//! Path resolution for pos-client configuration and data files.
//!
//! All data is stored in `~/.pos-client/`:
//! - `config.yaml` - Backend and store configuration
//! - `pos.db` - `SQLite` database holding the offline sales queue

use std::path::PathBuf;

use crate::error::PosError;

/// Paths to pos-client configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.pos-client/`
    pub root: PathBuf,
    /// Config file: `~/.pos-client/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.pos-client/pos.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PosError> {
        let home = std::env::var("HOME")
            .map_err(|_| PosError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".pos-client")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("pos.db"),
            root,
        }
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), PosError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                PosError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}
