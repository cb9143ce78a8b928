//! Configuration settings for pos-client.
//!
//! Settings are loaded from `~/.pos-client/config.yaml`. Every field is
//! optional; missing values fall back to defaults.

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::PosError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Remote backend settings.
    pub backend: BackendConfig,
    /// Store identity.
    pub store: StoreConfig,
}

/// Remote backend settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL, e.g. `http://localhost:8000`.
    #[serde(default = "default_backend_url")]
    pub url: String,
    /// Timeout for posting a sale.
    #[serde(default = "default_sale_timeout")]
    pub sale_timeout_secs: u64,
    /// Timeout for a barcode lookup.
    #[serde(default = "default_lookup_timeout")]
    pub lookup_timeout_secs: u64,
}

/// Store identity settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StoreConfig {
    /// Store identifier, the prefix of every client transaction id.
    #[serde(default = "default_store_id")]
    pub id: String,
    /// Payment status recorded on new sales.
    #[serde(default = "default_payment_status")]
    pub payment_status: String,
}

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

const fn default_sale_timeout() -> u64 {
    5
}

const fn default_lookup_timeout() -> u64 {
    3
}

fn default_store_id() -> String {
    "STORE-1".to_string()
}

fn default_payment_status() -> String {
    "paid".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            sale_timeout_secs: default_sale_timeout(),
            lookup_timeout_secs: default_lookup_timeout(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            id: default_store_id(),
            payment_status: default_payment_status(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, PosError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PosError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PosError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            PosError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), PosError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), PosError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| PosError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            PosError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.backend.url, "http://localhost:8000");
        assert_eq!(config.backend.sale_timeout_secs, 5);
        assert_eq!(config.backend.lookup_timeout_secs, 3);
        assert_eq!(config.store.id, "STORE-1");
        assert_eq!(config.store.payment_status, "paid");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.backend.url = "http://pos-backend.lan:9000".to_string();
        config.store.id = "S7".to_string();

        config.save_to_path(&config_path).unwrap();
        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let partial_yaml = r"
store:
  id: S1
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.store.id, "S1");
        assert_eq!(config.store.payment_status, "paid");
        assert_eq!(config.backend.sale_timeout_secs, 5);
    }

    #[test]
    fn test_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "backend: [not, a, map]").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, PosError::Config(_)));
    }
}
