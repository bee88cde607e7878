//! Runtime settings for the item economy
//!
//! Settings come from an optional JSON file. Every field has a default, so a
//! partial file (or no file at all) is valid.

use anyhow::{Context, Result};
use error::EconomyError;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};

/// Environment variable naming the settings file
pub const CONFIG_ENV: &str = "ECONOMY_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    /// Slots in each character's inventory
    pub inventory_capacity: usize,
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
    pub character_name: String,
    pub character_description: String,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            inventory_capacity: 30,
            log_filter: "info".to_string(),
            character_name: "johny".to_string(),
            character_description: "apple seed collector".to_string(),
        }
    }
}

impl EconomyConfig {
    /// Reads and validates settings from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Uses the file named by `ECONOMY_CONFIG`, or defaults when it is unset
    pub fn load() -> Result<Self> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), EconomyError> {
        if self.inventory_capacity == 0 {
            return Err(EconomyError::InvalidConfig(
                "inventory_capacity must be at least 1".to_string(),
            ));
        }
        if self.character_name.trim().is_empty() {
            return Err(EconomyError::InvalidConfig(
                "character_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let file = write_config(r#"{ "inventory_capacity": 12 }"#);
        let config = EconomyConfig::from_file(file.path()).unwrap();
        assert_eq!(config.inventory_capacity, 12);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.character_name, "johny");
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let file = write_config(r#"{ "inventory_capacity": 0 }"#);
        let err = EconomyConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("inventory_capacity"));
    }

    #[test]
    fn malformed_json_names_the_file() {
        let file = write_config("{ not json");
        let err = EconomyConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = EconomyConfig::from_file("/nonexistent/economy.json").unwrap_err();
        assert!(err.to_string().starts_with("Failed to read config file"));
    }
}
