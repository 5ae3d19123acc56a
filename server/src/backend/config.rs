//! # Configuration
//!
//! Settings are read from an optional YAML file and then overridden by
//! environment variables, so a deployment can run from env alone.
//!
//! | Key | Environment variable | Default |
//! |-----|----------------------|---------|
//! | `database_url` | `DATABASE_URL` | `sqlite:salon.db` |
//! | `bind_address` | `BIND_ADDRESS` | `127.0.0.1:3000` |
//! | `cors_origin` | `CORS_ORIGIN` | `http://localhost:8080` |
//! | `log_level` | `LOG_LEVEL` | `info` |
//! | `missing_reference_policy` | `MISSING_REFERENCE_POLICY` | `skip` |
//! | `currency` | `CURRENCY` | `PLN` |
//!
//! The file path comes from `SALON_CONFIG` (default `salon.yaml`); a missing
//! file is not an error.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

pub const CONFIG_PATH_ENV: &str = "SALON_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "salon.yaml";

/// What to do with an appointment whose client or service row is gone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingReferencePolicy {
    /// Drop the record from every derived view and log a warning
    #[default]
    Skip,
    /// Fail the whole fetch
    Fail,
}

impl FromStr for MissingReferencePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "fail" => Ok(Self::Fail),
            other => Err(anyhow::anyhow!(
                "Unknown missing reference policy '{}', expected 'skip' or 'fail'",
                other
            )),
        }
    }
}

impl fmt::Display for MissingReferencePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => write!(f, "skip"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_address: String,
    pub cors_origin: String,
    pub log_level: String,
    pub missing_reference_policy: MissingReferencePolicy,
    /// Label appended to prices in the debtors report
    pub currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:salon.db".to_string(),
            bind_address: "127.0.0.1:3000".to_string(),
            cors_origin: "http://localhost:8080".to_string(),
            log_level: "info".to_string(),
            missing_reference_policy: MissingReferencePolicy::Skip,
            currency: "PLN".to_string(),
        }
    }
}

impl AppConfig {
    /// Load the file named by `SALON_CONFIG` and apply environment overrides
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Read a YAML config file, falling back to defaults when it does not exist
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Override fields from a variable lookup (the process environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("DATABASE_URL") {
            self.database_url = value;
        }
        if let Some(value) = lookup("BIND_ADDRESS") {
            self.bind_address = value;
        }
        if let Some(value) = lookup("CORS_ORIGIN") {
            self.cors_origin = value;
        }
        if let Some(value) = lookup("LOG_LEVEL") {
            self.log_level = value;
        }
        if let Some(value) = lookup("MISSING_REFERENCE_POLICY") {
            self.missing_reference_policy = value.parse()?;
        }
        if let Some(value) = lookup("CURRENCY") {
            self.currency = value;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::from_file(temp_dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("salon.yaml");
        std::fs::write(&path, "bind_address: 0.0.0.0:9000\nmissing_reference_policy: fail\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:9000");
        assert_eq!(config.missing_reference_policy, MissingReferencePolicy::Fail);
        assert_eq!(config.currency, "PLN");
        assert_eq!(config.database_url, "sqlite:salon.db");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("salon.yaml");
        std::fs::write(&path, "missing_reference_policy: sometimes\n").unwrap();

        assert!(AppConfig::from_file(&path).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("DATABASE_URL", "sqlite::memory:"),
            ("MISSING_REFERENCE_POLICY", "FAIL"),
            ("CURRENCY", "EUR"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.missing_reference_policy, MissingReferencePolicy::Fail);
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_policy_override() {
        let mut config = AppConfig::default();
        let result = config.apply_overrides(|key| {
            (key == "MISSING_REFERENCE_POLICY").then(|| "maybe".to_string())
        });
        assert!(result.is_err());
    }
}
