//! Ledger configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Configuration for the provenance ledger.
///
/// # Examples
///
/// ```
/// use docket_ledger::LedgerConfig;
///
/// let config = LedgerConfig::default();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Directory where session documents and the master log live
    pub directory: PathBuf,

    /// File name of the append-only master log (JSONL)
    pub master_log_name: String,

    /// System version string recorded on every entry
    pub system_version: String,

    /// Human operator recorded on every entry, when known
    pub human_operator: Option<String>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("logs/provenance"),
            master_log_name: "master_provenance.jsonl".to_string(),
            system_version: format!("docket v{}", env!("CARGO_PKG_VERSION")),
            human_operator: None,
        }
    }
}

impl LedgerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, LedgerError> {
        let content = std::fs::read_to_string(path).map_err(|source| LedgerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            toml::from_str(&content).map_err(|e| LedgerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.directory.as_os_str().is_empty() {
            return Err(LedgerError::Config("directory must not be empty".into()));
        }
        if self.master_log_name.trim().is_empty() {
            return Err(LedgerError::Config(
                "master_log_name must not be empty".into(),
            ));
        }
        if self.system_version.trim().is_empty() {
            return Err(LedgerError::Config(
                "system_version must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(LedgerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_master_log_name_rejected() {
        let config = LedgerConfig {
            master_log_name: "  ".to_string(),
            ..LedgerConfig::default()
        };
        assert!(matches!(config.validate(), Err(LedgerError::Config(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = LedgerConfig {
            human_operator: Some("clerk".to_string()),
            ..LedgerConfig::default()
        };
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: LedgerConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: LedgerConfig = toml::from_str("directory = \"/tmp/ledger\"").unwrap();
        assert_eq!(parsed.directory, PathBuf::from("/tmp/ledger"));
        assert_eq!(parsed.master_log_name, "master_provenance.jsonl");
    }
}
