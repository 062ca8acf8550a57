//! `heplink.toml` loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// File picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "heplink.toml";

/// CLI settings. Every field has a default; command-line flags win over the
/// file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeplinkConfig {
    /// Deployed site the asset audit probes with HEAD requests
    pub base_url: String,
    /// tracing filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Label drawn on the generated placeholder
    pub placeholder_label: String,
}

impl Default for HeplinkConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            log_level: "info".to_string(),
            placeholder_label: heplink_core::asset::DEFAULT_LABEL.to_string(),
        }
    }
}

impl HeplinkConfig {
    /// Load `explicit` if given (it must exist), else `heplink.toml` in the
    /// working directory if present, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !candidate.is_file() {
                    return Ok(Self::default());
                }
                candidate
            }
        };
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Parse TOML text.
    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_means_defaults() {
        assert_eq!(HeplinkConfig::parse("").unwrap(), HeplinkConfig::default());
    }

    #[test]
    fn fields_override_defaults() {
        let config = HeplinkConfig::parse(
            r#"
base_url = "https://heplink.co"
log_level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.base_url, "https://heplink.co");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.placeholder_label, "Heplink image");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(HeplinkConfig::parse("cache = true").is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = HeplinkConfig::load(Some(Path::new("/nonexistent/heplink.toml"))).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }
}
