//! Configuration file.
//!
//! Stored in TOML format at:
//! - Linux: `~/.config/ndfc-doc/config.toml`
//! - macOS: `~/Library/Application Support/ndfc-doc/config.toml`
//! - Windows: `%APPDATA%\ndfc-doc\config.toml`
//!
//! Controller credentials are never read from this file; they come from the
//! command line or the `NDFC_*` environment variables.

use anyhow::{Context, Result};
use ndfc_docgen::ModuleMetadata;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI settings.
///
/// # Examples
///
/// ```toml
/// [module]
/// module_name = "dcnm_fabric"
/// author = "Fabric Team (@fabric-team)"
/// description = "Manage creation and configuration of NDFC fabrics."
/// states = ["deleted", "merged", "query", "replaced"]
/// default_state = "merged"
/// config_description = "A list of fabric configuration dictionaries"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Defaults for the `module` layout
    #[serde(default)]
    pub module: ModuleMetadata,
}

impl Settings {
    /// Parses settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse config file")
    }
}

/// Returns the default configuration file path.
pub fn default_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("failed to determine config directory")?;
    Ok(config_dir.join("ndfc-doc").join("config.toml"))
}

/// Loads settings.
///
/// An explicitly given file must exist. Without one, the default path is
/// tried and defaults are used if it is absent.
pub async fn load(path: Option<&Path>) -> Result<Settings> {
    let (path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => match default_path() {
            Ok(path) => (path, false),
            Err(e) => {
                debug!("No config directory ({e}), using defaults");
                return Ok(Settings::default());
            }
        },
    };

    if !explicit && !tokio::fs::try_exists(&path).await.unwrap_or(false) {
        debug!(path = %path.display(), "Config file not found, using defaults");
        return Ok(Settings::default());
    }

    let content = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let settings = Settings::from_toml(&content)
        .with_context(|| format!("invalid config file {}", path.display()))?;
    debug!(path = %path.display(), "Loaded config file");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_module_table() {
        let settings = Settings::from_toml(
            r#"
            [module]
            module_name = "dcnm_vrf"
            author = "VRF Team"
            "#,
        )
        .unwrap();
        assert_eq!(settings.module.module_name, "dcnm_vrf");
        assert_eq!(settings.module.author.as_deref(), Some("VRF Team"));
        assert_eq!(settings.module.default_state, "merged");
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Settings::from_toml("[module\n").is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let mut settings = Settings::default();
        settings.module.author = Some("A".into());
        let text = toml::to_string_pretty(&settings).unwrap();
        assert_eq!(Settings::from_toml(&text).unwrap(), settings);
    }

    #[tokio::test]
    async fn test_explicit_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let result = load(Some(&dir.path().join("absent.toml"))).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[module]\nstates = [\"merged\", \"query\"]\n").unwrap();
        let settings = load(Some(&path)).await.unwrap();
        assert_eq!(settings.module.states, vec!["merged", "query"]);
    }
}
