//! Argument groups and helpers shared across commands.

use anyhow::{Context, Result};
use clap::Args;
use ndfc_client::{ControllerClient, FileTemplateSource};
use ndfc_core::config::{DEFAULT_DOMAIN, DEFAULT_USERNAME};
use ndfc_core::traits::TemplateSource;
use ndfc_core::{ControllerConfig, TemplateCatalog};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Controller connection settings, usually taken from the environment.
#[derive(Args, Debug, Clone)]
pub struct ControllerArgs {
    /// Controller IPv4 address
    #[arg(long, env = "NDFC_IP4", global = true)]
    pub ip4: Option<String>,

    /// Login user
    #[arg(long, env = "NDFC_USERNAME", default_value = DEFAULT_USERNAME, global = true)]
    pub username: String,

    /// Login password
    #[arg(long, env = "NDFC_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Authentication domain
    #[arg(long, env = "NDFC_DOMAIN", default_value = DEFAULT_DOMAIN, global = true)]
    pub domain: String,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 20, global = true)]
    pub timeout: u64,

    /// Verify the controller's TLS certificate
    #[arg(long, global = true)]
    pub verify_tls: bool,
}

impl ControllerArgs {
    /// Builds the controller configuration.
    pub fn to_config(&self) -> ndfc_core::Result<ControllerConfig> {
        let mut builder = ControllerConfig::builder()
            .username(&self.username)
            .domain(&self.domain)
            .request_timeout(Duration::from_secs(self.timeout))
            .verify_tls(self.verify_tls);
        if let Some(ip4) = &self.ip4 {
            builder = builder.ip4(ip4);
        }
        if let Some(password) = &self.password {
            builder = builder.password(password);
        }
        builder.build()
    }
}

/// Where templates and the catalog are read from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Read templates from a saved JSON file or directory instead of the controller
    #[arg(long, value_name = "PATH")]
    pub from_file: Option<PathBuf>,

    /// Read the template catalog from this JSON file
    #[arg(long, value_name = "PATH")]
    pub catalog_file: Option<PathBuf>,

    /// Load the template catalog from the template source
    #[arg(long, conflicts_with = "catalog_file")]
    pub with_catalog: bool,
}

/// Opens the template source selected by `input`.
///
/// Logs in to the controller unless `--from-file` is given.
pub async fn open_source(
    controller: &ControllerArgs,
    input: &InputArgs,
) -> Result<Box<dyn TemplateSource>> {
    if let Some(path) = &input.from_file {
        let source = file_source(path).await;
        debug!(source = %source.describe(), "Using saved templates");
        return Ok(Box::new(source));
    }

    let config = controller.to_config()?;
    let client = ControllerClient::login(&config)
        .await
        .context("failed to log in to the controller")?;
    info!(controller = %config.ip4(), "Logged in");
    Ok(Box::new(client))
}

async fn file_source(path: &Path) -> FileTemplateSource {
    if tokio::fs::metadata(path).await.is_ok_and(|m| m.is_dir()) {
        FileTemplateSource::directory(path)
    } else {
        FileTemplateSource::single(path)
    }
}

/// Loads the template catalog, if requested.
pub async fn load_catalog(
    source: &dyn TemplateSource,
    input: &InputArgs,
) -> Result<Option<TemplateCatalog>> {
    let catalog = if let Some(path) = &input.catalog_file {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read catalog file {}", path.display()))?;
        let value = serde_json::from_str(&content)
            .with_context(|| format!("catalog file {} is not valid JSON", path.display()))?;
        TemplateCatalog::from_value(value)?
    } else if input.with_catalog {
        source
            .fetch_catalog()
            .await
            .with_context(|| format!("failed to load catalog from {}", source.describe()))?
    } else {
        return Ok(None);
    };

    info!(templates = catalog.len(), "Loaded template catalog");
    Ok(Some(catalog))
}

/// Writes a finished document to stdout in one piece.
pub fn write_stdout(document: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(document.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write to stdout")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn controller_args() -> ControllerArgs {
        ControllerArgs {
            ip4: Some("10.1.1.1".into()),
            username: DEFAULT_USERNAME.into(),
            password: Some("secret".into()),
            domain: DEFAULT_DOMAIN.into(),
            timeout: 20,
            verify_tls: false,
        }
    }

    #[test]
    fn test_to_config() {
        let config = controller_args().to_config().unwrap();
        assert_eq!(config.base_url(), "https://10.1.1.1");
        assert_eq!(config.request_timeout(), Duration::from_secs(20));
    }

    #[test]
    fn test_to_config_without_password() {
        let args = ControllerArgs {
            password: None,
            ..controller_args()
        };
        let err = args.to_config().unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("NDFC_PASSWORD"));
    }

    #[tokio::test]
    async fn test_no_catalog_requested() {
        let source = FileTemplateSource::single("/nonexistent.json");
        let catalog = load_catalog(&source, &InputArgs::default()).await.unwrap();
        assert!(catalog.is_none());
    }

    #[tokio::test]
    async fn test_catalog_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, r#"[{"name": "Default_VRF_Universal", "tags": "vrfTemplate"}]"#)
            .unwrap();
        let input = InputArgs {
            catalog_file: Some(path),
            ..InputArgs::default()
        };
        let source = FileTemplateSource::single("/nonexistent.json");
        let catalog = load_catalog(&source, &input).await.unwrap().unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[tokio::test]
    async fn test_from_file_directory_is_directory_source() {
        let dir = TempDir::new().unwrap();
        let input = InputArgs {
            from_file: Some(dir.path().to_path_buf()),
            ..InputArgs::default()
        };
        let source = open_source(&controller_args(), &input).await.unwrap();
        assert!(source.describe().starts_with("directory"));
    }
}
