//! Templates saved as JSON files.
//!
//! Two layouts are supported:
//!
//! - a directory holding `<TemplateName>.json` files plus an optional
//!   `templates.json` catalog (the layout written by `ndfc-doc save`)
//! - a single template file, with an optional separate catalog file

use async_trait::async_trait;
use ndfc_core::traits::TemplateSource;
use ndfc_core::{Error, Result, TemplateName};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name of the catalog inside a template directory.
pub const CATALOG_FILE_NAME: &str = "templates.json";

#[derive(Debug, Clone)]
enum Layout {
    Directory(PathBuf),
    Single(PathBuf),
}

/// Reads templates from previously saved JSON.
///
/// # Examples
///
/// ```
/// use ndfc_client::FileTemplateSource;
/// use ndfc_core::traits::TemplateSource;
/// use ndfc_core::TemplateName;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let dir = tempfile::tempdir().unwrap();
/// std::fs::write(
///     dir.path().join("LAN_Classic.json"),
///     r#"{"name": "LAN_Classic", "parameters": []}"#,
/// ).unwrap();
///
/// let source = FileTemplateSource::directory(dir.path());
/// let template = source
///     .fetch_template(&TemplateName::new("LAN_Classic").unwrap())
///     .await
///     .unwrap();
/// assert_eq!(template.name(), "LAN_Classic");
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FileTemplateSource {
    layout: Layout,
    catalog: Option<PathBuf>,
}

impl FileTemplateSource {
    /// Reads `<dir>/<name>.json`; the catalog defaults to `<dir>/templates.json`.
    #[must_use]
    pub fn directory(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let catalog = dir.join(CATALOG_FILE_NAME);
        Self {
            layout: Layout::Directory(dir),
            catalog: Some(catalog),
        }
    }

    /// Reads every requested template from one file.
    #[must_use]
    pub fn single(path: impl Into<PathBuf>) -> Self {
        Self {
            layout: Layout::Single(path.into()),
            catalog: None,
        }
    }

    /// Overrides the catalog file.
    #[must_use]
    pub fn with_catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog = Some(path.into());
        self
    }

    /// Path the template `name` is read from.
    #[must_use]
    pub fn template_path(&self, name: &TemplateName) -> PathBuf {
        match &self.layout {
            Layout::Directory(dir) => dir.join(format!("{}.json", name.as_str())),
            Layout::Single(path) => path.clone(),
        }
    }
}

async fn read_json(path: &Path) -> Result<Value> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&content).map_err(|e| Error::InvalidTemplate {
        message: format!("{} is not valid JSON: {e}", path.display()),
    })
}

#[async_trait]
impl TemplateSource for FileTemplateSource {
    async fn fetch_raw_template(&self, name: &TemplateName) -> Result<Value> {
        let path = self.template_path(name);
        debug!(template = %name, path = %path.display(), "Reading template file");

        let value = match read_json(&path).await {
            Err(Error::Io { source, .. })
                if source.kind() == ErrorKind::NotFound
                    && matches!(self.layout, Layout::Directory(_)) =>
            {
                return Err(Error::TemplateNotFound {
                    template: name.to_string(),
                });
            }
            other => other?,
        };

        if let Some(found) = value.get("name").and_then(Value::as_str)
            && found != name.as_str()
        {
            warn!(
                requested = %name,
                found,
                path = %path.display(),
                "Template file holds a differently named template"
            );
        }

        Ok(value)
    }

    async fn fetch_raw_catalog(&self) -> Result<Value> {
        let path = self.catalog.as_ref().ok_or_else(|| Error::ConfigError {
            message: "no template catalog file configured".to_string(),
        })?;
        debug!(path = %path.display(), "Reading catalog file");
        read_json(path).await
    }

    fn describe(&self) -> String {
        match &self.layout {
            Layout::Directory(dir) => format!("directory {}", dir.display()),
            Layout::Single(path) => format!("file {}", path.display()),
        }
    }
}

/// Writes a template as JSON, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory or file cannot be written, or
/// [`Error::SerializationError`] if the value cannot be encoded.
pub async fn write_template_json(path: &Path, value: &Value) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    let json = serde_json::to_string_pretty(value).map_err(|e| Error::SerializationError {
        message: format!("failed to encode template: {e}"),
        source: Some(Box::new(e)),
    })?;

    tokio::fs::write(path, json)
        .await
        .map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), "Wrote template file");
    Ok(())
}
