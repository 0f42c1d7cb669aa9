//! In-memory template source.

use async_trait::async_trait;
use ndfc_core::traits::TemplateSource;
use ndfc_core::{Error, Result, TemplateName};
use serde_json::Value;
use std::collections::HashMap;

/// Serves templates held in memory, keyed by template name.
///
/// # Examples
///
/// ```
/// use ndfc_client::MemoryTemplateSource;
/// use ndfc_core::traits::TemplateSource;
/// use ndfc_core::TemplateName;
/// use serde_json::json;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let source = MemoryTemplateSource::new()
///     .with_template("External_Fabric", json!({"name": "External_Fabric", "parameters": []}));
///
/// let name = TemplateName::new("External_Fabric").unwrap();
/// assert!(source.fetch_template(&name).await.is_ok());
///
/// let missing = TemplateName::new("MSD_Fabric").unwrap();
/// assert!(source.fetch_template(&missing).await.unwrap_err().is_not_found());
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplateSource {
    templates: HashMap<String, Value>,
    catalog: Option<Value>,
}

impl MemoryTemplateSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a template.
    #[must_use]
    pub fn with_template(mut self, name: impl Into<String>, template: Value) -> Self {
        self.templates.insert(name.into(), template);
        self
    }

    /// Sets the catalog returned by [`TemplateSource::fetch_raw_catalog`].
    #[must_use]
    pub fn with_catalog(mut self, catalog: Value) -> Self {
        self.catalog = Some(catalog);
        self
    }
}

#[async_trait]
impl TemplateSource for MemoryTemplateSource {
    async fn fetch_raw_template(&self, name: &TemplateName) -> Result<Value> {
        self.templates
            .get(name.as_str())
            .cloned()
            .ok_or_else(|| Error::TemplateNotFound {
                template: name.to_string(),
            })
    }

    async fn fetch_raw_catalog(&self) -> Result<Value> {
        self.catalog.clone().ok_or_else(|| Error::ConfigError {
            message: "no template catalog loaded".to_string(),
        })
    }

    fn describe(&self) -> String {
        format!("memory ({} templates)", self.templates.len())
    }
}
