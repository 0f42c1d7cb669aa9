//! Template source trait.
//!
//! Defines the narrow `fetch-template-by-name` interface that every template
//! provider implements: the live controller, saved JSON files, or an
//! in-memory fixture.

use crate::{Result, Template, TemplateCatalog, TemplateName};
use async_trait::async_trait;
use serde_json::Value;

/// Provides template schemas by name.
///
/// Implementors only return raw JSON; parsing into [`Template`] and
/// [`TemplateCatalog`] is shared through the provided methods.
///
/// # Examples
///
/// ```
/// use ndfc_core::traits::TemplateSource;
/// use ndfc_core::{Error, Result, TemplateName};
/// use async_trait::async_trait;
/// use serde_json::{Value, json};
///
/// struct Fixed;
///
/// #[async_trait]
/// impl TemplateSource for Fixed {
///     async fn fetch_raw_template(&self, name: &TemplateName) -> Result<Value> {
///         if name.as_str() != "LAN_Classic" {
///             return Err(Error::TemplateNotFound { template: name.to_string() });
///         }
///         Ok(json!({"name": "LAN_Classic", "parameters": []}))
///     }
///
///     async fn fetch_raw_catalog(&self) -> Result<Value> {
///         Ok(json!([]))
///     }
///
///     fn describe(&self) -> String {
///         "fixed".to_string()
///     }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let name = TemplateName::new("LAN_Classic").unwrap();
/// let template = Fixed.fetch_template(&name).await.unwrap();
/// assert_eq!(template.name(), "LAN_Classic");
/// # }
/// ```
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Fetches the raw JSON of one template.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TemplateNotFound`] when the template does not
    /// exist, or a transport/authentication error from the provider.
    async fn fetch_raw_template(&self, name: &TemplateName) -> Result<Value>;

    /// Fetches the raw JSON list of all templates.
    ///
    /// # Errors
    ///
    /// Returns a transport/authentication error from the provider.
    async fn fetch_raw_catalog(&self) -> Result<Value>;

    /// Short human-readable description used in log messages.
    fn describe(&self) -> String;

    /// Fetches and parses one template.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::fetch_raw_template`] errors and
    /// [`Template::from_value`] validation errors.
    async fn fetch_template(&self, name: &TemplateName) -> Result<Template> {
        let raw = self.fetch_raw_template(name).await?;
        Template::from_value(raw)
    }

    /// Fetches and parses the template catalog.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::fetch_raw_catalog`] errors and
    /// [`TemplateCatalog::from_value`] validation errors.
    async fn fetch_catalog(&self) -> Result<TemplateCatalog> {
        let raw = self.fetch_raw_catalog().await?;
        TemplateCatalog::from_value(raw)
    }
}
