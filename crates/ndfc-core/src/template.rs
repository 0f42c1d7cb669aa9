//! Controller template model.
//!
//! Mirrors the JSON returned by the controller's configtemplate API closely
//! enough to deserialize it, while tolerating the controller's habit of
//! encoding booleans and numbers as strings (and occasionally the reverse).
//!
//! # Examples
//!
//! ```
//! use ndfc_core::Template;
//! use serde_json::json;
//!
//! let template = Template::from_value(json!({
//!     "name": "Easy_Fabric",
//!     "parameters": [
//!         {"name": "BGP_AS", "parameterType": "string", "optional": false},
//!         {"name": "RR_COUNT", "parameterType": "integer", "defaultValue": "2"}
//!     ]
//! })).unwrap();
//!
//! assert_eq!(template.name(), "Easy_Fabric");
//! assert_eq!(template.parameters().len(), 2);
//! assert_eq!(template.parameter("RR_COUNT").unwrap().default_value().as_deref(), Some("2"));
//! ```

use crate::text::{clean_text, parse_bool_like};
use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

/// Deserializes strings, booleans and numbers alike into `Option<String>`.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }))
}

/// One parameter of a configuration template, as reported by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateParameter {
    /// Parameter name, unique within the template
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    /// Controller type tag (`string`, `integer`, `boolean`, `enum`, ...)
    #[serde(default, deserialize_with = "lenient_string")]
    pub parameter_type: Option<String>,

    /// Root-level default value
    #[serde(default, deserialize_with = "lenient_string")]
    pub default_value: Option<String>,

    /// Whether the parameter may be omitted
    #[serde(default, deserialize_with = "lenient_string")]
    pub optional: Option<String>,

    /// GUI annotations: description, enum, section and internal flag
    #[serde(default)]
    pub annotations: Annotations,

    /// Validation metadata holding the nested default
    #[serde(default)]
    pub meta_properties: MetaProperties,
}

/// The `annotations` object of a template parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Annotations {
    /// Help text shown in the controller GUI
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,

    /// Comma-separated allowed values, or `TEMPLATES.<tag>`
    #[serde(default, deserialize_with = "lenient_string")]
    pub r#enum: Option<String>,

    /// GUI section; `Hidden` sections are not user-facing
    #[serde(default, deserialize_with = "lenient_string")]
    pub section: Option<String>,

    /// Internal parameters are never documented
    #[serde(default, deserialize_with = "lenient_string")]
    pub is_internal: Option<String>,
}

/// The `metaProperties` object of a template parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaProperties {
    /// Preferred location of the default value
    #[serde(default, deserialize_with = "lenient_string")]
    pub default_value: Option<String>,
}

impl TemplateParameter {
    /// Returns the trimmed parameter name, or `""` when absent.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().map_or("", str::trim)
    }

    /// Returns the controller type tag.
    #[must_use]
    pub fn type_tag(&self) -> Option<&str> {
        self.parameter_type.as_deref().map(str::trim)
    }

    /// Returns the raw default value.
    ///
    /// `metaProperties.defaultValue` takes precedence over the root
    /// `defaultValue`.
    #[must_use]
    pub fn default_value(&self) -> Option<String> {
        self.meta_properties
            .default_value
            .clone()
            .or_else(|| self.default_value.clone())
    }

    /// Returns the raw help text.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.annotations.description.as_deref()
    }

    /// Returns the raw `Enum` annotation.
    #[must_use]
    pub fn enum_values(&self) -> Option<&str> {
        self.annotations.r#enum.as_deref()
    }

    /// Returns the `optional` flag, if the controller reported one.
    #[must_use]
    pub fn optional(&self) -> Option<bool> {
        self.optional.as_deref().and_then(parse_bool_like)
    }

    /// Returns `true` if `annotations.IsInternal` is set.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        self.annotations
            .is_internal
            .as_deref()
            .map(clean_text)
            .and_then(|v| parse_bool_like(&v))
            .unwrap_or(false)
    }

    /// Returns `true` if the parameter lives in a `Hidden` section.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.annotations
            .section
            .as_deref()
            .is_some_and(|s| s.contains("Hidden"))
    }
}

/// A configuration template fetched from the controller.
///
/// Immutable once loaded; parameter names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(default, deserialize_with = "lenient_string")]
    name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    description: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    template_type: Option<String>,

    #[serde(default)]
    parameters: Vec<TemplateParameter>,
}

impl Template {
    /// Builds a template from the controller's JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTemplate`] if the payload is not a template
    /// object, or [`Error::DuplicateParameter`] if two parameters share a name.
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::InvalidTemplate {
                message: "expected a JSON object".to_string(),
            });
        }

        let template: Self =
            serde_json::from_value(value).map_err(|e| Error::InvalidTemplate {
                message: e.to_string(),
            })?;

        template.check_unique_names()?;

        debug!(
            template = template.name(),
            parameters = template.parameters.len(),
            "Loaded template"
        );

        Ok(template)
    }

    /// Creates a template from already-parsed parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateParameter`] if two parameters share a name.
    pub fn new(name: impl Into<String>, parameters: Vec<TemplateParameter>) -> Result<Self> {
        let template = Self {
            name: Some(name.into()),
            description: None,
            template_type: None,
            parameters,
        };
        template.check_unique_names()?;
        Ok(template)
    }

    fn check_unique_names(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for parameter in &self.parameters {
            let name = parameter.name();
            if name.is_empty() {
                continue;
            }
            if !seen.insert(name) {
                return Err(Error::DuplicateParameter {
                    template: self.name().to_string(),
                    parameter: name.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the template name, or `""` when the controller omitted it.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().map_or("", str::trim)
    }

    /// Returns the template description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the template type (e.g. `FABRIC`).
    #[must_use]
    pub fn template_type(&self) -> Option<&str> {
        self.template_type.as_deref()
    }

    /// Returns all parameters in controller order.
    #[must_use]
    pub fn parameters(&self) -> &[TemplateParameter] {
        &self.parameters
    }

    /// Looks up a parameter by name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&TemplateParameter> {
        self.parameters.iter().find(|p| p.name() == name)
    }
}

/// One entry of the controller's template list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Template name
    pub name: String,
    /// Cleaned, comma-split tags
    pub tags: Vec<String>,
}

/// The list of every template known to the controller.
///
/// Used to expand `TEMPLATES.<tag>` choices into concrete template names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplateCatalog {
    entries: Vec<CatalogEntry>,
}

impl TemplateCatalog {
    /// Builds a catalog from the controller's template list.
    ///
    /// Accepts either a JSON array of template objects or an object keyed by
    /// template name. Entries without a name are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTemplate`] if the payload is neither.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndfc_core::TemplateCatalog;
    /// use serde_json::json;
    ///
    /// let catalog = TemplateCatalog::from_value(json!([
    ///     {"name": "Default_Network_Universal", "tags": "[\"networktemplate\"]"},
    ///     {"name": "Default_VRF_Universal", "tags": "vrftemplate"}
    /// ])).unwrap();
    ///
    /// assert_eq!(catalog.names_by_tag("networktemplate"), vec!["Default_Network_Universal"]);
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        let items: Vec<Value> = match value {
            Value::Array(items) => items,
            Value::Object(map) => map.into_iter().map(|(_, v)| v).collect(),
            _ => {
                return Err(Error::InvalidTemplate {
                    message: "template catalog must be an array or an object".to_string(),
                });
            }
        };

        let entries = items
            .iter()
            .filter_map(|item| {
                let name = item.get("name")?.as_str()?.trim().to_string();
                let tags = item
                    .get("tags")
                    .and_then(Value::as_str)
                    .map(|raw| {
                        clean_text(raw)
                            .split(',')
                            .map(|t| t.trim().to_string())
                            .filter(|t| !t.is_empty())
                            .collect()
                    })
                    .unwrap_or_default();
                Some(CatalogEntry { name, tags })
            })
            .collect();

        Ok(Self { entries })
    }

    /// Returns the names of all templates carrying `tag`, in catalog order.
    #[must_use]
    pub fn names_by_tag(&self, tag: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.tags.iter().any(|t| t == tag))
            .map(|e| e.name.clone())
            .collect()
    }

    /// Returns the number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
