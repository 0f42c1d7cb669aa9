//! Full Ansible module documentation wrapping the normalized arguments.
//!
//! ```yaml
//! module: dcnm_fabric
//! author: ...
//! description:
//! - ...
//! options:
//!   state:
//!     choices: [deleted, merged, query, replaced]
//!     default: merged
//!     ...
//!   config:
//!     elements: dict
//!     suboptions: <normalized arguments>
//!     type: list
//! ```

use crate::normalizer::NormalizedTemplate;
use crate::types::{AnsibleType, DocumentationField, ElementType};
use ndfc_core::{Error, ParameterName, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// States an Ansible network module may support.
pub const VALID_STATES: &[&str] = &["deleted", "merged", "overridden", "query", "replaced"];

/// Default description of the `state` option.
pub const DEFAULT_STATE_DESCRIPTION: &str = "The state of DCNM after module completion";
/// Default description of the `config` option.
pub const DEFAULT_CONFIG_DESCRIPTION: &str = "A list of fabric configuration dictionaries";

/// Module-level metadata not found in the template.
///
/// Deserializable so it can be read from the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleMetadata {
    /// Module name, e.g. `dcnm_fabric`
    pub module_name: String,
    /// Module author; required for the module layout
    pub author: Option<String>,
    /// One-line module description
    pub description: String,
    /// Supported states
    pub states: Vec<String>,
    /// State used when the playbook omits one
    pub default_state: String,
    /// Description of the `state` option
    pub state_description: String,
    /// Description of the `config` option
    pub config_description: String,
}

impl Default for ModuleMetadata {
    fn default() -> Self {
        Self {
            module_name: "dcnm_fabric".to_string(),
            author: None,
            description: "Manage creation and configuration of NDFC fabrics.".to_string(),
            states: ["deleted", "merged", "query", "replaced"]
                .into_iter()
                .map(String::from)
                .collect(),
            default_state: "merged".to_string(),
            state_description: DEFAULT_STATE_DESCRIPTION.to_string(),
            config_description: DEFAULT_CONFIG_DESCRIPTION.to_string(),
        }
    }
}

impl ModuleMetadata {
    /// Checks that the metadata describes a valid module.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the module name or author is
    /// missing, a state is unknown or repeated, or the default state is not
    /// among the states.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndfc_docgen::ModuleMetadata;
    ///
    /// let mut metadata = ModuleMetadata::default();
    /// assert!(metadata.validate().is_err()); // no author
    ///
    /// metadata.author = Some("Fabric Team (@fabric-team)".into());
    /// assert!(metadata.validate().is_ok());
    ///
    /// metadata.default_state = "overridden".into();
    /// assert!(metadata.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.module_name.trim().is_empty() {
            return Err(config_error("module name must not be empty"));
        }
        if self.author.as_deref().is_none_or(|a| a.trim().is_empty()) {
            return Err(config_error(
                "module author is required (set --author or 'author' in the config file)",
            ));
        }
        if self.states.is_empty() {
            return Err(config_error("at least one module state is required"));
        }
        for (index, state) in self.states.iter().enumerate() {
            if !VALID_STATES.contains(&state.as_str()) {
                return Err(config_error(&format!(
                    "invalid state '{state}', expected one of: {}",
                    VALID_STATES.join(", ")
                )));
            }
            if self.states[..index].contains(state) {
                return Err(config_error(&format!("state '{state}' is listed twice")));
            }
        }
        if !self.states.contains(&self.default_state) {
            return Err(config_error(&format!(
                "default state '{}' is not one of the module states",
                self.default_state
            )));
        }
        Ok(())
    }
}

fn config_error(message: &str) -> Error {
    Error::ConfigError {
        message: message.to_string(),
    }
}

/// The `state` option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateOption {
    /// Supported states
    pub choices: Vec<String>,
    /// Default state
    pub default: String,
    /// Description lines
    pub description: Vec<String>,
    /// Always `str`
    #[serde(rename = "type")]
    pub option_type: AnsibleType,
}

/// The `config` option holding the template arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigOption {
    /// Description lines
    pub description: Vec<String>,
    /// Always `dict`
    pub elements: ElementType,
    /// Normalized template arguments
    pub suboptions: BTreeMap<ParameterName, DocumentationField>,
    /// Always `list`
    #[serde(rename = "type")]
    pub option_type: AnsibleType,
}

/// Options of the module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleOptions {
    /// Desired state
    pub state: StateOption,
    /// Template arguments
    pub config: ConfigOption,
}

/// Ansible documentation for a module driving one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDocumentation {
    /// Module name
    pub module: String,
    /// Module author
    pub author: String,
    /// Description lines
    pub description: Vec<String>,
    /// Module options
    pub options: ModuleOptions,
}

impl ModuleDocumentation {
    /// Wraps `normalized` in the module skeleton described by `metadata`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if `metadata` fails
    /// [`ModuleMetadata::validate`].
    pub fn build(metadata: &ModuleMetadata, normalized: &NormalizedTemplate) -> Result<Self> {
        metadata.validate()?;

        Ok(Self {
            module: metadata.module_name.clone(),
            author: metadata.author.clone().unwrap_or_default(),
            description: vec![metadata.description.clone()],
            options: ModuleOptions {
                state: StateOption {
                    choices: metadata.states.clone(),
                    default: metadata.default_state.clone(),
                    description: vec![metadata.state_description.clone()],
                    option_type: AnsibleType::Str,
                },
                config: ConfigOption {
                    description: vec![metadata.config_description.clone()],
                    elements: ElementType::Dict,
                    suboptions: normalized.fields().clone(),
                    option_type: AnsibleType::List,
                },
            },
        })
    }
}
