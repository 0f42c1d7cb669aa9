//! Normalized documentation types.
//!
//! Field order in [`DocumentationField`] is the rendered key order:
//! `choices`, `default`, `description`, `elements`, `required`, `type`.

use ndfc_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ansible argument type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnsibleType {
    /// `str`
    Str,
    /// `int`
    Int,
    /// `bool`
    Bool,
    /// `list`
    List,
}

impl AnsibleType {
    /// Returns the type as it appears in Ansible documentation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Int => "int",
            Self::Bool => "bool",
            Self::List => "list",
        }
    }
}

impl fmt::Display for AnsibleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Element type of a `list` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// `str`
    #[default]
    Str,
    /// `dict`
    Dict,
}

/// A default value, typed for its field.
///
/// Serialized untagged, so `Str("0")` renders as the quoted scalar `'0'`
/// while `Int(0)` renders as the plain scalar `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    /// Boolean default
    Bool(bool),
    /// Integer default
    Int(i64),
    /// String default
    Str(String),
}

impl DefaultValue {
    /// Returns `true` if this default is representable as `field_type`.
    #[must_use]
    pub const fn fits(&self, field_type: AnsibleType) -> bool {
        matches!(
            (self, field_type),
            (Self::Bool(_), AnsibleType::Bool)
                | (Self::Int(_), AnsibleType::Int)
                | (Self::Str(_), AnsibleType::Str | AnsibleType::List)
        )
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// One allowed value of an argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Choice {
    /// Integer choice
    Int(i64),
    /// String choice
    Str(String),
}

/// Documentation of one module argument.
///
/// # Examples
///
/// ```
/// use ndfc_docgen::{AnsibleType, DefaultValue, DocumentationField};
///
/// let field = DocumentationField::new(AnsibleType::Int, "BGP routing tag")
///     .with_default(DefaultValue::Int(54321));
/// assert!(field.check_consistency("RS_ROUTING_TAG").is_ok());
///
/// let broken = DocumentationField::new(AnsibleType::Int, "BGP routing tag")
///     .with_default(DefaultValue::Str("54321".into()));
/// assert!(broken.check_consistency("RS_ROUTING_TAG").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationField {
    /// Allowed values; omitted when empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,

    /// Default value; omitted when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,

    /// Description lines
    pub description: Vec<String>,

    /// Element type; present only for lists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elements: Option<ElementType>,

    /// Whether the argument must be supplied
    pub required: bool,

    /// Argument type
    #[serde(rename = "type")]
    pub field_type: AnsibleType,
}

impl DocumentationField {
    /// Creates a field with one description line and no default.
    ///
    /// Lists get `elements: str`.
    #[must_use]
    pub fn new(field_type: AnsibleType, description: impl Into<String>) -> Self {
        Self {
            choices: Vec::new(),
            default: None,
            description: vec![description.into()],
            elements: (field_type == AnsibleType::List).then_some(ElementType::Str),
            required: false,
            field_type,
        }
    }

    /// Sets the default.
    #[must_use]
    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Sets the allowed values.
    #[must_use]
    pub fn with_choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = choices;
        self
    }

    /// Sets the required flag.
    #[must_use]
    pub const fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Verifies the default fits the type and `elements` matches the type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] naming `parameter` when the
    /// field would render inconsistently.
    pub fn check_consistency(&self, parameter: &str) -> Result<()> {
        if let Some(default) = &self.default
            && !default.fits(self.field_type)
        {
            return Err(Error::SerializationError {
                message: format!(
                    "default '{default}' of parameter '{parameter}' does not fit type {}",
                    self.field_type
                ),
                source: None,
            });
        }

        match (self.field_type, self.elements) {
            (AnsibleType::List, None) => Err(Error::SerializationError {
                message: format!("list parameter '{parameter}' has no element type"),
                source: None,
            }),
            (AnsibleType::Str | AnsibleType::Int | AnsibleType::Bool, Some(_)) => {
                Err(Error::SerializationError {
                    message: format!(
                        "parameter '{parameter}' of type {} carries an element type",
                        self.field_type
                    ),
                    source: None,
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fits() {
        assert!(DefaultValue::Int(1).fits(AnsibleType::Int));
        assert!(DefaultValue::Str(String::new()).fits(AnsibleType::List));
        assert!(DefaultValue::Bool(true).fits(AnsibleType::Bool));
        assert!(!DefaultValue::Str("1".into()).fits(AnsibleType::Int));
        assert!(!DefaultValue::Int(1).fits(AnsibleType::Str));
    }

    #[test]
    fn test_new_list_has_elements() {
        let field = DocumentationField::new(AnsibleType::List, "d");
        assert_eq!(field.elements, Some(ElementType::Str));
        assert!(DocumentationField::new(AnsibleType::Str, "d").elements.is_none());
    }

    #[test]
    fn test_consistency_rejects_elements_on_scalar() {
        let mut field = DocumentationField::new(AnsibleType::Str, "d");
        field.elements = Some(ElementType::Str);
        assert!(field.check_consistency("X").unwrap_err().is_serialization_error());
    }

    #[test]
    fn test_consistency_rejects_list_without_elements() {
        let mut field = DocumentationField::new(AnsibleType::List, "d");
        field.elements = None;
        assert!(field.check_consistency("X").is_err());
    }

    #[test]
    fn test_key_order_matches_field_order() {
        let field = DocumentationField::new(AnsibleType::Int, "d")
            .with_default(DefaultValue::Int(3))
            .with_choices(vec![Choice::Int(3), Choice::Int(7)]);
        let json = serde_json::to_string(&field).unwrap();
        assert_eq!(
            json,
            r#"{"choices":[3,7],"default":3,"description":["d"],"required":false,"type":"int"}"#
        );
    }

    #[test]
    fn test_type_display() {
        assert_eq!(AnsibleType::List.to_string(), "list");
        assert_eq!(DefaultValue::Bool(false).to_string(), "false");
    }
}
