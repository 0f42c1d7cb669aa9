//! Strong domain types for template documentation.
//!
//! # Examples
//!
//! ```
//! use ndfc_core::{ParameterName, TemplateName};
//!
//! let template = TemplateName::new("Easy_Fabric").unwrap();
//! let parameter = ParameterName::new("BGP_AS");
//! assert_eq!(template.as_str(), "Easy_Fabric");
//! assert_eq!(parameter.as_str(), "BGP_AS");
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a controller configuration template (e.g. `Easy_Fabric`).
///
/// The name becomes the last segment of the template URL, so it is
/// restricted to alphanumerics, `_`, `-` and `.`.
///
/// # Examples
///
/// ```
/// use ndfc_core::TemplateName;
///
/// assert!(TemplateName::new("Easy_Fabric_IPFM").is_ok());
/// assert!(TemplateName::new("").is_err());
/// assert!(TemplateName::new("../etc").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TemplateName(String);

impl TemplateName {
    /// Maximum accepted template name length.
    pub const MAX_LEN: usize = 128;

    /// Creates a validated template name.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the name is empty, too long,
    /// starts with `.`, or contains characters outside `[A-Za-z0-9_.-]`.
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        let trimmed = name.as_ref().trim();

        if trimmed.is_empty() {
            return Err(Error::InvalidArgument(
                "template name cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > Self::MAX_LEN {
            return Err(Error::InvalidArgument(format!(
                "template name exceeds {} characters",
                Self::MAX_LEN
            )));
        }

        if trimmed.starts_with('.')
            || !trimmed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        {
            return Err(Error::InvalidArgument(format!(
                "invalid template name '{trimmed}' (allowed: letters, digits, '_', '-', '.')"
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the template name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TemplateName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<TemplateName> for String {
    fn from(name: TemplateName) -> Self {
        name.0
    }
}

impl std::str::FromStr for TemplateName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Name of a template parameter (e.g. `BGP_AS`).
///
/// Ordered so that rendered documentation lists parameters alphabetically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterName(String);

impl ParameterName {
    /// Creates a new parameter name.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the parameter name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParameterName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ParameterName {
    fn from(s: String) -> Self {
        Self(s)
    }
}
