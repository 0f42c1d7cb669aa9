//! Serialization of normalized documentation.
//!
//! The whole document is rendered into a `String` before anything is
//! written, so a failure never leaves partial output behind.

use crate::module::ModuleDocumentation;
use crate::normalizer::NormalizedTemplate;
use crate::quoting::quote_yaml11_scalars;
use crate::types::DocumentationField;
use ndfc_core::cli::OutputFormat;
use ndfc_core::{Error, ParameterName, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Renders documentation as YAML or JSON.
///
/// Output is deterministic: arguments are sorted by name and each
/// argument's keys follow [`DocumentationField`]'s declaration order.
///
/// # Examples
///
/// ```
/// use ndfc_core::cli::OutputFormat;
/// use ndfc_docgen::Renderer;
///
/// let renderer = Renderer::new(OutputFormat::Json);
/// assert_eq!(renderer.format(), OutputFormat::Json);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    /// Creates a renderer producing `format`.
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Returns the output format.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// Renders the bare argument mapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if a field is inconsistent or
    /// the serializer fails.
    pub fn render_options(&self, normalized: &NormalizedTemplate) -> Result<String> {
        check_fields(normalized.fields())?;
        let output = self.serialize(normalized.fields())?;
        debug!(
            template = normalized.template(),
            format = %self.format,
            bytes = output.len(),
            "Rendered options"
        );
        Ok(output)
    }

    /// Renders the full module documentation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if a field is inconsistent or
    /// the serializer fails.
    pub fn render_module(&self, documentation: &ModuleDocumentation) -> Result<String> {
        check_fields(&documentation.options.config.suboptions)?;
        let output = self.serialize(documentation)?;
        debug!(
            module = %documentation.module,
            format = %self.format,
            bytes = output.len(),
            "Rendered module documentation"
        );
        Ok(output)
    }

    /// Serializes any value in this renderer's format.
    ///
    /// JSON output ends with a newline, like YAML output. YAML strings that a
    /// YAML 1.1 loader would read as booleans, numbers or dates are quoted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if the serializer fails.
    pub fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        match self.format {
            OutputFormat::Yaml => serde_yaml::to_string(value)
                .map(|yaml| quote_yaml11_scalars(&yaml))
                .map_err(|e| Error::SerializationError {
                    message: format!("failed to render YAML: {e}"),
                    source: Some(Box::new(e)),
                }),
            OutputFormat::Json => serde_json::to_string_pretty(value)
                .map(|json| json + "\n")
                .map_err(|e| Error::SerializationError {
                    message: format!("failed to render JSON: {e}"),
                    source: Some(Box::new(e)),
                }),
        }
    }
}

fn check_fields(fields: &BTreeMap<ParameterName, DocumentationField>) -> Result<()> {
    fields
        .iter()
        .try_for_each(|(name, field)| field.check_consistency(name.as_str()))
}
