//! Controller parameters to Ansible argument documentation.
//!
//! For each parameter the normalizer:
//!
//! 1. skips internal, hidden and unnamed parameters
//! 2. corrects misspelled names
//! 3. translates the controller type tag
//! 4. cleans the description, choices and default
//! 5. shapes the default for the target type
//! 6. applies the [`OverrideTable`]
//!
//! Every produced field passes
//! [`DocumentationField::check_consistency`].

use crate::overrides::{Correction, DefaultOverride, OverrideTable};
use crate::translation::{translate_name, translate_type};
use crate::types::{AnsibleType, Choice, DefaultValue, DocumentationField};
use ndfc_core::text::{clean_text, parse_bool_like, parse_integer, strip_min_max};
use ndfc_core::{Error, ParameterName, Result, Template, TemplateCatalog, TemplateParameter};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Description used when the controller provides none.
pub const NO_DESCRIPTION: &str = "No description available";

/// Prefix of an `Enum` annotation that refers to catalog templates by tag.
const TEMPLATE_CHOICE_PREFIX: &str = "TEMPLATES.";

/// The documented arguments of one template, ordered by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTemplate {
    template: String,
    fields: BTreeMap<ParameterName, DocumentationField>,
}

impl NormalizedTemplate {
    /// Name of the source template.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Documented arguments, ordered by name.
    #[must_use]
    pub const fn fields(&self) -> &BTreeMap<ParameterName, DocumentationField> {
        &self.fields
    }

    /// Returns the field documenting `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DocumentationField> {
        self.fields.get(&ParameterName::from(name))
    }

    /// Number of documented arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no argument was documented.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Maps template parameters to [`DocumentationField`]s.
#[derive(Debug, Clone, Copy)]
pub struct FieldNormalizer<'a> {
    overrides: &'a OverrideTable,
    catalog: Option<&'a TemplateCatalog>,
}

impl<'a> FieldNormalizer<'a> {
    /// Creates a normalizer applying `overrides`.
    #[must_use]
    pub const fn new(overrides: &'a OverrideTable) -> Self {
        Self {
            overrides,
            catalog: None,
        }
    }

    /// Resolves `TEMPLATES.<tag>` choices through `catalog`.
    #[must_use]
    pub const fn with_catalog(mut self, catalog: &'a TemplateCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Normalizes every parameter of `template`.
    ///
    /// # Errors
    ///
    /// Returns the first parameter error (see
    /// [`normalize_parameter`](Self::normalize_parameter)), or
    /// [`Error::DuplicateParameter`] if two parameters share a name after
    /// typo correction.
    pub fn normalize(&self, template: &Template) -> Result<NormalizedTemplate> {
        let mut fields = BTreeMap::new();
        let mut skipped = 0_usize;

        for parameter in template.parameters() {
            let Some((name, field)) = self.normalize_parameter(template.name(), parameter)? else {
                skipped += 1;
                continue;
            };
            if fields.contains_key(&name) {
                return Err(Error::DuplicateParameter {
                    template: template.name().to_string(),
                    parameter: name.to_string(),
                });
            }
            fields.insert(name, field);
        }

        debug!(
            template = template.name(),
            documented = fields.len(),
            skipped,
            overrides_version = self.overrides.version(),
            "Normalized template"
        );

        Ok(NormalizedTemplate {
            template: template.name().to_string(),
            fields,
        })
    }

    /// Normalizes one parameter of `template`.
    ///
    /// Returns `Ok(None)` for internal, hidden and unnamed parameters.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedType`] if the type tag is missing or unknown
    /// - [`Error::SerializationError`] if the default does not fit the type
    pub fn normalize_parameter(
        &self,
        template: &str,
        parameter: &TemplateParameter,
    ) -> Result<Option<(ParameterName, DocumentationField)>> {
        let raw_name = parameter.name();
        if raw_name.is_empty() {
            debug!(template, "Skipping unnamed parameter");
            return Ok(None);
        }
        if parameter.is_internal() {
            debug!(template, parameter = raw_name, "Skipping internal parameter");
            return Ok(None);
        }
        if parameter.is_hidden() {
            debug!(template, parameter = raw_name, "Skipping hidden parameter");
            return Ok(None);
        }

        let name = translate_name(raw_name);
        if name != raw_name {
            debug!(from = raw_name, to = name, "Corrected parameter name");
        }

        let type_tag = parameter.type_tag().unwrap_or_default();
        let native_type = translate_type(type_tag).ok_or_else(|| Error::UnsupportedType {
            parameter: name.to_string(),
            type_tag: type_tag.to_string(),
        })?;

        let correction = self.overrides.lookup(name, template);
        let field_type = target_type(native_type, correction);
        let default_text = parameter.default_value().map(|d| clean_text(&d));

        let default = match correction.map_or(DefaultOverride::Keep, |c| c.default) {
            DefaultOverride::Literal(value) => Some(DefaultValue::Str(value.to_string())),
            DefaultOverride::Quote => default_text.map(DefaultValue::Str),
            DefaultOverride::Keep => shape_default(name, field_type, default_text)?,
        };

        let has_default = match &default {
            Some(DefaultValue::Str(s)) => !s.is_empty(),
            Some(_) => true,
            None => false,
        };
        let required = !has_default && parameter.optional() == Some(false);

        let field = DocumentationField {
            choices: self.choices(name, field_type, parameter.enum_values()),
            default,
            description: vec![describe(parameter.description())],
            elements: (field_type == AnsibleType::List)
                .then(|| correction.and_then(|c| c.elements).unwrap_or_default()),
            required,
            field_type,
        };
        field.check_consistency(name)?;

        if let Some(correction) = correction {
            debug!(
                template,
                parameter = name,
                native = %native_type,
                target = %field_type,
                default = ?correction.default,
                "Applied override"
            );
        } else {
            debug!(template, parameter = name, field_type = %field_type, "Normalized parameter");
        }

        Ok(Some((ParameterName::from(name), field)))
    }

    /// Splits and types the `Enum` annotation.
    fn choices(&self, parameter: &str, field_type: AnsibleType, raw: Option<&str>) -> Vec<Choice> {
        let cleaned = raw.map(clean_text).unwrap_or_default();
        if cleaned.is_empty() {
            return Vec::new();
        }

        let entries: Vec<String> = if let Some(tag) = cleaned.strip_prefix(TEMPLATE_CHOICE_PREFIX) {
            let tag = tag.trim();
            let Some(catalog) = self.catalog else {
                warn!(parameter, tag, "Choices refer to catalog templates but no catalog is loaded");
                return Vec::new();
            };
            let names = catalog.names_by_tag(tag);
            if names.is_empty() {
                warn!(parameter, tag, "No catalog template carries the referenced tag");
            }
            names
        } else {
            cleaned
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        };

        if field_type == AnsibleType::Int {
            let parsed: Option<Vec<i64>> = entries.iter().map(|e| parse_integer(e)).collect();
            if let Some(values) = parsed {
                return values.into_iter().map(Choice::Int).collect();
            }
            debug!(parameter, "Integer parameter has non-integer choices");
        }
        entries.into_iter().map(Choice::Str).collect()
    }
}

/// Type after overrides.
///
/// A quoted or literal default without an explicit target type forces a
/// string, unless the parameter is a list.
fn target_type(native: AnsibleType, correction: Option<&Correction>) -> AnsibleType {
    let Some(correction) = correction else {
        return native;
    };
    match correction.target_type {
        Some(target) => target,
        None if native == AnsibleType::List => native,
        None => match correction.default {
            DefaultOverride::Keep => native,
            DefaultOverride::Quote | DefaultOverride::Literal(_) => AnsibleType::Str,
        },
    }
}

/// Converts a cleaned default to the representation of `field_type`.
fn shape_default(
    parameter: &str,
    field_type: AnsibleType,
    text: Option<String>,
) -> Result<Option<DefaultValue>> {
    let Some(text) = text else {
        return Ok(None);
    };
    match field_type {
        AnsibleType::Str | AnsibleType::List => Ok(Some(DefaultValue::Str(text))),
        _ if text.is_empty() => Ok(None),
        AnsibleType::Int => parse_integer(&text)
            .map(|i| Some(DefaultValue::Int(i)))
            .ok_or_else(|| mismatch(parameter, field_type, &text)),
        AnsibleType::Bool => parse_bool_like(&text)
            .map(|b| Some(DefaultValue::Bool(b)))
            .ok_or_else(|| mismatch(parameter, field_type, &text)),
    }
}

fn mismatch(parameter: &str, field_type: AnsibleType, text: &str) -> Error {
    Error::SerializationError {
        message: format!("default '{text}' of parameter '{parameter}' is not a valid {field_type}"),
        source: None,
    }
}

fn describe(raw: Option<&str>) -> String {
    let description = raw.map(|d| strip_min_max(&clean_text(d))).unwrap_or_default();
    if description.is_empty() {
        NO_DESCRIPTION.to_string()
    } else {
        description
    }
}
