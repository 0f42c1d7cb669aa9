//! Ansible documentation generation for NDFC templates.
//!
//! Turns a fetched [`Template`](ndfc_core::Template) into the YAML
//! argument-specification block of an Ansible module:
//!
//! 1. [`FieldNormalizer`] maps each controller parameter to a
//!    [`DocumentationField`], correcting the controller's loose typing with
//!    the [`OverrideTable`].
//! 2. [`Renderer`] serializes the normalized fields as YAML (or JSON),
//!    either as a bare option mapping or wrapped in a full
//!    [`ModuleDocumentation`].
//!
//! Both stages are pure: no I/O besides `tracing` events.
//!
//! # Examples
//!
//! ```
//! use ndfc_core::Template;
//! use ndfc_core::cli::OutputFormat;
//! use ndfc_docgen::{FieldNormalizer, OverrideTable, Renderer};
//! use serde_json::json;
//!
//! let template = Template::from_value(json!({
//!     "name": "Easy_Fabric",
//!     "parameters": [{
//!         "name": "RS_ROUTING_TAG",
//!         "parameterType": "string",
//!         "defaultValue": "54321",
//!         "optional": true
//!     }]
//! })).unwrap();
//!
//! let overrides = OverrideTable::builtin();
//! let normalized = FieldNormalizer::new(&overrides).normalize(&template).unwrap();
//! let yaml = Renderer::new(OutputFormat::Yaml).render_options(&normalized).unwrap();
//!
//! assert!(yaml.contains("default: 54321"));
//! assert!(yaml.contains("type: int"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod module;
pub mod normalizer;
pub mod overrides;
mod quoting;
pub mod renderer;
pub mod translation;
pub mod types;

pub use module::{ModuleDocumentation, ModuleMetadata};
pub use normalizer::{FieldNormalizer, NormalizedTemplate};
pub use overrides::{Correction, DefaultOverride, OVERRIDE_TABLE_VERSION, OverrideTable};
pub use renderer::Renderer;
pub use types::{AnsibleType, Choice, DefaultValue, DocumentationField, ElementType};
