//! Core types, traits, and errors for NDFC template documentation.
//!
//! This crate provides the foundational types and abstractions used across
//! all other crates in the workspace.
//!
//! # Architecture
//!
//! The core consists of:
//! - Strong domain types (`TemplateName`, `ParameterName`)
//! - The controller template model (`Template`, `TemplateParameter`, `TemplateCatalog`)
//! - Error hierarchy with contextual information
//! - The `TemplateSource` trait isolating the controller fetch
//! - Controller configuration and CLI primitives

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod error;
mod template;
mod types;

pub mod cli;
pub mod config;
pub mod text;
pub mod traits;

pub use config::{ControllerConfig, ControllerConfigBuilder};
pub use error::{Error, Result};
pub use template::{
    Annotations, CatalogEntry, MetaProperties, Template, TemplateCatalog, TemplateParameter,
};
pub use types::{ParameterName, TemplateName};
