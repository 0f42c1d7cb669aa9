//! Template retrieval from NDFC controllers.
//!
//! Provides the [`TemplateSource`](ndfc_core::traits::TemplateSource)
//! implementations used by the documentation pipeline:
//!
//! - [`ControllerClient`]: authenticated REST session against a live controller
//! - [`FileTemplateSource`]: templates previously saved as JSON files
//! - [`MemoryTemplateSource`]: in-memory fixtures
//!
//! The controller is never retried: a transport failure ends the run.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod controller;
pub mod endpoints;
pub mod file;
pub mod memory;
pub mod raw;

pub use controller::ControllerClient;
pub use file::FileTemplateSource;
pub use memory::MemoryTemplateSource;
