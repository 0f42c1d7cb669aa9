//! Core traits for NDFC template documentation.
//!
//! - [`TemplateSource`]: fetch a named template (and the template catalog)
//!
//! Keeping the controller behind this seam lets the normalizer and renderer
//! stay pure and testable without network access.

mod source;

pub use source::TemplateSource;
