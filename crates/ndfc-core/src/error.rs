//! Error types for NDFC template documentation.
//!
//! Every failure aborts the run: there are no retries and no partial output.
//! The variants fall into four fatal kinds surfaced to the operator
//! (authentication, missing template, unsupported type, serialization) plus
//! the transport, configuration, and I/O failures around them.
//!
//! # Examples
//!
//! ```
//! use ndfc_core::{Error, Result};
//!
//! fn require_template(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(Error::ConfigError {
//!             message: "Template name cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = require_template("").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for NDFC template documentation.
///
/// All library crates in the workspace return this type.
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication with the controller failed.
    ///
    /// Raised for rejected credentials or a login response without a token.
    #[error("Authentication with controller {controller} failed: {reason}")]
    AuthenticationFailed {
        /// Address of the controller
        controller: String,
        /// Why the login was rejected
        reason: String,
    },

    /// The controller could not be reached.
    #[error("Controller connection failed: {controller}")]
    ConnectionFailed {
        /// Address of the controller
        controller: String,
        /// Underlying transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The controller answered with a status the client does not handle.
    #[error("Unexpected response from {url}: HTTP {status}")]
    UnexpectedResponse {
        /// Request URL
        url: String,
        /// HTTP status code
        status: u16,
        /// Response body, possibly truncated
        body: String,
    },

    /// The requested template is unknown to the controller.
    #[error("Template not found: {template}")]
    TemplateNotFound {
        /// Requested template name
        template: String,
    },

    /// A parameter carries a type tag the normalizer has no mapping for.
    ///
    /// The mapping must be extended by a maintainer; this is never recovered.
    #[error("Unsupported type '{type_tag}' for parameter '{parameter}'")]
    UnsupportedType {
        /// Parameter name
        parameter: String,
        /// Type tag reported by the controller
        type_tag: String,
    },

    /// Rendering failed, or a normalized default does not fit its type.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serializer error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The template payload does not have the expected shape.
    #[error("Invalid template: {message}")]
    InvalidTemplate {
        /// Description of the problem
        message: String,
    },

    /// Two parameters of one template share a name.
    #[error("Duplicate parameter '{parameter}' in template '{template}'")]
    DuplicateParameter {
        /// Template name
        template: String,
        /// Repeated parameter name
        parameter: String,
    },

    /// Configuration error.
    ///
    /// Raised when configuration is invalid or missing required fields.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Invalid argument error.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Filesystem error while reading or writing a template file.
    #[error("I/O error on {}", path.display())]
    Io {
        /// Path involved in the failed operation
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns `true` if this is an authentication error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndfc_core::Error;
    ///
    /// let err = Error::AuthenticationFailed {
    ///     controller: "10.1.1.1".to_string(),
    ///     reason: "missing jwttoken".to_string(),
    /// };
    /// assert!(err.is_authentication_error());
    /// ```
    #[must_use]
    pub const fn is_authentication_error(&self) -> bool {
        matches!(self, Self::AuthenticationFailed { .. })
    }

    /// Returns `true` if this is a connection or unexpected-response error.
    #[must_use]
    pub const fn is_connection_error(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed { .. } | Self::UnexpectedResponse { .. }
        )
    }

    /// Returns `true` if the requested template does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndfc_core::Error;
    ///
    /// let err = Error::TemplateNotFound {
    ///     template: "Easy_Fabric".to_string(),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::TemplateNotFound { .. })
    }

    /// Returns `true` if this is an unsupported type error.
    #[must_use]
    pub const fn is_unsupported_type(&self) -> bool {
        matches!(self, Self::UnsupportedType { .. })
    }

    /// Returns `true` if this is a serialization error.
    #[must_use]
    pub const fn is_serialization_error(&self) -> bool {
        matches!(self, Self::SerializationError { .. })
    }

    /// Returns `true` if this is a configuration or argument error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. } | Self::InvalidArgument(_))
    }

    /// Returns `true` if the template payload itself is malformed.
    #[must_use]
    pub const fn is_invalid_template(&self) -> bool {
        matches!(
            self,
            Self::InvalidTemplate { .. } | Self::DuplicateParameter { .. }
        )
    }
}

/// Result type alias for NDFC documentation operations.
pub type Result<T> = std::result::Result<T, Error>;
