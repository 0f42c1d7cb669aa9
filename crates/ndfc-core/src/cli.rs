//! CLI-specific types and utilities.
//!
//! # Examples
//!
//! ```
//! use ndfc_core::cli::{ExitCode, OutputFormat};
//!
//! let format: OutputFormat = "json".parse().unwrap();
//! assert_eq!(format, OutputFormat::Json);
//!
//! assert_eq!(ExitCode::SUCCESS.as_i32(), 0);
//! ```

use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Serialization format of the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// YAML, ready to paste into a `DOCUMENTATION` block
    #[default]
    Yaml,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Returns the string representation of the format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(Error::InvalidArgument(format!(
                "invalid output format: '{s}' (expected: yaml or json)"
            ))),
        }
    }
}

/// CLI exit code with semantic meaning.
///
/// # Examples
///
/// ```
/// use ndfc_core::Error;
/// use ndfc_core::cli::ExitCode;
///
/// let err = Error::TemplateNotFound { template: "Nope".to_string() };
/// assert_eq!(ExitCode::from_error(&err), ExitCode::NOT_FOUND);
/// assert!(!ExitCode::NOT_FOUND.is_success());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Successful execution (exit code 0).
    pub const SUCCESS: Self = Self(0);

    /// General error (exit code 1).
    pub const ERROR: Self = Self(1);

    /// Invalid input or arguments (exit code 2).
    pub const INVALID_INPUT: Self = Self(2);

    /// Controller connection, authentication or response error (exit code 3).
    pub const SERVER_ERROR: Self = Self(3);

    /// Requested template does not exist (exit code 4).
    pub const NOT_FOUND: Self = Self(4);

    /// Creates an exit code from an integer value.
    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        Self(code)
    }

    /// Picks the exit code that best describes `error`.
    #[must_use]
    pub const fn from_error(error: &Error) -> Self {
        match error {
            Error::AuthenticationFailed { .. }
            | Error::ConnectionFailed { .. }
            | Error::UnexpectedResponse { .. } => Self::SERVER_ERROR,
            Error::TemplateNotFound { .. } => Self::NOT_FOUND,
            Error::ConfigError { .. } | Error::InvalidArgument(_) => Self::INVALID_INPUT,
            Error::UnsupportedType { .. }
            | Error::SerializationError { .. }
            | Error::InvalidTemplate { .. }
            | Error::DuplicateParameter { .. }
            | Error::Io { .. } => Self::ERROR,
        }
    }

    /// Returns the exit code as an integer.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Checks if the exit code represents success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 == 0
    }
}

impl Default for ExitCode {
    fn default() -> Self {
        Self::SUCCESS
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("yaml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("YML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("Json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("pretty".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_default_is_yaml() {
        assert_eq!(OutputFormat::default(), OutputFormat::Yaml);
        assert_eq!(OutputFormat::default().to_string(), "yaml");
    }

    #[test]
    fn test_exit_code_mapping() {
        let auth = Error::AuthenticationFailed {
            controller: "10.1.1.1".to_string(),
            reason: "denied".to_string(),
        };
        assert_eq!(ExitCode::from_error(&auth), ExitCode::SERVER_ERROR);

        let unsupported = Error::UnsupportedType {
            parameter: "X".to_string(),
            type_tag: "float".to_string(),
        };
        assert_eq!(ExitCode::from_error(&unsupported), ExitCode::ERROR);

        let config = Error::ConfigError {
            message: "missing".to_string(),
        };
        assert_eq!(ExitCode::from_error(&config), ExitCode::INVALID_INPUT);
    }

    #[test]
    fn test_exit_code_conversion() {
        let code: i32 = ExitCode::NOT_FOUND.into();
        assert_eq!(code, 4);
        assert_eq!(ExitCode::from_i32(0), ExitCode::SUCCESS);
        assert_eq!(ExitCode::default().to_string(), "0");
    }
}
