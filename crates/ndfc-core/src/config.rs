//! Controller connection configuration.
//!
//! Read once at start-up from the environment or command line and immutable
//! for the rest of the run.
//!
//! # Examples
//!
//! ```
//! use ndfc_core::ControllerConfig;
//! use std::time::Duration;
//!
//! let config = ControllerConfig::builder()
//!     .ip4("10.1.1.1")
//!     .username("admin")
//!     .password("secret")
//!     .request_timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://10.1.1.1");
//! assert_eq!(config.domain(), "local");
//! ```

use crate::{Error, Result};
use secrecy::{ExposeSecret, SecretString};
use std::net::Ipv4Addr;
use std::time::Duration;

/// Default login domain.
pub const DEFAULT_DOMAIN: &str = "local";

/// Default login user.
pub const DEFAULT_USERNAME: &str = "admin";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Connection settings for one controller session.
///
/// The password is held in a [`SecretString`] and never appears in `Debug`
/// output or logs.
#[derive(Debug)]
pub struct ControllerConfig {
    ip4: Ipv4Addr,
    username: String,
    password: SecretString,
    domain: String,
    request_timeout: Duration,
    verify_tls: bool,
}

impl ControllerConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> ControllerConfigBuilder {
        ControllerConfigBuilder::new()
    }

    /// Controller IPv4 address.
    #[must_use]
    pub const fn ip4(&self) -> Ipv4Addr {
        self.ip4
    }

    /// Login user.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Login password.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }

    /// Authentication domain.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Per-request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Whether the controller certificate is verified.
    ///
    /// Controllers commonly ship self-signed certificates, so this is off
    /// unless requested.
    #[must_use]
    pub const fn verify_tls(&self) -> bool {
        self.verify_tls
    }

    /// Base URL of the controller, e.g. `https://10.1.1.1`.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("https://{}", self.ip4)
    }
}

/// Builder for [`ControllerConfig`].
#[derive(Debug, Default)]
pub struct ControllerConfigBuilder {
    ip4: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    domain: Option<String>,
    request_timeout: Option<Duration>,
    verify_tls: bool,
}

impl ControllerConfigBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the controller IPv4 address.
    #[must_use]
    pub fn ip4(mut self, ip4: impl Into<String>) -> Self {
        self.ip4 = Some(ip4.into());
        self
    }

    /// Sets the login user (default `admin`).
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the login password.
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(SecretString::from(password.into()));
        self
    }

    /// Sets the authentication domain (default `local`).
    #[must_use]
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Sets the per-request timeout (default 20 seconds).
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Enables or disables TLS certificate verification.
    #[must_use]
    pub const fn verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }

    /// Validates the settings and builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the address is missing or not an
    /// IPv4 address, the password is missing, the user or domain is empty,
    /// or the timeout is zero.
    pub fn build(self) -> Result<ControllerConfig> {
        let raw_ip4 = self.ip4.ok_or_else(|| Error::ConfigError {
            message: "controller address is not set (e.g. export NDFC_IP4=10.1.1.1)".to_string(),
        })?;
        let ip4 = raw_ip4
            .trim()
            .parse::<Ipv4Addr>()
            .map_err(|_| Error::ConfigError {
                message: format!("'{raw_ip4}' is not a valid IPv4 address"),
            })?;

        let password = self.password.ok_or_else(|| Error::ConfigError {
            message: "controller password is not set (e.g. export NDFC_PASSWORD=mypassword)"
                .to_string(),
        })?;
        if password.expose_secret().is_empty() {
            return Err(Error::ConfigError {
                message: "controller password cannot be empty".to_string(),
            });
        }

        let username = self
            .username
            .unwrap_or_else(|| DEFAULT_USERNAME.to_string());
        if username.trim().is_empty() {
            return Err(Error::ConfigError {
                message: "controller username cannot be empty".to_string(),
            });
        }

        let domain = self.domain.unwrap_or_else(|| DEFAULT_DOMAIN.to_string());
        if domain.trim().is_empty() {
            return Err(Error::ConfigError {
                message: "authentication domain cannot be empty".to_string(),
            });
        }

        let request_timeout = self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT);
        if request_timeout.is_zero() {
            return Err(Error::ConfigError {
                message: "request timeout must be greater than zero".to_string(),
            });
        }

        Ok(ControllerConfig {
            ip4,
            username,
            password,
            domain,
            request_timeout,
            verify_tls: self.verify_tls,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ControllerConfigBuilder {
        ControllerConfig::builder().ip4("10.1.1.1").password("pw")
    }

    #[test]
    fn test_defaults() {
        let config = base().build().unwrap();
        assert_eq!(config.username(), "admin");
        assert_eq!(config.domain(), "local");
        assert_eq!(config.request_timeout(), Duration::from_secs(20));
        assert!(!config.verify_tls());
    }

    #[test]
    fn test_missing_address() {
        let err = ControllerConfig::builder().password("pw").build().unwrap_err();
        assert!(err.to_string().contains("NDFC_IP4"));
    }

    #[test]
    fn test_invalid_address() {
        let err = base().ip4("controller.example.com").build().unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_missing_password() {
        let err = ControllerConfig::builder()
            .ip4("10.1.1.1")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("NDFC_PASSWORD"));
    }

    #[test]
    fn test_empty_password_rejected() {
        assert!(base().password("").build().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(base().request_timeout(Duration::ZERO).build().is_err());
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = base().password("hunter2").build().unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
        assert_eq!(config.password(), "hunter2");
    }
}
