//! Authenticated REST session against a live controller.
//!
//! One login, then plain GETs carrying the bearer token. There are no
//! retries: any transport failure is returned to the caller as
//! [`Error::ConnectionFailed`].

use crate::endpoints;
use async_trait::async_trait;
use ndfc_core::traits::TemplateSource;
use ndfc_core::{ControllerConfig, Error, Result, TemplateName};
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Longest response body kept in an error message.
const MAX_ERROR_BODY: usize = 512;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    user_name: &'a str,
    user_passwd: &'a str,
    domain: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    jwttoken: Option<String>,
}

/// REST client holding one authenticated controller session.
///
/// # Examples
///
/// ```no_run
/// use ndfc_client::ControllerClient;
/// use ndfc_core::traits::TemplateSource;
/// use ndfc_core::{ControllerConfig, TemplateName};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> ndfc_core::Result<()> {
/// let config = ControllerConfig::builder()
///     .ip4("10.1.1.1")
///     .password("secret")
///     .build()?;
///
/// let client = ControllerClient::login(&config).await?;
/// let template = client
///     .fetch_template(&TemplateName::new("Easy_Fabric")?)
///     .await?;
/// println!("{} parameters", template.parameters().len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ControllerClient {
    http: reqwest::Client,
    base_url: String,
    controller: String,
    token: SecretString,
}

impl ControllerClient {
    /// Opens a session: builds the HTTP client and logs in.
    ///
    /// # Errors
    ///
    /// - [`Error::ConnectionFailed`] if the controller is unreachable
    /// - [`Error::AuthenticationFailed`] if the credentials are rejected or
    ///   the response carries no `jwttoken`
    /// - [`Error::UnexpectedResponse`] for any other non-success status
    pub async fn login(config: &ControllerConfig) -> Result<Self> {
        let controller = config.ip4().to_string();

        if !config.verify_tls() {
            warn!(controller = %controller, "TLS certificate verification is disabled");
        }

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .danger_accept_invalid_certs(!config.verify_tls())
            .build()
            .map_err(|e| Error::ConnectionFailed {
                controller: controller.clone(),
                source: Box::new(e),
            })?;

        let base_url = config.base_url();
        let url = endpoints::login_url(&base_url);
        info!(controller = %controller, user = config.username(), "Logging in to controller");

        let request = LoginRequest {
            user_name: config.username(),
            user_passwd: config.password(),
            domain: config.domain(),
        };

        let response = http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::ConnectionFailed {
                controller: controller.clone(),
                source: Box::new(e),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| Error::ConnectionFailed {
            controller: controller.clone(),
            source: Box::new(e),
        })?;
        check_login_status(status, &url, &controller, &body)?;

        let token = parse_login_token(&body).ok_or_else(|| Error::AuthenticationFailed {
            controller: controller.clone(),
            reason: "response missing jwttoken; check username, password and domain".to_string(),
        })?;

        debug!(controller = %controller, "Login succeeded");

        Ok(Self {
            http,
            base_url,
            controller,
            token: SecretString::from(token),
        })
    }

    /// Base URL of the controller this session talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json(&self, url: &str, template: Option<&TemplateName>) -> Result<Value> {
        debug!(url, "GET");

        let response = self
            .http
            .get(url)
            .bearer_auth(self.token.expose_secret())
            .send()
            .await
            .map_err(|e| Error::ConnectionFailed {
                controller: self.controller.clone(),
                source: Box::new(e),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| Error::ConnectionFailed {
            controller: self.controller.clone(),
            source: Box::new(e),
        })?;
        check_get_status(status, url, &self.controller, template, &body)?;

        let value: Value = serde_json::from_str(&body).map_err(|e| Error::InvalidTemplate {
            message: format!("response from {url} is not JSON: {e}"),
        })?;

        if value.is_null()
            && let Some(name) = template
        {
            return Err(Error::TemplateNotFound {
                template: name.to_string(),
            });
        }

        Ok(value)
    }
}

#[async_trait]
impl TemplateSource for ControllerClient {
    async fn fetch_raw_template(&self, name: &TemplateName) -> Result<Value> {
        info!(template = %name, controller = %self.controller, "Retrieving template");
        let url = endpoints::template_url(&self.base_url, name);
        self.get_json(&url, Some(name)).await
    }

    async fn fetch_raw_catalog(&self) -> Result<Value> {
        info!(controller = %self.controller, "Retrieving all templates");
        let url = endpoints::catalog_url(&self.base_url);
        self.get_json(&url, None).await
    }

    fn describe(&self) -> String {
        format!("controller {}", self.controller)
    }
}

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

fn parse_login_token(body: &str) -> Option<String> {
    serde_json::from_str::<LoginResponse>(body)
        .ok()
        .and_then(|r| r.jwttoken)
        .filter(|t| !t.is_empty())
}

fn check_login_status(status: StatusCode, url: &str, controller: &str, body: &str) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
        return Err(Error::AuthenticationFailed {
            controller: controller.to_string(),
            reason: format!("login rejected with HTTP {}", status.as_u16()),
        });
    }
    Err(Error::UnexpectedResponse {
        url: url.to_string(),
        status: status.as_u16(),
        body: truncate_body(body),
    })
}

fn check_get_status(
    status: StatusCode,
    url: &str,
    controller: &str,
    template: Option<&TemplateName>,
    body: &str,
) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(Error::AuthenticationFailed {
            controller: controller.to_string(),
            reason: format!("request to {url} rejected with HTTP {}", status.as_u16()),
        }),
        StatusCode::NOT_FOUND if template.is_some() => Err(Error::TemplateNotFound {
            template: template.map(ToString::to_string).unwrap_or_default(),
        }),
        _ => Err(Error::UnexpectedResponse {
            url: url.to_string(),
            status: status.as_u16(),
            body: truncate_body(body),
        }),
    }
}
