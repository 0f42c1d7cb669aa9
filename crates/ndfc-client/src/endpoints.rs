//! Controller REST endpoints.

use ndfc_core::TemplateName;

/// Login endpoint, relative to the controller base URL.
pub const LOGIN_PATH: &str = "/login";

/// Config template collection, relative to the controller base URL.
pub const TEMPLATES_PATH: &str = "/appcenter/cisco/ndfc/api/v1/configtemplate/rest/config/templates";

/// URL of the login endpoint.
///
/// # Examples
///
/// ```
/// use ndfc_client::endpoints::login_url;
///
/// assert_eq!(login_url("https://10.1.1.1"), "https://10.1.1.1/login");
/// ```
#[must_use]
pub fn login_url(base_url: &str) -> String {
    format!("{}{LOGIN_PATH}", base_url.trim_end_matches('/'))
}

/// URL listing every template.
#[must_use]
pub fn catalog_url(base_url: &str) -> String {
    format!("{}{TEMPLATES_PATH}", base_url.trim_end_matches('/'))
}

/// URL of a single template.
///
/// # Examples
///
/// ```
/// use ndfc_client::endpoints::template_url;
/// use ndfc_core::TemplateName;
///
/// let name = TemplateName::new("Easy_Fabric").unwrap();
/// assert_eq!(
///     template_url("https://10.1.1.1/", &name),
///     "https://10.1.1.1/appcenter/cisco/ndfc/api/v1/configtemplate/rest/config/templates/Easy_Fabric"
/// );
/// ```
#[must_use]
pub fn template_url(base_url: &str, name: &TemplateName) -> String {
    format!("{}/{}", catalog_url(base_url), name.as_str())
}
