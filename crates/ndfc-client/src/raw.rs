//! Raw template inspection helpers.

use serde_json::Value;

/// Keys holding the template body (Python/Jinja source), which dwarf the
/// parameter metadata and are irrelevant to documentation.
pub const CONTENT_KEYS: &[&str] = &["content", "newContent"];

/// Removes [`CONTENT_KEYS`] from a raw template object.
///
/// Non-object values are left untouched.
///
/// # Examples
///
/// ```
/// use ndfc_client::raw::strip_content;
/// use serde_json::json;
///
/// let mut template = json!({"name": "LAN_Classic", "content": "...", "newContent": "..."});
/// strip_content(&mut template);
/// assert_eq!(template, json!({"name": "LAN_Classic"}));
/// ```
pub fn strip_content(template: &mut Value) {
    if let Value::Object(map) = template {
        for key in CONTENT_KEYS {
            map.remove(*key);
        }
    }
}
