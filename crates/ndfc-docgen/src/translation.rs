//! Controller type tags and parameter names mapped to their documented form.

use crate::types::AnsibleType;

/// Controller type tag to Ansible type.
///
/// Tags are matched exactly; the controller is inconsistent about case, so
/// each spelling seen in the wild is listed.
pub const NATIVE_TYPES: &[(&str, AnsibleType)] = &[
    ("bool", AnsibleType::Bool),
    ("boolean", AnsibleType::Bool),
    ("BOOLEAN", AnsibleType::Bool),
    ("enum", AnsibleType::Str),
    ("int", AnsibleType::Int),
    ("integer", AnsibleType::Int),
    ("INT", AnsibleType::Int),
    ("INTEGER", AnsibleType::Int),
    ("interfaceRange", AnsibleType::Str),
    ("integerRange", AnsibleType::Str),
    ("ipAddress", AnsibleType::Str),
    ("ipAddressList", AnsibleType::Str),
    ("ipV4Address", AnsibleType::Str),
    ("ipV4AddressWithSubnet", AnsibleType::Str),
    ("ipV6Address", AnsibleType::Str),
    ("ipV6AddressWithSubnet", AnsibleType::Str),
    ("ipv4", AnsibleType::Str),
    ("ipv6", AnsibleType::Str),
    ("ipv4_subnet", AnsibleType::Str),
    ("ipv6_subnet", AnsibleType::Str),
    ("list", AnsibleType::List),
    ("macAddress", AnsibleType::Str),
    ("str", AnsibleType::Str),
    ("string", AnsibleType::Str),
    ("string[]", AnsibleType::Str),
    ("STRING", AnsibleType::Str),
    ("structureArray", AnsibleType::List),
];

/// Parameter names the controller misspells, with their corrections.
pub const NAME_CORRECTIONS: &[(&str, &str)] = &[
    (
        "DEAFULT_QUEUING_POLICY_CLOUDSCALE",
        "DEFAULT_QUEUING_POLICY_CLOUDSCALE",
    ),
    ("DEAFULT_QUEUING_POLICY_OTHER", "DEFAULT_QUEUING_POLICY_OTHER"),
    (
        "DEAFULT_QUEUING_POLICY_R_SERIES",
        "DEFAULT_QUEUING_POLICY_R_SERIES",
    ),
];

/// Maps a controller type tag to its Ansible type.
///
/// # Examples
///
/// ```
/// use ndfc_docgen::AnsibleType;
/// use ndfc_docgen::translation::translate_type;
///
/// assert_eq!(translate_type("ipV4AddressWithSubnet"), Some(AnsibleType::Str));
/// assert_eq!(translate_type("structureArray"), Some(AnsibleType::List));
/// assert_eq!(translate_type("float"), None);
/// ```
#[must_use]
pub fn translate_type(tag: &str) -> Option<AnsibleType> {
    NATIVE_TYPES
        .iter()
        .find(|(native, _)| *native == tag)
        .map(|(_, target)| *target)
}

/// Returns the corrected spelling of a parameter name.
#[must_use]
pub fn translate_name(name: &str) -> &str {
    NAME_CORRECTIONS
        .iter()
        .find(|(typo, _)| *typo == name)
        .map_or(name, |(_, fixed)| fixed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_case_variant_is_mapped() {
        for tag in ["bool", "boolean", "BOOLEAN"] {
            assert_eq!(translate_type(tag), Some(AnsibleType::Bool), "{tag}");
        }
        for tag in ["int", "integer", "INT", "INTEGER"] {
            assert_eq!(translate_type(tag), Some(AnsibleType::Int), "{tag}");
        }
        for tag in ["str", "string", "STRING", "string[]", "enum", "macAddress"] {
            assert_eq!(translate_type(tag), Some(AnsibleType::Str), "{tag}");
        }
    }

    #[test]
    fn test_unknown_tags() {
        assert_eq!(translate_type(""), None);
        assert_eq!(translate_type("Integer"), None);
        assert_eq!(translate_type("dict"), None);
    }

    #[test]
    fn test_tags_are_unique() {
        let mut tags: Vec<_> = NATIVE_TYPES.iter().map(|(t, _)| *t).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), NATIVE_TYPES.len());
    }

    #[test]
    fn test_translate_name() {
        assert_eq!(
            translate_name("DEAFULT_QUEUING_POLICY_OTHER"),
            "DEFAULT_QUEUING_POLICY_OTHER"
        );
        assert_eq!(translate_name("BGP_AS"), "BGP_AS");
    }
}
