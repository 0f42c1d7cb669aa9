//! Corrections for parameters the controller types or defaults wrongly.
//!
//! The controller reports some numeric tags as strings, some string values as
//! integers, and some lists as plain strings. Each known case is listed in
//! [`BUILTIN_CORRECTIONS`]; the table changes only when a template changes,
//! and every change bumps [`OVERRIDE_TABLE_VERSION`].

use crate::types::{AnsibleType, ElementType};

/// Version of [`BUILTIN_CORRECTIONS`].
pub const OVERRIDE_TABLE_VERSION: u32 = 1;

/// How a correction treats the parameter's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultOverride {
    /// Shape the default for the target type
    Keep,
    /// Emit the controller's default as a string, whatever it looks like
    Quote,
    /// Replace the default with this string
    Literal(&'static str),
}

/// A fix-up for one parameter, optionally limited to one template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Correction {
    /// Parameter name, after typo correction
    pub parameter: &'static str,
    /// Template the correction is limited to; `None` applies everywhere
    pub template: Option<&'static str>,
    /// Replacement type
    pub target_type: Option<AnsibleType>,
    /// Default handling
    pub default: DefaultOverride,
    /// Element type for list targets
    pub elements: Option<ElementType>,
}

impl Correction {
    const fn retype(parameter: &'static str, target_type: AnsibleType) -> Self {
        Self {
            parameter,
            template: None,
            target_type: Some(target_type),
            default: DefaultOverride::Keep,
            elements: None,
        }
    }

    const fn quoted_str(parameter: &'static str) -> Self {
        Self {
            parameter,
            template: None,
            target_type: Some(AnsibleType::Str),
            default: DefaultOverride::Quote,
            elements: None,
        }
    }

    const fn str_list(parameter: &'static str) -> Self {
        Self {
            parameter,
            template: None,
            target_type: Some(AnsibleType::List),
            default: DefaultOverride::Keep,
            elements: Some(ElementType::Str),
        }
    }
}

/// Corrections shipped with the tool.
pub const BUILTIN_CORRECTIONS: &[Correction] = &[
    Correction::retype("MS_IFC_BGP_AUTH_KEY_TYPE", AnsibleType::Int),
    Correction::retype("BGP_AUTH_KEY_TYPE", AnsibleType::Int),
    Correction::quoted_str("BGW_ROUTING_TAG"),
    Correction::retype("RS_ROUTING_TAG", AnsibleType::Int),
    Correction::quoted_str("STP_BRIDGE_PRIORITY"),
    Correction::quoted_str("VPC_PEER_LINK_PO"),
    Correction::quoted_str("VPC_PEER_LINK_VLAN"),
    Correction {
        parameter: "MST_INSTANCE_RANGE",
        template: None,
        target_type: Some(AnsibleType::Str),
        default: DefaultOverride::Literal("0"),
        elements: None,
    },
    Correction {
        parameter: "LINK_STATE_ROUTING_TAG",
        template: Some("Easy_Fabric_IPFM"),
        target_type: None,
        default: DefaultOverride::Literal("1"),
        elements: None,
    },
    Correction::str_list("NETFLOW_EXPORTER_LIST"),
    Correction::str_list("NETFLOW_MONITOR_LIST"),
    Correction::str_list("NETFLOW_RECORD_LIST"),
    Correction::str_list("NETFLOW_SAMPLER_LIST"),
    Correction::str_list("ASM_GROUP_RANGES"),
];

/// Lookup over a set of [`Correction`]s.
///
/// # Examples
///
/// ```
/// use ndfc_docgen::{AnsibleType, OverrideTable};
///
/// let table = OverrideTable::builtin();
/// let fix = table.lookup("RS_ROUTING_TAG", "Easy_Fabric").unwrap();
/// assert_eq!(fix.target_type, Some(AnsibleType::Int));
///
/// assert!(table.lookup("LINK_STATE_ROUTING_TAG", "Easy_Fabric").is_none());
/// assert!(table.lookup("LINK_STATE_ROUTING_TAG", "Easy_Fabric_IPFM").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct OverrideTable {
    version: u32,
    corrections: Vec<Correction>,
}

impl OverrideTable {
    /// Returns the built-in table.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            version: OVERRIDE_TABLE_VERSION,
            corrections: BUILTIN_CORRECTIONS.to_vec(),
        }
    }

    /// Returns a table without corrections, so every parameter passes
    /// through with its controller-reported shape.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            version: OVERRIDE_TABLE_VERSION,
            corrections: Vec::new(),
        }
    }

    /// Adds a correction.
    #[must_use]
    pub fn with(mut self, correction: Correction) -> Self {
        self.corrections.push(correction);
        self
    }

    /// Returns the table version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns all corrections.
    #[must_use]
    pub fn corrections(&self) -> &[Correction] {
        &self.corrections
    }

    /// Finds the correction for `parameter` in `template`.
    ///
    /// A correction scoped to `template` wins over an unscoped one.
    #[must_use]
    pub fn lookup(&self, parameter: &str, template: &str) -> Option<&Correction> {
        let mut candidates = self
            .corrections
            .iter()
            .filter(|c| c.parameter == parameter)
            .filter(|c| c.template.is_none_or(|t| t == template));
        let first = candidates.next()?;
        if first.template.is_some() {
            return Some(first);
        }
        Some(candidates.find(|c| c.template.is_some()).unwrap_or(first))
    }
}

impl Default for OverrideTable {
    fn default() -> Self {
        Self::builtin()
    }
}
