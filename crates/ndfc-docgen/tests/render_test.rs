//! End-to-end tests: raw template JSON through normalization to rendered YAML.

use ndfc_client::MemoryTemplateSource;
use ndfc_core::cli::OutputFormat;
use ndfc_core::traits::TemplateSource;
use ndfc_core::{Template, TemplateName};
use ndfc_docgen::overrides::BUILTIN_CORRECTIONS;
use ndfc_docgen::{
    AnsibleType, DefaultOverride, FieldNormalizer, ModuleDocumentation, ModuleMetadata,
    OverrideTable, Renderer,
};
use serde_json::{Value, json};
use serde_yaml::Value as Yaml;
use std::collections::BTreeSet;

fn easy_fabric() -> Value {
    json!({
        "name": "Easy_Fabric",
        "description": "Fabric for a VXLAN EVPN deployment with Nexus 9000 and 3000 switches.",
        "templateType": "FABRIC",
        "content": "##template properties ... very long ...",
        "parameters": [
            {
                "name": "FABRIC_NAME",
                "parameterType": "string",
                "optional": false,
                "annotations": {"Description": "Please provide the fabric name to create it (Max Size 64)"}
            },
            {
                "name": "BGP_AS",
                "parameterType": "asn",
                "optional": false,
                "annotations": {"IsInternal": "true"}
            },
            {
                "name": "RS_ROUTING_TAG",
                "parameterType": "string",
                "defaultValue": "54321",
                "optional": true,
                "annotations": {"Description": "Route-map tag for redistribution"}
            },
            {
                "name": "MST_INSTANCE_RANGE",
                "parameterType": "string",
                "defaultValue": "0",
                "optional": true,
                "annotations": {"Description": "MST instance range, Example: 0-3,5,7-9, Default is 0"}
            },
            {
                "name": "NETFLOW_EXPORTER_LIST",
                "parameterType": "list",
                "defaultValue": "",
                "optional": true,
                "annotations": {"Description": "One or Multiple Netflow Exporters"}
            },
            {
                "name": "STP_BRIDGE_PRIORITY",
                "parameterType": "enum",
                "metaProperties": {"defaultValue": "0"},
                "optional": true,
                "annotations": {
                    "Description": "Bridge priority for the spanning tree in increments of 4096",
                    "Enum": "\"0,4096,8192,12288\""
                }
            },
            {
                "name": "BGP_AUTH_KEY_TYPE",
                "parameterType": "enum",
                "defaultValue": "3",
                "optional": true,
                "annotations": {"Description": "BGP Key Encryption Type: 3 - 3DES, 7 - Cisco", "Enum": "\"3,7\""}
            },
            {
                "name": "REPLICATION_MODE",
                "parameterType": "enum",
                "defaultValue": "Multicast",
                "optional": true,
                "annotations": {
                    "Description": "Replication Mode for BUM Traffic",
                    "Enum": "\"Multicast,Ingress\""
                }
            },
            {
                "name": "RR_COUNT",
                "parameterType": "integer",
                "defaultValue": "2",
                "optional": true,
                "annotations": {"Description": "Number of spines acting as Route-Reflectors (Min: 2, Max: 4)"}
            },
            {
                "name": "ENABLE_NETFLOW",
                "parameterType": "boolean",
                "defaultValue": "false",
                "optional": true,
                "annotations": {"Description": "Enable Netflow on VTEPs"}
            },
            {
                "name": "DEAFULT_QUEUING_POLICY_OTHER",
                "parameterType": "enum",
                "defaultValue": "queuing_policy_default_other",
                "optional": true,
                "annotations": {"Description": "Queuing Policy for all other switches in the fabric"}
            },
            {
                "name": "abstract_feature",
                "parameterType": "string",
                "annotations": {"Section": "\"Hidden\""}
            }
        ]
    })
}

fn template() -> Template {
    Template::from_value(easy_fabric()).unwrap()
}

fn render(template: &Template) -> String {
    let overrides = OverrideTable::builtin();
    let normalized = FieldNormalizer::new(&overrides).normalize(template).unwrap();
    Renderer::new(OutputFormat::Yaml)
        .render_options(&normalized)
        .unwrap()
}

fn parsed(yaml: &str) -> Yaml {
    serde_yaml::from_str(yaml).unwrap()
}

/// Returns the raw YAML lines documenting `parameter`.
fn block<'a>(yaml: &'a str, parameter: &str) -> Vec<&'a str> {
    let header = format!("{parameter}:");
    yaml.lines()
        .skip_while(|line| *line != header)
        .skip(1)
        .take_while(|line| line.starts_with(' '))
        .collect()
}

#[test]
fn test_rs_routing_tag_becomes_integer() {
    let yaml = render(&template());
    let doc = parsed(&yaml);
    let field = &doc["RS_ROUTING_TAG"];
    assert_eq!(field["type"], Yaml::from("int"));
    assert_eq!(field["default"], Yaml::from(54321));
    assert_eq!(field["required"], Yaml::from(false));
    assert!(block(&yaml, "RS_ROUTING_TAG").contains(&"  default: 54321"));
}

#[test]
fn test_mst_instance_range_default_is_quoted() {
    let yaml = render(&template());
    let field = &parsed(&yaml)["MST_INSTANCE_RANGE"];
    assert_eq!(field["type"], Yaml::from("str"));
    assert_eq!(field["default"], Yaml::from("0"));
    assert_eq!(field["required"], Yaml::from(false));
    assert!(block(&yaml, "MST_INSTANCE_RANGE").contains(&"  default: '0'"));
}

#[test]
fn test_netflow_exporter_list_has_elements() {
    let yaml = render(&template());
    let field = &parsed(&yaml)["NETFLOW_EXPORTER_LIST"];
    assert_eq!(field["type"], Yaml::from("list"));
    assert_eq!(field["elements"], Yaml::from("str"));
    assert_eq!(field["default"], Yaml::from(""));
    assert_eq!(field["required"], Yaml::from(false));
}

#[test]
fn test_unlisted_parameter_passes_through() {
    let yaml = render(&template());
    let field = &parsed(&yaml)["REPLICATION_MODE"];
    assert_eq!(field["type"], Yaml::from("str"));
    assert_eq!(field["default"], Yaml::from("Multicast"));
    assert_eq!(field["required"], Yaml::from(false));
    assert_eq!(
        field["choices"],
        Yaml::Sequence(vec![Yaml::from("Multicast"), Yaml::from("Ingress")])
    );
    assert_eq!(
        field["description"],
        Yaml::Sequence(vec![Yaml::from("Replication Mode for BUM Traffic")])
    );
    assert!(field.get("elements").is_none());

    let required = &parsed(&yaml)["FABRIC_NAME"];
    assert_eq!(required["required"], Yaml::from(true));
    assert!(required.get("default").is_none());
}

#[test]
fn test_overrides_win_over_raw_schema() {
    let template = template();
    let yaml = render(&template);
    let doc = parsed(&yaml);
    let overrides = OverrideTable::builtin();

    for correction in BUILTIN_CORRECTIONS {
        let Some(field) = doc.get(correction.parameter) else {
            continue;
        };
        let Some(entry) = overrides.lookup(correction.parameter, template.name()) else {
            continue;
        };
        if let Some(target) = entry.target_type {
            assert_eq!(field["type"], Yaml::from(target.as_str()), "{}", entry.parameter);
        }
        if let DefaultOverride::Literal(value) = entry.default {
            assert_eq!(field["default"], Yaml::from(value), "{}", entry.parameter);
        }
        if entry.elements.is_some() {
            assert_eq!(field["elements"], Yaml::from("str"), "{}", entry.parameter);
        }
    }
}

#[test]
fn test_integer_defaults_unquoted_and_numeric_strings_quoted() {
    let template = template();
    let overrides = OverrideTable::builtin();
    let normalized = FieldNormalizer::new(&overrides).normalize(&template).unwrap();
    let yaml = Renderer::new(OutputFormat::Yaml)
        .render_options(&normalized)
        .unwrap();

    for (name, field) in normalized.fields() {
        let Some(default) = &field.default else {
            continue;
        };
        let line = format!("  default: {default}");
        let quoted = format!("  default: '{default}'");
        let lines = block(&yaml, name.as_str());
        match field.field_type {
            AnsibleType::Int => assert!(lines.contains(&line.as_str()), "{name}"),
            AnsibleType::Str if default.to_string().parse::<f64>().is_ok() => {
                assert!(lines.contains(&quoted.as_str()), "{name}");
            }
            _ => {}
        }
    }
}

#[test]
fn test_yaml11_ambiguous_strings_are_quoted() {
    let template = Template::from_value(json!({
        "name": "LAN_Classic",
        "parameters": [
            {"name": "CDP_ENABLE", "parameterType": "string", "defaultValue": "on", "optional": true},
            {"name": "FLOW_LIMIT", "parameterType": "string", "defaultValue": "1_000", "optional": true},
            {"name": "HOLD_TIME", "parameterType": "string", "defaultValue": "1:30", "optional": true},
            {"name": "ENABLE_NXAPI", "parameterType": "boolean", "defaultValue": "true", "optional": true},
            {
                "name": "LLDP_STATE",
                "parameterType": "enum",
                "defaultValue": "off",
                "optional": true,
                "annotations": {"Enum": "\"on,off\""}
            }
        ]
    }))
    .unwrap();
    let yaml = render(&template);

    assert!(block(&yaml, "CDP_ENABLE").contains(&"  default: 'on'"));
    assert!(block(&yaml, "FLOW_LIMIT").contains(&"  default: '1_000'"));
    assert!(block(&yaml, "HOLD_TIME").contains(&"  default: '1:30'"));
    assert!(block(&yaml, "ENABLE_NXAPI").contains(&"  default: true"));
    let lldp = block(&yaml, "LLDP_STATE");
    assert!(lldp.contains(&"  - 'on'"));
    assert!(lldp.contains(&"  - 'off'"));
    assert!(lldp.contains(&"  default: 'off'"));

    let doc = parsed(&yaml);
    assert_eq!(doc["CDP_ENABLE"]["default"], Yaml::from("on"));
    assert_eq!(doc["ENABLE_NXAPI"]["default"], Yaml::from(true));
}

#[test]
fn test_every_list_has_elements() {
    let yaml = render(&template());
    let doc = parsed(&yaml);
    let Yaml::Mapping(map) = doc else {
        panic!("expected a mapping");
    };
    for (name, field) in &map {
        if field["type"] == Yaml::from("list") {
            assert!(field.get("elements").is_some(), "{name:?}");
        } else {
            assert!(field.get("elements").is_none(), "{name:?}");
        }
    }
}

#[test]
fn test_round_trip_keeps_parameter_names() {
    let template = template();
    let yaml = render(&template);
    let Yaml::Mapping(map) = parsed(&yaml) else {
        panic!("expected a mapping");
    };
    let rendered: BTreeSet<String> = map
        .keys()
        .map(|k| k.as_str().unwrap().to_string())
        .collect();

    let expected: BTreeSet<String> = [
        "BGP_AUTH_KEY_TYPE",
        "DEFAULT_QUEUING_POLICY_OTHER",
        "ENABLE_NETFLOW",
        "FABRIC_NAME",
        "MST_INSTANCE_RANGE",
        "NETFLOW_EXPORTER_LIST",
        "REPLICATION_MODE",
        "RR_COUNT",
        "RS_ROUTING_TAG",
        "STP_BRIDGE_PRIORITY",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    assert_eq!(rendered, expected);
}

#[test]
fn test_rendering_is_byte_identical() {
    let first = render(&template());
    let second = render(&template());
    assert_eq!(first, second);

    let json_first = {
        let overrides = OverrideTable::builtin();
        let normalized = FieldNormalizer::new(&overrides).normalize(&template()).unwrap();
        Renderer::new(OutputFormat::Json).render_options(&normalized).unwrap()
    };
    let json_second = {
        let overrides = OverrideTable::builtin();
        let normalized = FieldNormalizer::new(&overrides).normalize(&template()).unwrap();
        Renderer::new(OutputFormat::Json).render_options(&normalized).unwrap()
    };
    assert_eq!(json_first, json_second);
}

#[test]
fn test_parameters_sorted_by_name() {
    let yaml = render(&template());
    let names: Vec<&str> = yaml
        .lines()
        .filter(|line| !line.starts_with(' '))
        .map(|line| line.trim_end_matches(':'))
        .collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn test_keys_in_fixed_order() {
    let yaml = render(&template());
    let keys: Vec<&str> = block(&yaml, "BGP_AUTH_KEY_TYPE")
        .into_iter()
        .filter(|line| !line.starts_with("  -") && !line.starts_with("   "))
        .map(|line| line.trim().split(':').next().unwrap_or_default())
        .collect();
    assert_eq!(keys, vec!["choices", "default", "description", "required", "type"]);
}

#[test]
fn test_unsupported_type_aborts() {
    let mut raw = easy_fabric();
    raw["parameters"]
        .as_array_mut()
        .unwrap()
        .push(json!({"name": "NEW_KNOB", "parameterType": "float"}));
    let template = Template::from_value(raw).unwrap();
    let overrides = OverrideTable::builtin();
    let err = FieldNormalizer::new(&overrides).normalize(&template).unwrap_err();
    assert!(err.is_unsupported_type());
}

#[test]
fn test_module_layout_wraps_options() {
    let template = template();
    let overrides = OverrideTable::builtin();
    let normalized = FieldNormalizer::new(&overrides).normalize(&template).unwrap();
    let metadata = ModuleMetadata {
        author: Some("Fabric Team (@fabric-team)".into()),
        ..ModuleMetadata::default()
    };
    let documentation = ModuleDocumentation::build(&metadata, &normalized).unwrap();
    let yaml = Renderer::new(OutputFormat::Yaml)
        .render_module(&documentation)
        .unwrap();
    let doc = parsed(&yaml);

    assert_eq!(doc["module"], Yaml::from("dcnm_fabric"));
    assert_eq!(doc["options"]["state"]["default"], Yaml::from("merged"));
    assert_eq!(doc["options"]["state"]["type"], Yaml::from("str"));
    assert_eq!(doc["options"]["config"]["type"], Yaml::from("list"));
    assert_eq!(doc["options"]["config"]["elements"], Yaml::from("dict"));
    assert_eq!(
        doc["options"]["config"]["suboptions"]["RS_ROUTING_TAG"]["default"],
        Yaml::from(54321)
    );
}

#[tokio::test]
async fn test_pipeline_from_template_source() {
    let source = MemoryTemplateSource::new().with_template("Easy_Fabric", easy_fabric());
    let name = TemplateName::new("Easy_Fabric").unwrap();
    let fetched = source.fetch_template(&name).await.unwrap();

    assert_eq!(render(&fetched), render(&template()));
}
