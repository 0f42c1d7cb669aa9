//! Tests to verify that all public types are Send + Sync as required.

use ndfc_core::traits::TemplateSource;
use ndfc_core::*;

const fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_domain_types_are_send_sync() {
    assert_send_sync::<TemplateName>();
    assert_send_sync::<ParameterName>();
}

#[test]
fn test_template_types_are_send_sync() {
    assert_send_sync::<Template>();
    assert_send_sync::<TemplateParameter>();
    assert_send_sync::<TemplateCatalog>();
}

#[test]
fn test_config_is_send_sync() {
    assert_send_sync::<ControllerConfig>();
}

#[test]
fn test_error_is_send_sync() {
    assert_send_sync::<Error>();
}

#[test]
fn test_template_source_is_object_safe() {
    fn accepts(_: Option<&dyn TemplateSource>) {}
    accepts(None);
}
