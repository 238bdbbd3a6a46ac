//! Integration tests for JSON configs and JSON rule descriptors.

#![cfg(feature = "serde")]

use pretty_assertions::assert_eq;
use rc_validator::prelude::*;
use serde_json::json;

fn service_rules() -> RuleTree {
    RuleTree::from_descriptor(&json!({
        "name": "String",
        "server": {
            "host": "String",
            "port": "Number",
            "tls": { "$optional": { "cert": "String", "key": "String" } },
        },
        "log_level": { "$choice": ["debug", "info", "warn"] },
        "tags": { "$optional": "Array" },
        "extra": "Any",
    }))
    .unwrap()
}

// ============================================================================
// JSON CONFIGS
// ============================================================================

#[test]
fn validate_json_config_structure() {
    let config = Value::from(json!({
        "name": "api",
        "server": { "host": "localhost", "port": 8080 },
        "log_level": "info",
        "unrelated": { "anything": [1, 2, 3] },
    }));
    assert!(validate(&service_rules(), &config).is_ok());
}

#[test]
fn json_null_counts_as_absent_for_optional_fields() {
    let config = Value::from(json!({
        "name": "api",
        "server": { "host": "localhost", "port": 8080, "tls": null },
        "log_level": "debug",
        "tags": null,
    }));
    assert!(validate(&service_rules(), &config).is_ok());
}

#[test]
fn json_null_is_not_a_string() {
    let config = Value::from(json!({ "name": null }));
    let err = validate(&service_rules(), &config).unwrap_err();
    assert_eq!(err.expected, "String");
    assert_eq!(err.actual, "Null");
    assert_eq!(err.path.to_string(), "name");
}

#[test]
fn nested_json_failure_reports_dotted_path() {
    let config = Value::from(json!({
        "name": "api",
        "server": {
            "host": "localhost",
            "port": 8080,
            "tls": { "cert": "/etc/cert.pem", "key": 42 },
        },
        "log_level": "info",
    }));
    let err = validate(&service_rules(), &config).unwrap_err();
    assert_eq!(err.kind, ErrorKind::TypeMismatch);
    assert_eq!(err.path.to_string(), "server.tls.key");
    assert_eq!(err.actual, "Number");
}

#[test]
fn json_choice_failure_quotes_literals() {
    let config = Value::from(json!({
        "name": "api",
        "server": { "host": "localhost", "port": 8080 },
        "log_level": "trace",
    }));
    let err = validate(&service_rules(), &config).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotAChoice);
    assert_eq!(err.expected, "'debug', 'info', 'warn'");
    assert_eq!(err.actual, "'trace'");
}

#[test]
fn numeric_choice_from_descriptor() {
    let rules = RuleTree::from_descriptor(&json!({ "replicas": { "$choice": [1, 3, 5] } })).unwrap();

    assert!(validate(&rules, &Value::from(json!({ "replicas": 3 }))).is_ok());
    assert!(validate(&rules, &Value::from(json!({ "replicas": "3" }))).is_err());

    let err = validate(&rules, &Value::from(json!({ "replicas": 2 }))).unwrap_err();
    assert_eq!(err.expected, "'1', '3', '5'");
    assert_eq!(err.actual, "'2'");
}

#[test]
fn top_level_json_array_fails_first_required_field() {
    let err = validate(&service_rules(), &Value::from(json!(["api"]))).unwrap_err();
    assert_eq!(err.path.to_string(), "name");
    assert_eq!(err.actual, "Undefined");
}

// ============================================================================
// ERROR SERIALIZATION
// ============================================================================

#[test]
fn error_to_json_value() {
    let config = Value::from(json!({ "name": "api", "server": { "host": 1 } }));
    let err = validate(&service_rules(), &config).unwrap_err();

    assert_eq!(
        err.to_json_value(),
        json!({
            "code": "type_mismatch",
            "expected": "String",
            "actual": "Number",
            "path": ["server", "host"],
            "source": null,
        })
    );
}

#[test]
fn custom_error_source_is_serialized() {
    let rules = rules! {
        port: custom("Port", |v: Option<&Value>| match v.and_then(Value::as_f64) {
            Some(n) if n >= 1.0 => Ok(()),
            _ => Err("port must be positive"),
        }),
    };
    let err = validate(&rules, &Value::from(json!({ "port": 0 }))).unwrap_err();
    let json = err.to_json_value();
    assert_eq!(json["code"], "custom");
    assert_eq!(json["source"], "port must be positive");
}

// ============================================================================
// DESCRIPTOR ERRORS
// ============================================================================

#[test]
fn descriptor_errors_name_the_offending_path() {
    let err = RuleTree::from_descriptor(&json!({
        "server": { "tls": { "$optional": { "cert": true } } },
    }))
    .unwrap_err();
    assert_eq!(
        err,
        RuleError::InvalidRule {
            path: "server.tls.cert".to_owned(),
            found: "boolean",
        }
    );
}

#[test]
fn descriptor_must_be_an_object() {
    let err = RuleTree::from_descriptor(&json!("String")).unwrap_err();
    assert_eq!(err.to_string(), "rule descriptor must be an object, found string");
}
