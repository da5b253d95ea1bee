//! Property tests for the authorizer validator.
//!
//! Generates OpenAPI-shaped and declarative property documents and checks
//! the verdicts against the rules stated in the crate documentation.

use apiauth_core::{validate, TargetType};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

const METHODS: &[&str] = &["get", "put", "post", "delete", "patch", "options", "head"];

/// A single security requirement object, e.g. `{"api_key": []}`.
fn security_requirement() -> impl Strategy<Value = Value> {
    "[a-z_]{1,12}".prop_map(|scheme| json!({ scheme: [] }))
}

/// An operation whose `security` list is non-empty.
fn secured_operation() -> impl Strategy<Value = Value> {
    prop::collection::vec(security_requirement(), 1..4)
        .prop_map(|security| json!({"security": security, "responses": {}}))
}

/// An operation whose `security` list is absent, null, or empty.
fn unsecured_operation() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!({})),
        Just(json!({"responses": {}})),
        Just(json!({"security": []})),
        Just(json!({"security": null})),
    ]
}

/// A path item built from up to seven method entries.
fn path_item(operation: BoxedStrategy<Value>) -> impl Strategy<Value = Value> {
    prop::collection::btree_map(prop::sample::select(METHODS), operation, 1..METHODS.len())
        .prop_map(|ops| {
            let map: Map<String, Value> = ops.into_iter().map(|(m, op)| (m.to_string(), op)).collect();
            Value::Object(map)
        })
}

fn paths_of(item: impl Strategy<Value = Value>) -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("/[a-z]{1,8}", item, 1..6)
        .prop_map(|paths| paths.into_iter().collect())
}

fn open_api_target() -> impl Strategy<Value = TargetType> {
    prop_oneof![Just(TargetType::RestApi), Just(TargetType::HttpApi)]
}

fn declarative_target() -> impl Strategy<Value = TargetType> {
    prop_oneof![Just(TargetType::Method), Just(TargetType::Route)]
}

proptest! {
    /// Documents without `Body` or without `paths` always pass.
    #[test]
    fn no_paths_is_vacuously_valid(
        target in open_api_target(),
        extra in "[A-Za-z]{1,10}",
        with_body in any::<bool>(),
    ) {
        let props = if with_body {
            json!({"Body": {"openapi": "3.0.1", "info": {"title": extra}}})
        } else {
            json!({ extra: "value" })
        };
        prop_assert_eq!(validate(target.as_str(), &props), Ok(true));
    }

    /// Every operation secured implies the document passes.
    #[test]
    fn fully_secured_documents_pass(
        target in open_api_target(),
        paths in paths_of(path_item(secured_operation().boxed())),
    ) {
        let props = json!({"Body": {"paths": paths}});
        prop_assert_eq!(validate(target.as_str(), &props), Ok(true));
    }

    /// A single unsecured operation anywhere makes the document fail.
    #[test]
    fn one_unsecured_operation_fails(
        target in open_api_target(),
        mut paths in paths_of(path_item(secured_operation().boxed())),
        bad_path in "/[A-Z]{1,8}",
        bad_method in prop::sample::select(METHODS),
        bad_op in unsecured_operation(),
    ) {
        paths.insert(bad_path, json!({ bad_method: bad_op }));
        let props = json!({"Body": {"paths": paths}});
        prop_assert_eq!(validate(target.as_str(), &props), Ok(false));
    }

    /// Non-empty `AuthorizerId` strings pass the declarative check.
    #[test]
    fn declarative_with_authorizer_passes(
        target in declarative_target(),
        authorizer in "[a-z0-9-]{1,20}",
    ) {
        let props = json!({"AuthorizerId": authorizer, "HttpMethod": "GET"});
        prop_assert_eq!(validate(target.as_str(), &props), Ok(true));
    }

    /// Absent, empty, or null `AuthorizerId` fails the declarative check.
    #[test]
    fn declarative_without_authorizer_fails(
        target in declarative_target(),
        authorizer in prop_oneof![Just(None), Just(Some(json!(""))), Just(Some(Value::Null))],
    ) {
        let mut props = json!({"HttpMethod": "GET", "AuthorizationType": "NONE"});
        if let Some(value) = authorizer {
            props["AuthorizerId"] = value;
        }
        prop_assert_eq!(validate(target.as_str(), &props), Ok(false));
    }

    /// Type names outside the recognized four are always rejected.
    #[test]
    fn unknown_type_names_are_rejected(name in "AWS::[A-Z][a-z]{2,8}::[A-Z][a-z]{2,8}") {
        prop_assume!(TargetType::all().iter().all(|t| t.as_str() != name));
        let props = json!({});
        prop_assert!(validate(&name, &props).is_err());
    }
}
