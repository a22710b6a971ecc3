use http::Method;
use serde_json::{json, Value};

use super::Registry;
use crate::pattern::PatternError;

fn ok_handler(value: Value) -> impl Fn(crate::RequestContext) -> anyhow::Result<Value> {
    move |_ctx| Ok(value.clone())
}

#[test]
fn test_resolve_returns_handler_value() {
    let registry = Registry::new();
    registry
        .register(Method::GET, "/topics", ok_handler(json!({"topics": []})))
        .unwrap();

    let thunk = registry.resolve(&Method::GET, "/topics", None).unwrap();
    assert_eq!(thunk().unwrap(), json!({"topics": []}));
}

#[test]
fn test_resolve_extracts_params() {
    let registry = Registry::new();
    registry
        .register(Method::GET, "/users/:id", |ctx| {
            Ok(json!({ "id": ctx.param("id") }))
        })
        .unwrap();

    let thunk = registry.resolve(&Method::GET, "/users/42", None).unwrap();
    assert_eq!(thunk().unwrap(), json!({"id": "42"}));
}

#[test]
fn test_method_must_match() {
    let registry = Registry::new();
    registry
        .register(Method::POST, "/users", ok_handler(json!(1)))
        .unwrap();

    assert!(registry.resolve(&Method::GET, "/users", None).is_none());
    assert!(registry.resolve(&Method::POST, "/users", None).is_some());
}

#[test]
fn test_first_match_wins() {
    let registry = Registry::new();
    registry
        .register(Method::GET, "/users/:id", ok_handler(json!("param")))
        .unwrap();
    registry
        .register(Method::GET, "/users/profile", ok_handler(json!("literal")))
        .unwrap();

    // The earlier, less specific route shadows the later one.
    let thunk = registry
        .resolve(&Method::GET, "/users/profile", None)
        .unwrap();
    assert_eq!(thunk().unwrap(), json!("param"));
}

#[test]
fn test_identical_routes_coexist_earliest_wins() {
    let registry = Registry::new();
    registry
        .register(Method::GET, "/dup", ok_handler(json!("first")))
        .unwrap();
    registry
        .register(Method::GET, "/dup", ok_handler(json!("second")))
        .unwrap();

    assert_eq!(registry.len(), 2);
    let thunk = registry.resolve(&Method::GET, "/dup", None).unwrap();
    assert_eq!(thunk().unwrap(), json!("first"));
}

#[test]
fn test_duplicate_param_name_keeps_first_nonempty_capture() {
    let registry = Registry::new();
    registry
        .register(Method::GET, "/a/:x/:x", |ctx| {
            Ok(json!({ "x": ctx.param("x") }))
        })
        .unwrap();

    // Second segment is empty: the earlier capture must be retained.
    let thunk = registry.resolve(&Method::GET, "/a/foo/", None).unwrap();
    assert_eq!(thunk().unwrap(), json!({"x": "foo"}));

    // Both segments present: the later capture overwrites.
    let thunk = registry.resolve(&Method::GET, "/a/foo/bar", None).unwrap();
    assert_eq!(thunk().unwrap(), json!({"x": "bar"}));
}

#[test]
fn test_body_reaches_handler() {
    let registry = Registry::new();
    registry
        .register(Method::POST, "/echo", |ctx| Ok(ctx.body))
        .unwrap();

    let body = json!({"name": "ada"});
    let thunk = registry
        .resolve(&Method::POST, "/echo", Some(&body))
        .unwrap();
    assert_eq!(thunk().unwrap(), body);
}

#[test]
fn test_missing_body_defaults_to_empty_object() {
    let registry = Registry::new();
    registry
        .register(Method::POST, "/echo", |ctx| Ok(ctx.body))
        .unwrap();

    let thunk = registry.resolve(&Method::POST, "/echo", None).unwrap();
    assert_eq!(thunk().unwrap(), json!({}));
}

#[test]
fn test_clear_empties_the_table() {
    let registry = Registry::new();
    registry
        .register(Method::GET, "/a", ok_handler(json!(1)))
        .unwrap();
    registry
        .register(Method::GET, "/b", ok_handler(json!(2)))
        .unwrap();
    assert_eq!(registry.len(), 2);

    registry.clear();
    assert!(registry.is_empty());
    assert!(registry.resolve(&Method::GET, "/a", None).is_none());

    // Idempotent
    registry.clear();
    assert!(registry.is_empty());
}

#[test]
fn test_handler_error_propagates_through_thunk() {
    let registry = Registry::new();
    registry
        .register(Method::GET, "/boom", |_ctx| Err(anyhow::anyhow!("kaput")))
        .unwrap();

    let thunk = registry.resolve(&Method::GET, "/boom", None).unwrap();
    let err = thunk().unwrap_err();
    assert!(err.to_string().contains("kaput"));
}

#[test]
fn test_bad_pattern_fails_registration() {
    let registry = Registry::new();
    let err = registry
        .register(Method::GET, "/users/:", ok_handler(json!(1)))
        .unwrap_err();
    assert!(matches!(err, PatternError::MissingParameterName { .. }));
    assert!(registry.is_empty());
}

#[test]
fn test_independent_registries_do_not_share_routes() {
    let a = Registry::new();
    let b = Registry::new();
    a.register(Method::GET, "/only-a", ok_handler(json!(1)))
        .unwrap();

    assert!(a.resolve(&Method::GET, "/only-a", None).is_some());
    assert!(b.resolve(&Method::GET, "/only-a", None).is_none());
}
