//! Token injection behavior.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use manifold_core::{inject_tokens, TokenBindings};
use serde_yaml::Value;

fn yaml(s: &str) -> Value {
    serde_yaml::from_str(s).unwrap()
}

fn bindings(pairs: &[(&str, &str)]) -> TokenBindings {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn replaces_known_placeholder() {
    let mut v = yaml("\"foo {bar}\"");
    inject_tokens(&mut v, &bindings(&[("bar", "baz")]));
    assert_eq!(v, yaml("\"foo baz\""));
}

#[test]
fn unknown_placeholder_left_verbatim() {
    let mut v = yaml("\"foo {bar}\"");
    inject_tokens(&mut v, &bindings(&[("qux", "quux")]));
    assert_eq!(v, yaml("\"foo {bar}\""));
}

#[test]
fn repeated_placeholder_substituted_everywhere() {
    let mut v = yaml("\"{x}-{x}/{x}\"");
    inject_tokens(&mut v, &bindings(&[("x", "a")]));
    assert_eq!(v, yaml("\"a-a/a\""));
}

#[test]
fn doubled_braces_leave_one_literal_layer() {
    let mut v = yaml("\"foo {{bar}}\"");
    inject_tokens(&mut v, &bindings(&[("bar", "baz")]));
    assert_eq!(v, yaml("\"foo {baz}\""));
}

#[test]
fn nested_values_are_rewritten() {
    let mut v = yaml("{labels: {team: \"{team}\"}, items: [\"{team}-a\", plain]}");
    inject_tokens(&mut v, &bindings(&[("team", "blue")]));
    assert_eq!(v, yaml("{labels: {team: blue}, items: [blue-a, plain]}"));
}

#[test]
fn mapping_keys_are_rewritten() {
    let mut v = yaml("{\"{env}-svc\": 1, fixed: 2}");
    inject_tokens(&mut v, &bindings(&[("env", "prod")]));
    assert_eq!(v, yaml("{prod-svc: 1, fixed: 2}"));
}

#[test]
fn key_collision_resolves_last_write_wins() {
    let mut v = yaml("{\"{x}\": 1, v: 2}");
    inject_tokens(&mut v, &bindings(&[("x", "v")]));
    assert_eq!(v, yaml("{v: 1}"));
}

#[test]
fn sequence_order_and_length_preserved() {
    let mut v = yaml("[\"{a}\", two, \"{a}\"]");
    inject_tokens(&mut v, &bindings(&[("a", "one")]));
    assert_eq!(v, yaml("[one, two, one]"));
}

#[test]
fn non_string_scalars_pass_through() {
    let mut v = yaml("{n: 42, b: true, nothing: null}");
    inject_tokens(&mut v, &bindings(&[("n", "x")]));
    assert_eq!(v, yaml("{n: 42, b: true, nothing: null}"));
}

#[test]
fn unused_bindings_round_trip() {
    let mut v = yaml("{a: [1, two, {b: c}], d: {e: f}}");
    let before = v.clone();
    inject_tokens(&mut v, &bindings(&[("zzz", "yyy")]));
    assert_eq!(v, before);
}
