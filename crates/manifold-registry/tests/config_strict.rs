#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use manifold_registry::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
policies:
  - name: typo
    effect: allow
    pathz: ["**"] # typo should fail
    resource: {}
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("invalid yaml"));
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let set = config::load_from_str(ok).expect("must parse");
    assert_eq!(set.version, 1);
    assert!(set.policies.is_empty());
}

#[test]
fn unsupported_version_is_rejected() {
    let bad = r#"
version: 2
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("unsupported policy file version 2"));
}

#[test]
fn constraint_fields_are_checked_against_the_spec() {
    let bad = r#"
version: 1
policies:
  - name: bogus-constraint
    effect: allow
    path: ["**"]
    resource:
      bogus: 1
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("invalid resource spec field `bogus`"));
}

#[test]
fn constraint_must_be_a_mapping() {
    let bad = r#"
version: 1
policies:
  - name: scalar-constraint
    effect: allow
    path: ["**"]
    template: 17
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("constraint must be a mapping"));
}

#[test]
fn compile_surfaces_malformed_policies() {
    let set = config::load_from_str(
        r#"
version: 1
policies:
  - name: two-shapes
    effect: deny
    path: ["**"]
    resource: {}
    template: {}
"#,
    )
    .expect("parses; shape arity is a compile-time check");
    let err = set.compile().expect_err("must fail");
    assert!(err.to_string().contains("more than one shape constraint"));
}
