//! Index add/remove semantics.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use manifold_registry::api::v1::{
    Repository, RepositorySpec, Resource, ResourceSpec, Template, TemplateSpec,
};
use manifold_registry::Index;

fn resource(name: &str, kind: &str) -> Resource {
    Resource {
        api_version: "v1".into(),
        resource: ResourceSpec {
            name: name.into(),
            kind: kind.into(),
            ..Default::default()
        },
    }
}

fn template(name: &str) -> Template {
    Template {
        api_version: "v1".into(),
        template: TemplateSpec {
            name: name.into(),
            content: "x".into(),
        },
    }
}

fn repository(name: &str) -> Repository {
    Repository {
        api_version: "v1".into(),
        repository: RepositorySpec {
            name: name.into(),
            repository: "git@example.com:org/r.git".into(),
            branch: "main".into(),
            ..Default::default()
        },
    }
}

#[test]
fn duplicate_resource_is_rejected() {
    let mut index = Index::new();
    index.add_resource(resource("a", "test")).unwrap();
    let err = index.add_resource(resource("a", "test")).unwrap_err();
    assert_eq!(err.to_string(), "resource a of kind test already exists");
    assert_eq!(index.resource_count(), 1);
}

#[test]
fn removing_the_last_resource_drops_the_kind() {
    let mut index = Index::new();
    index.add_resource(resource("a", "test")).unwrap();
    index.add_resource(resource("b", "test")).unwrap();
    assert_eq!(index.kind_count(), 1);

    index.remove_resource("test", "a").unwrap();
    assert_eq!(index.kind_count(), 1);
    index.remove_resource("test", "b").unwrap();
    assert_eq!(index.kind_count(), 0);
}

#[test]
fn removing_from_an_unknown_kind_fails() {
    let mut index = Index::new();
    let err = index.remove_resource("ghost", "a").unwrap_err();
    assert_eq!(err.to_string(), "resource a of kind ghost does not exist");
}

#[test]
fn template_round_trip() {
    let mut index = Index::new();
    index.add_template(template("t")).unwrap();
    let err = index.add_template(template("t")).unwrap_err();
    assert_eq!(err.to_string(), "template t already exists");

    index.remove_template("t").unwrap();
    let err = index.remove_template("t").unwrap_err();
    assert_eq!(err.to_string(), "template t does not exist");
}

#[test]
fn repository_round_trip() {
    let mut index = Index::new();
    index.add_repository(repository("r")).unwrap();
    let err = index.add_repository(repository("r")).unwrap_err();
    assert_eq!(err.to_string(), "repository r already exists");

    index.remove_repository("r").unwrap();
    let err = index.remove_repository("r").unwrap_err();
    assert_eq!(err.to_string(), "repository r does not exist");
}
