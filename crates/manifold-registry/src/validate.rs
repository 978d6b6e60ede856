//! Field-list validation and required-field checks over the index.
//!
//! Valid-field tables live next to the types in `api::v1` and are passed in
//! explicitly.

use serde_yaml::Mapping;

use manifold_core::ManifoldError;

use crate::api::v1::{Repository, Resource, Template};
use crate::index::Index;

/// Report the first field of `map` not present in `valid`.
///
/// One violation at a time: the caller fixes the reported field and re-runs.
/// Non-string keys are never valid.
pub fn invalid_field(label: &str, map: &Mapping, valid: &[&str]) -> Option<String> {
    for key in map.keys() {
        let known = key
            .as_str()
            .map_or(false, |name| valid.contains(&name));
        if !known {
            let shown = key.as_str().unwrap_or("<non-string key>");
            return Some(format!("invalid {label} field `{shown}`"));
        }
    }
    None
}

/// Required-field validation over every indexed document.
pub(crate) fn validate_index(index: &Index) -> Vec<ManifoldError> {
    let mut errs = Vec::new();
    for resource in index.resources() {
        errs.extend(validate_resource(resource));
    }
    for template in index.templates() {
        errs.extend(validate_template(template));
    }
    for repository in index.repositories() {
        errs.extend(validate_repository(repository));
    }
    errs
}

fn validate_resource(r: &Resource) -> Vec<ManifoldError> {
    let mut errs = Vec::new();
    if r.resource.kind.is_empty() {
        errs.push(ManifoldError::Validation("resource kind is required".into()));
    }
    if r.resource.name.is_empty() {
        errs.push(ManifoldError::Validation("resource name is required".into()));
    }
    errs
}

fn validate_template(t: &Template) -> Vec<ManifoldError> {
    let mut errs = Vec::new();
    if t.template.name.is_empty() {
        errs.push(ManifoldError::Validation("template name is required".into()));
    }
    errs
}

fn validate_repository(r: &Repository) -> Vec<ManifoldError> {
    let mut errs = Vec::new();
    if r.repository.name.is_empty() {
        errs.push(ManifoldError::Validation("repository name is required".into()));
    }
    if r.repository.repository.is_empty() {
        errs.push(ManifoldError::Validation("repository is required".into()));
    }
    if r.repository.branch.is_empty() {
        errs.push(ManifoldError::Validation("repository branch is required".into()));
    }
    errs
}
