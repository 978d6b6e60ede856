//! In-memory index of loaded manifest documents.
//!
//! Resources are bucketed by kind, then name; templates and repositories by
//! name alone. The index is single-threaded by contract: callers must not
//! mutate it concurrently.

use std::collections::HashMap;

use manifold_core::{ManifoldError, Result};

use crate::api::v1::{Repository, Resource, Template};

/// Index of all loaded documents.
#[derive(Debug, Default)]
pub struct Index {
    resources_by_kind: HashMap<String, HashMap<String, Resource>>,
    templates: HashMap<String, Template>,
    repositories: HashMap<String, Repository>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource, rejecting duplicates of the same kind and name.
    pub fn add_resource(&mut self, resource: Resource) -> Result<()> {
        let kind = resource.resource.kind.clone();
        let name = resource.resource.name.clone();
        let bucket = self.resources_by_kind.entry(kind.clone()).or_default();
        if bucket.contains_key(&name) {
            return Err(ManifoldError::Index(format!(
                "resource {name} of kind {kind} already exists"
            )));
        }
        bucket.insert(name, resource);
        Ok(())
    }

    /// Remove a resource; the kind bucket is dropped with its last entry.
    pub fn remove_resource(&mut self, kind: &str, name: &str) -> Result<()> {
        match self.resources_by_kind.get_mut(kind) {
            Some(bucket) => {
                bucket.remove(name);
                if bucket.is_empty() {
                    self.resources_by_kind.remove(kind);
                }
                Ok(())
            }
            None => Err(ManifoldError::Index(format!(
                "resource {name} of kind {kind} does not exist"
            ))),
        }
    }

    /// Add a template, rejecting duplicate names.
    pub fn add_template(&mut self, template: Template) -> Result<()> {
        let name = template.template.name.clone();
        if self.templates.contains_key(&name) {
            return Err(ManifoldError::Index(format!("template {name} already exists")));
        }
        self.templates.insert(name, template);
        Ok(())
    }

    pub fn remove_template(&mut self, name: &str) -> Result<()> {
        match self.templates.remove(name) {
            Some(_) => Ok(()),
            None => Err(ManifoldError::Index(format!("template {name} does not exist"))),
        }
    }

    /// Add a repository, rejecting duplicate names.
    pub fn add_repository(&mut self, repository: Repository) -> Result<()> {
        let name = repository.repository.name.clone();
        if self.repositories.contains_key(&name) {
            return Err(ManifoldError::Index(format!(
                "repository {name} already exists"
            )));
        }
        self.repositories.insert(name, repository);
        Ok(())
    }

    pub fn remove_repository(&mut self, name: &str) -> Result<()> {
        match self.repositories.remove(name) {
            Some(_) => Ok(()),
            None => Err(ManifoldError::Index(format!(
                "repository {name} does not exist"
            ))),
        }
    }

    /// Look up a resource by kind and name.
    pub fn resource(&self, kind: &str, name: &str) -> Option<&Resource> {
        self.resources_by_kind.get(kind)?.get(name)
    }

    /// Every indexed resource, across all kinds.
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources_by_kind.values().flat_map(HashMap::values)
    }

    pub fn template(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    pub fn templates(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }

    pub fn repository(&self, name: &str) -> Option<&Repository> {
        self.repositories.get(name)
    }

    pub fn repositories(&self) -> impl Iterator<Item = &Repository> {
        self.repositories.values()
    }

    /// Number of distinct resource kinds.
    pub fn kind_count(&self) -> usize {
        self.resources_by_kind.len()
    }

    /// Total number of resources across all kinds.
    pub fn resource_count(&self) -> usize {
        self.resources_by_kind.values().map(HashMap::len).sum()
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    pub fn repository_count(&self) -> usize {
        self.repositories.len()
    }
}
