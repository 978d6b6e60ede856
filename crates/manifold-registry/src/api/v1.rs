//! v1 manifest document types and their valid-field tables.
//!
//! Field names mirror the on-disk YAML. Unknown fields are rejected by the
//! loader's field validation (one violation at a time) rather than by serde,
//! so every spec field carries a default and the structs stay permissive:
//! a missing `name` decodes to an empty string and is caught by the
//! required-field pass over the built index.

use std::collections::HashMap;

use serde::Deserialize;
use serde_yaml::Value;

/// Supported API version marker.
pub const API_VERSION: &str = "v1";

/// A declarative resource document.
#[derive(Debug, Clone, Deserialize)]
pub struct Resource {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub resource: ResourceSpec,
}

/// The specification of a resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceSpec {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub annotations: HashMap<String, String>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub outputs: Vec<OutputSpec>,
}

/// One output artifact generated from a resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputSpec {
    /// Name of the output artifact being generated.
    #[serde(default)]
    pub name: String,
    /// Repository the output artifact will be committed to.
    #[serde(default)]
    pub repository: String,
    /// Full path to the output artifact in the repository.
    #[serde(default)]
    pub file: String,
    /// Template that produces the output artifact.
    #[serde(default)]
    pub template: String,
    /// Context used to render the template.
    #[serde(default)]
    pub context: String,
    /// Post-processor to run on the template output.
    #[serde(default, rename = "postProcessor")]
    pub post_processor: String,
}

/// A text template document.
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub template: TemplateSpec,
}

/// The specification of a template.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateSpec {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: String,
}

/// A source repository document.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub repository: RepositorySpec,
}

/// The specification of a repository.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositorySpec {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub repository: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}

/// Valid top-level fields of a resource document.
pub const VALID_RESOURCE_FIELDS: &[&str] = &["apiVersion", "resource"];
/// Valid fields of a resource spec.
pub const VALID_RESOURCE_SPEC_FIELDS: &[&str] =
    &["name", "kind", "labels", "annotations", "data", "outputs"];
/// Valid fields of an output spec.
pub const VALID_OUTPUT_SPEC_FIELDS: &[&str] =
    &["name", "repository", "file", "template", "context", "postProcessor"];
/// Valid top-level fields of a template document.
pub const VALID_TEMPLATE_FIELDS: &[&str] = &["apiVersion", "template"];
/// Valid fields of a template spec.
pub const VALID_TEMPLATE_SPEC_FIELDS: &[&str] = &["name", "content"];
/// Valid top-level fields of a repository document.
pub const VALID_REPOSITORY_FIELDS: &[&str] = &["apiVersion", "repository"];
/// Valid fields of a repository spec.
pub const VALID_REPOSITORY_SPEC_FIELDS: &[&str] =
    &["name", "repository", "branch", "labels", "annotations"];
