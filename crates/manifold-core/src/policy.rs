//! Load policies: schema, compilation, and first-match evaluation.
//!
//! A load policy grants or denies loading of a manifest based on where it
//! sits in the directory tree and what shape its body has. Raw policies are
//! compiled once into pattern matchers; evaluation is pure and has no side
//! effects beyond the returned decision.

use serde::Deserialize;
use serde_yaml::Value;

use crate::error::{ManifoldError, Result};
use crate::pattern::{split_segments, PathPattern, TokenBindings};
use crate::subset::is_subset;

/// Effect of a matching policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    Allow,
    Deny,
}

/// Manifest kind discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    Resource,
    Template,
    Repository,
}

impl ManifestKind {
    /// The top-level document key for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ManifestKind::Resource => "resource",
            ManifestKind::Template => "template",
            ManifestKind::Repository => "repository",
        }
    }
}

/// A load policy as written in configuration.
///
/// Exactly one of `resource`, `template`, `repository` must be set; the
/// constraint mapping lists the fields a candidate body must carry for the
/// policy to apply.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoadPolicy {
    pub name: String,
    pub effect: Effect,
    #[serde(rename = "path")]
    pub paths: Vec<String>,
    #[serde(default)]
    pub resource: Option<Value>,
    #[serde(default)]
    pub template: Option<Value>,
    #[serde(default)]
    pub repository: Option<Value>,
}

/// A validated policy with its patterns parsed once.
#[derive(Debug, Clone)]
pub struct CompiledPolicy {
    pub name: String,
    pub effect: Effect,
    patterns: Vec<PathPattern>,
    kind: ManifestKind,
    constraint: Value,
}

impl CompiledPolicy {
    /// Validate a raw policy and parse its patterns.
    pub fn compile(policy: &LoadPolicy) -> Result<Self> {
        if policy.name.is_empty() {
            return Err(ManifoldError::InvalidPolicy("name must not be empty".into()));
        }
        if policy.paths.is_empty() {
            return Err(ManifoldError::InvalidPolicy(format!(
                "policy `{}` has no path patterns",
                policy.name
            )));
        }
        let mut shapes = Vec::new();
        if let Some(constraint) = &policy.resource {
            shapes.push((ManifestKind::Resource, constraint));
        }
        if let Some(constraint) = &policy.template {
            shapes.push((ManifestKind::Template, constraint));
        }
        if let Some(constraint) = &policy.repository {
            shapes.push((ManifestKind::Repository, constraint));
        }
        let (kind, constraint) = match shapes.as_slice() {
            [(kind, constraint)] => (*kind, (*constraint).clone()),
            [] => {
                return Err(ManifoldError::InvalidPolicy(format!(
                    "policy `{}` must set one of resource, template, repository",
                    policy.name
                )))
            }
            _ => {
                return Err(ManifoldError::InvalidPolicy(format!(
                    "policy `{}` sets more than one shape constraint",
                    policy.name
                )))
            }
        };
        let patterns = policy.paths.iter().map(|p| PathPattern::parse(p)).collect();
        Ok(Self {
            name: policy.name.clone(),
            effect: policy.effect,
            patterns,
            kind,
            constraint,
        })
    }

    /// Kind of manifest this policy covers.
    pub fn kind(&self) -> ManifestKind {
        self.kind
    }

    /// Shape constraint a candidate body must satisfy.
    pub fn constraint(&self) -> &Value {
        &self.constraint
    }
}

/// Compile a whole policy list, failing on the first malformed entry.
pub fn compile_policies(policies: &[LoadPolicy]) -> Result<Vec<CompiledPolicy>> {
    policies.iter().map(CompiledPolicy::compile).collect()
}

/// Decision produced by a matching policy.
#[derive(Debug, Clone)]
pub struct PolicyDecision {
    /// Name of the winning policy.
    pub policy: String,
    pub effect: Effect,
    /// Tokens captured by the pattern that matched.
    pub bindings: TokenBindings,
}

/// Evaluate `policies` in declaration order against a candidate manifest.
///
/// A policy applies when its shape kind equals `kind`, its constraint is a
/// structural subset of `body`, and any of its patterns matches `path`. The
/// first applicable policy wins and carries the bindings of the pattern
/// that matched. `None` means no policy applies; callers decide the default
/// (the registry loader treats it as allow).
pub fn check_load_policy(
    path: &str,
    kind: ManifestKind,
    body: &Value,
    policies: &[CompiledPolicy],
) -> Option<PolicyDecision> {
    let segments = split_segments(path);
    for policy in policies {
        if policy.kind != kind {
            continue;
        }
        if !is_subset(&policy.constraint, body) {
            continue;
        }
        for pattern in &policy.patterns {
            if let Some(bindings) = pattern.match_segments(&segments) {
                tracing::debug!(policy = %policy.name, path, "load policy matched");
                return Some(PolicyDecision {
                    policy: policy.name.clone(),
                    effect: policy.effect,
                    bindings,
                });
            }
        }
    }
    None
}
