//! Policy file schema.

use serde::Deserialize;

use manifold_core::{compile_policies, CompiledPolicy, LoadPolicy, ManifoldError, Result};

use crate::api::v1;
use crate::validate;

/// A versioned list of load policies as read from disk.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicySet {
    pub version: u32,

    #[serde(default)]
    pub policies: Vec<LoadPolicy>,
}

impl PolicySet {
    /// Checks beyond what serde enforces: the version marker and that each
    /// shape constraint only names fields the spec actually has.
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ManifoldError::InvalidPolicy(format!(
                "unsupported policy file version {}",
                self.version
            )));
        }
        for policy in &self.policies {
            validate_constraint_fields(policy)?;
        }
        Ok(())
    }

    /// Compile every policy, parsing patterns and checking invariants.
    pub fn compile(&self) -> Result<Vec<CompiledPolicy>> {
        compile_policies(&self.policies)
    }
}

fn validate_constraint_fields(policy: &LoadPolicy) -> Result<()> {
    let checks = [
        (&policy.resource, "resource spec", v1::VALID_RESOURCE_SPEC_FIELDS),
        (&policy.template, "template spec", v1::VALID_TEMPLATE_SPEC_FIELDS),
        (&policy.repository, "repository spec", v1::VALID_REPOSITORY_SPEC_FIELDS),
    ];
    for (constraint, label, valid) in checks {
        let Some(constraint) = constraint else { continue };
        let Some(map) = constraint.as_mapping() else {
            return Err(ManifoldError::InvalidPolicy(format!(
                "policy `{}`: {label} constraint must be a mapping",
                policy.name
            )));
        };
        if let Some(reason) = validate::invalid_field(label, map, valid) {
            return Err(ManifoldError::InvalidPolicy(format!(
                "policy `{}`: {reason}",
                policy.name
            )));
        }
    }
    Ok(())
}
