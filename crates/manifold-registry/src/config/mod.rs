//! Load-policy file loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use manifold_core::{ManifoldError, Result};

pub use schema::PolicySet;

pub fn load_from_file(path: &Path) -> Result<PolicySet> {
    let s = fs::read_to_string(path)
        .map_err(|e| ManifoldError::InvalidPolicy(format!("read policy file failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<PolicySet> {
    let set: PolicySet = serde_yaml::from_str(s)
        .map_err(|e| ManifoldError::InvalidPolicy(format!("invalid yaml: {e}")))?;
    set.validate()?;
    Ok(set)
}
