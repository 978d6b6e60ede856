//! Shared error type across manifold crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, ManifoldError>;

/// Unified error type used by core and registry.
///
/// Pattern matching, subset checks, and token injection never produce one of
/// these; a non-match is an ordinary outcome. The variants cover policy
/// configuration mistakes and the accumulated failures of a directory load.
#[derive(Debug, Error)]
pub enum ManifoldError {
    /// Malformed load-policy definition (missing name, no path patterns,
    /// zero or multiple shape constraints). Surfaced at policy-load time.
    #[error("invalid load policy: {0}")]
    InvalidPolicy(String),
    /// A manifest document failed to parse, validate, or index. The path
    /// prefix identifies the offending file.
    #[error("{path}: {reason}")]
    Document { path: String, reason: String },
    /// A required field was missing on an already-indexed entry.
    #[error("{0}")]
    Validation(String),
    /// Duplicate or missing entry in the index.
    #[error("{0}")]
    Index(String),
    /// Filesystem failure during the directory walk.
    #[error("{0}")]
    Walk(String),
}
