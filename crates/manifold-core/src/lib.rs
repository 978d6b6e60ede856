//! Manifold core: path pattern matching, structural subset checks, token
//! injection, and load-policy evaluation.
//!
//! This crate holds the pure decision logic consumed by the registry loader
//! and index. It performs no I/O and carries no runtime dependencies so it
//! can be reused in other tooling contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Non-matches are reported as `None`/`false`, never as errors; errors are
//! reserved for malformed policy definitions surfaced at load time.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod inject;
pub mod pattern;
pub mod policy;
pub mod subset;

/// Shared result type.
pub use error::{ManifoldError, Result};
pub use inject::inject_tokens;
pub use pattern::{PathPattern, Segment, TokenBindings};
pub use policy::{
    check_load_policy, compile_policies, CompiledPolicy, Effect, LoadPolicy, ManifestKind,
    PolicyDecision,
};
pub use subset::is_subset;
