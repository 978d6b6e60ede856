//! Top-level facade crate for Manifold.
//!
//! Re-exports the core decision logic and the registry library so users can
//! depend on a single crate.

pub mod core {
    pub use manifold_core::*;
}

pub mod registry {
    pub use manifold_registry::*;
}
