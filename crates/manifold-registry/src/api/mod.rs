//! Typed manifest documents, by API version.

pub mod v1;
