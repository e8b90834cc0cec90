//! Plugin implementations
//!
//! Each plugin implements the core traits for one diagram type.

pub mod classgraph;

pub use classgraph::*;
