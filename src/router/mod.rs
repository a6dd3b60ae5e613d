//! Page routing
//!
//! The three build-lifecycle surfaces: per-node field derivation, page
//! registration once the graph is complete, and query-layer field
//! extensions.

pub mod fields;
pub mod pages;
pub mod schema;
