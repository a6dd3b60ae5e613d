//! Helper functions for URL and route construction

pub mod url;

pub use url::*;
