//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,

    // Page generation
    /// Maximum number of documents returned by the page query
    pub query_limit: usize,
    /// Abort generation when the document query reports errors instead of
    /// continuing with the partial result set
    pub fail_on_query_error: bool,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Pagegen".to_string(),
            description: String::new(),
            author: String::new(),
            url: "http://example.com".to_string(),
            root: "/".to_string(),
            source_dir: "src".to_string(),
            public_dir: "public".to_string(),
            query_limit: 1000,
            fail_on_query_error: false,
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.query_limit, 1000);
        assert!(!config.fail_on_query_error);
        assert_eq!(config.source_dir, "src");
        assert_eq!(config.public_dir, "public");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: SiteConfig = serde_yaml::from_str(
            r#"
title: My Blog
url: https://blog.example.com
fail_on_query_error: true
theme_color: "#222222"
"#,
        )
        .unwrap();

        assert_eq!(config.title, "My Blog");
        assert_eq!(config.url, "https://blog.example.com");
        assert!(config.fail_on_query_error);
        assert_eq!(config.query_limit, 1000);
        assert!(config.extra.contains_key("theme_color"));
    }
}
