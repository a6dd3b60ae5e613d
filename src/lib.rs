//! pagegen: a content routing and page generation engine
//!
//! This crate derives URL paths and language keys from the layout of a
//! markdown content tree and registers document and tag index pages for a
//! rendering backend to emit.

pub mod bundler;
pub mod commands;
pub mod config;
pub mod content;
pub mod graph;
pub mod helpers;
pub mod router;

use anyhow::Result;
use std::path::Path;

/// The main application
#[derive(Clone)]
pub struct Pagegen {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Source directory
    pub source_dir: std::path::PathBuf,
    /// Pages directory (all routed content lives under it)
    pub pages_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Pagegen {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let source_dir = base_dir.join(&config.source_dir);
        let pages_dir = source_dir.join("pages");
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            source_dir,
            pages_dir,
            public_dir,
        })
    }

    /// Generate the route manifest
    pub async fn generate(&self) -> Result<()> {
        commands::generate::run(self).await
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
