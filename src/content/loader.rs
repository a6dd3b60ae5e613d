//! Content loader - ingests source files into the content graph

use anyhow::Result;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::FrontMatter;
use crate::graph::ContentGraph;
use crate::Pagegen;

/// Loads content files from the pages directory into a content graph
pub struct ContentLoader<'a> {
    app: &'a Pagegen,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(app: &'a Pagegen) -> Self {
        Self { app }
    }

    /// Walk the pages directory and create one file node plus one child
    /// document node per markdown file
    ///
    /// Returns the number of documents ingested. Unreadable files are
    /// logged and skipped.
    pub fn load_into(&self, graph: &mut ContentGraph) -> Result<usize> {
        let pages_dir = &self.app.pages_dir;
        if !pages_dir.exists() {
            tracing::warn!("Pages directory {:?} does not exist", pages_dir);
            return Ok(0);
        }

        let mut count = 0;

        for entry in WalkDir::new(pages_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                match self.load_document(graph, path) {
                    Ok(()) => count += 1,
                    Err(e) => {
                        tracing::warn!("Failed to load document {:?}: {}", path, e);
                    }
                }
            }
        }

        Ok(count)
    }

    fn load_document(&self, graph: &mut ContentGraph, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)?;
        let (front_matter, _body) = FrontMatter::parse(&content);

        let file_id = graph.create_file_node(path);
        let doc_id = graph.create_document_node(path, file_id, front_matter);
        tracing::debug!("Ingested {:?} as nodes {}/{}", path, file_id, doc_id);

        Ok(())
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
