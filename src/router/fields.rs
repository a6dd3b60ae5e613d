//! Node field derivation
//!
//! Routing fields come from the filesystem layout: the containing
//! directory name carries the document slug, the filename carries the
//! language key.

use std::path::Path;
use thiserror::Error;

use crate::graph::{ContentGraph, FieldValue, GraphError, NodeId, NodeKind};
use crate::helpers::url::tag_path;

/// Literal path segment separating the source tree from routed content
const PAGES_SEGMENT: &str = "/pages";

/// Separator between the date prefix and the slug body of a content directory
const SLUG_SEPARATOR: &str = "---";

/// Content-layout precondition violations
///
/// These are configuration errors in the content tree and abort the build.
#[derive(Debug, Error)]
pub enum DeriveError {
    #[error("directory {0} has no '---' separator")]
    MissingSlugSeparator(String),
    #[error("document {0} is not under a /pages directory")]
    NotUnderPages(String),
    #[error("document {0} has no language segment in its filename")]
    MissingLangSegment(String),
    #[error("document {document} has no parent file node")]
    MissingParent { document: String },
    #[error("file node {parent} has no derived slug (needed by {document})")]
    MissingParentSlug { document: String, parent: String },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Derive the slug of a file node from its containing directory name
///
/// `.../2017-07-14---hello-world/index.en.md` gets the slug
/// `/hello-world/`. Re-derives unconditionally; file nodes are visited
/// once.
pub fn derive_file_fields(graph: &mut ContentGraph, id: NodeId) -> Result<(), DeriveError> {
    let node = graph.get_node(id).ok_or(GraphError::UnknownNode(id))?;
    if node.kind() != NodeKind::File {
        return Ok(());
    }

    let dir = node
        .absolute_path
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    let body = dir
        .split(SLUG_SEPARATOR)
        .nth(1)
        .ok_or_else(|| DeriveError::MissingSlugSeparator(dir.clone()))?;
    let slug = format!("/{}/", body);

    graph.create_node_field(id, FieldValue::Slug(slug))?;
    Ok(())
}

/// Derive routing fields for a document node
///
/// Skipped when a slug is already present, so re-visiting a node is safe.
/// The owning file node must have its slug derived first.
pub fn derive_document_fields(graph: &mut ContentGraph, id: NodeId) -> Result<(), DeriveError> {
    let node = graph.get_node(id).ok_or(GraphError::UnknownNode(id))?;
    if node.kind() != NodeKind::Document || node.fields.slug.is_some() {
        return Ok(());
    }

    let document = node.absolute_path.to_string_lossy().into_owned();

    let (lang_key, path) = match parse_lang_path(&node.absolute_path) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::error!("Cannot derive route for {}: {}", document, e);
            return Err(e);
        }
    };

    let parent_id = node.parent.ok_or_else(|| DeriveError::MissingParent {
        document: document.clone(),
    })?;
    let parent = graph
        .get_node(parent_id)
        .ok_or_else(|| DeriveError::MissingParent {
            document: document.clone(),
        })?;
    let slug = parent
        .fields
        .slug
        .clone()
        .ok_or_else(|| DeriveError::MissingParentSlug {
            document: document.clone(),
            parent: parent.absolute_path.to_string_lossy().into_owned(),
        })?;

    let tags = node
        .front_matter()
        .map(|fm| fm.tags.clone())
        .unwrap_or_default();

    graph.create_node_field(id, FieldValue::LangKey(lang_key))?;
    graph.create_node_field(id, FieldValue::Path(path))?;
    graph.create_node_field(id, FieldValue::Slug(slug))?;
    if !tags.is_empty() {
        let tag_slugs = tags.iter().map(|tag| tag_path(tag)).collect();
        graph.create_node_field(id, FieldValue::TagSlugs(tag_slugs))?;
    }

    Ok(())
}

/// Derive fields for every node, directory slugs first
///
/// Document nodes copy the slug of their owning file node, so file slugs
/// must exist before any document is visited. The pipeline runs in two
/// phases instead of relying on traversal order.
pub fn derive_all(graph: &mut ContentGraph) -> Result<(), DeriveError> {
    for id in graph.node_ids(NodeKind::File) {
        derive_file_fields(graph, id)?;
    }
    for id in graph.node_ids(NodeKind::Document) {
        derive_document_fields(graph, id)?;
    }
    Ok(())
}

/// Split an absolute path into its language key and route path
///
/// `.../pages/about.en.md` yields `("en", "/en/about/")`.
fn parse_lang_path(absolute_path: &Path) -> Result<(String, String), DeriveError> {
    let raw = absolute_path.to_string_lossy();
    let remainder = raw
        .split(PAGES_SEGMENT)
        .nth(1)
        .ok_or_else(|| DeriveError::NotUnderPages(raw.to_string()))?;

    let mut segments = remainder.split('.');
    let body = segments.next().unwrap_or_default();
    let lang_key = segments
        .next()
        .ok_or_else(|| DeriveError::MissingLangSegment(raw.to_string()))?;

    Ok((lang_key.to_string(), format!("/{}{}/", lang_key, body)))
}
