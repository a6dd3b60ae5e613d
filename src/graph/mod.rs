//! In-memory content graph
//!
//! Holds every ingested source file and parsed document together with the
//! routing fields derived for them, and answers the single read-only query
//! the page generator issues once ingestion is complete.

mod node;

pub use node::{ContentNode, FieldValue, NodeData, NodeFields, NodeId, NodeKind};

use std::path::PathBuf;
use thiserror::Error;

use crate::content::FrontMatter;

/// Errors for graph access and node decoration
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("unknown node id {0}")]
    UnknownNode(NodeId),
    #[error("field {name} already set on node {id}")]
    FieldExists { id: NodeId, name: &'static str },
}

/// Query description for the page generator
#[derive(Debug, Clone)]
pub struct DocumentQuery {
    /// Maximum number of rows returned
    pub limit: usize,
}

impl Default for DocumentQuery {
    fn default() -> Self {
        Self { limit: 1000 }
    }
}

/// One row of a document query result
#[derive(Debug, Clone)]
pub struct DocumentRow {
    pub slug: Option<String>,
    pub path: Option<String>,
    pub tags: Vec<String>,
}

/// Result of a document query: data rows plus any per-document errors
#[derive(Debug, Default)]
pub struct QueryResult {
    pub errors: Vec<String>,
    pub rows: Vec<DocumentRow>,
}

/// The in-memory content graph
#[derive(Debug, Default)]
pub struct ContentGraph {
    nodes: Vec<ContentNode>,
}

impl ContentGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file node for a source path
    pub fn create_file_node(&mut self, absolute_path: impl Into<PathBuf>) -> NodeId {
        self.push_node(absolute_path.into(), None, NodeData::File)
    }

    /// Add a document node owned by a file node
    pub fn create_document_node(
        &mut self,
        absolute_path: impl Into<PathBuf>,
        parent: NodeId,
        front_matter: FrontMatter,
    ) -> NodeId {
        self.push_node(
            absolute_path.into(),
            Some(parent),
            NodeData::Document(front_matter),
        )
    }

    fn push_node(
        &mut self,
        absolute_path: PathBuf,
        parent: Option<NodeId>,
        data: NodeData,
    ) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(ContentNode {
            id,
            absolute_path,
            parent,
            data,
            fields: NodeFields::default(),
        });
        id
    }

    /// Node lookup interface
    pub fn get_node(&self, id: NodeId) -> Option<&ContentNode> {
        self.nodes.get(id)
    }

    /// All nodes, in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &ContentNode> {
        self.nodes.iter()
    }

    /// Ids of all nodes of one kind, in insertion order
    pub fn node_ids(&self, kind: NodeKind) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|n| n.kind() == kind)
            .map(|n| n.id)
            .collect()
    }

    /// Node decoration interface: append one named field to a node
    ///
    /// Fields are append-only; setting a field that is already present is
    /// an error.
    pub fn create_node_field(&mut self, id: NodeId, value: FieldValue) -> Result<(), GraphError> {
        let node = self.nodes.get_mut(id).ok_or(GraphError::UnknownNode(id))?;
        let taken = match &value {
            FieldValue::Slug(_) => node.fields.slug.is_some(),
            FieldValue::LangKey(_) => node.fields.lang_key.is_some(),
            FieldValue::Path(_) => node.fields.path.is_some(),
            FieldValue::TagSlugs(_) => node.fields.tag_slugs.is_some(),
        };
        if taken {
            return Err(GraphError::FieldExists {
                id,
                name: value.name(),
            });
        }
        match value {
            FieldValue::Slug(v) => node.fields.slug = Some(v),
            FieldValue::LangKey(v) => node.fields.lang_key = Some(v),
            FieldValue::Path(v) => node.fields.path = Some(v),
            FieldValue::TagSlugs(v) => node.fields.tag_slugs = Some(v),
        }
        Ok(())
    }

    /// Query all publishable documents, capped at `query.limit` rows
    ///
    /// Drafts are never part of the result set. A matching document that
    /// resolved neither a `path` nor a `slug` contributes an error entry
    /// instead of a row; callers decide whether that is fatal.
    pub async fn query_documents(&self, query: DocumentQuery) -> QueryResult {
        let mut result = QueryResult::default();

        for node in &self.nodes {
            let fm = match &node.data {
                NodeData::Document(fm) if !fm.draft => fm,
                _ => continue,
            };
            if result.rows.len() >= query.limit {
                break;
            }
            if node.fields.path.is_none() && node.fields.slug.is_none() {
                result.errors.push(format!(
                    "document {} has no derived path or slug",
                    node.absolute_path.display()
                ));
                continue;
            }
            result.rows.push(DocumentRow {
                slug: node.fields.slug.clone(),
                path: node.fields.path.clone(),
                tags: fm.tags.clone(),
            });
        }

        result
    }
}
