//! Content node model

use std::path::PathBuf;

use crate::content::FrontMatter;

/// Identifier of a node within the content graph
pub type NodeId = usize;

/// Kind of a content node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A source file picked up from the content tree
    File,
    /// A markdown document parsed out of a source file
    Document,
}

/// Kind-specific payload of a content node
#[derive(Debug, Clone)]
pub enum NodeData {
    File,
    Document(FrontMatter),
}

/// Routing fields derived for a node
///
/// Every field starts empty and may be set at most once.
#[derive(Debug, Clone, Default)]
pub struct NodeFields {
    pub slug: Option<String>,
    pub lang_key: Option<String>,
    pub path: Option<String>,
    pub tag_slugs: Option<Vec<String>>,
}

/// One named value for the node decoration interface
#[derive(Debug, Clone)]
pub enum FieldValue {
    Slug(String),
    LangKey(String),
    Path(String),
    TagSlugs(Vec<String>),
}

impl FieldValue {
    /// Field name as it appears in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            FieldValue::Slug(_) => "slug",
            FieldValue::LangKey(_) => "langKey",
            FieldValue::Path(_) => "path",
            FieldValue::TagSlugs(_) => "tagSlugs",
        }
    }
}

/// One node of the content graph
#[derive(Debug, Clone)]
pub struct ContentNode {
    pub id: NodeId,
    pub absolute_path: PathBuf,
    /// Owning file node, for document nodes
    pub parent: Option<NodeId>,
    pub data: NodeData,
    pub fields: NodeFields,
}

impl ContentNode {
    pub fn kind(&self) -> NodeKind {
        match self.data {
            NodeData::File => NodeKind::File,
            NodeData::Document(_) => NodeKind::Document,
        }
    }

    /// Front matter of a document node
    pub fn front_matter(&self) -> Option<&FrontMatter> {
        match &self.data {
            NodeData::Document(fm) => Some(fm),
            NodeData::File => None,
        }
    }
}
