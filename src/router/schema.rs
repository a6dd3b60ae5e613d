//! Query-layer field extensions
//!
//! Computed fields that queries can read without the value being stored on
//! the node itself.

use crate::graph::{ContentNode, NodeKind};

/// A computed field exposed on one node kind
pub struct FieldExtension {
    /// Field name as exposed to queries
    pub name: &'static str,
    resolver: fn(&ContentNode) -> Option<String>,
}

impl FieldExtension {
    /// Resolve the field against one node
    pub fn resolve(&self, node: &ContentNode) -> Option<String> {
        (self.resolver)(node)
    }
}

/// Extensions for a node kind
///
/// Document nodes expose a `lang` field resolving to the derived route
/// path; every other kind gets an empty extension set.
pub async fn extend_node_type(kind: NodeKind) -> Vec<FieldExtension> {
    match kind {
        NodeKind::Document => vec![FieldExtension {
            name: "lang",
            resolver: |node| node.fields.path.clone(),
        }],
        _ => Vec::new(),
    }
}
