//! Document-level facade over a reconstructed block tree.

use serde::{Deserialize, Serialize};

use super::{BlockTree, NodeId};
use crate::render;

/// A reconstructed document.
///
/// Wraps the immutable [`BlockTree`] produced by the builder and exposes
/// section enumeration, deduplicated top-level section selection, and
/// whole-document rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    tree: BlockTree,
}

impl Document {
    pub(crate) fn new(tree: BlockTree) -> Self {
        Self { tree }
    }

    /// The underlying tree.
    pub fn tree(&self) -> &BlockTree {
        &self.tree
    }

    /// Id of the synthetic root.
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    /// Total number of nodes, including the root.
    pub fn block_count(&self) -> usize {
        self.tree.len()
    }

    /// Check if the document holds no content blocks.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Every section node, pre-order, in document order.
    pub fn sections(&self) -> Vec<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .filter(|&id| self.tree.get(id).is_section())
            .collect()
    }

    /// Sections with no section ancestor.
    ///
    /// Rendering exactly these with recursive children emits every leaf
    /// once: a nested section's content appears only under its outermost
    /// enclosing section. The containment test walks the full ancestor
    /// chain, so it holds at any nesting depth.
    pub fn top_sections(&self) -> Vec<NodeId> {
        self.sections()
            .into_iter()
            .filter(|&id| !self.has_section_ancestor(id))
            .collect()
    }

    fn has_section_ancestor(&self, id: NodeId) -> bool {
        self.tree
            .parent_chain(id)
            .iter()
            .any(|&ancestor| self.tree.get(ancestor).is_section())
    }

    /// The first section's title, if the document has any sections.
    ///
    /// Callers conventionally use this as the document title.
    pub fn title(&self) -> Option<String> {
        self.sections()
            .first()
            .map(|&id| self.tree.get(id).title())
    }

    /// Render the whole document as plain text.
    ///
    /// With `include_duplicates` every section renders independently, so
    /// content under nested sections is emitted once per enclosing section;
    /// without it only top sections render, emitting every leaf exactly
    /// once.
    pub fn to_text(&self, include_duplicates: bool) -> String {
        render::to_text(self, include_duplicates)
    }

    /// Render the whole document as HTML, wrapped in an `<html>` element.
    pub fn to_html(&self, include_duplicates: bool) -> String {
        render::to_html(self, include_duplicates)
    }
}

#[cfg(test)]
mod tests {
    use crate::record::BlockRecord;

    #[test]
    fn test_empty_document() {
        let doc = crate::build(&[]);
        assert!(doc.is_empty());
        assert_eq!(doc.block_count(), 1);
        assert_eq!(doc.title(), None);
        assert!(doc.sections().is_empty());
        assert_eq!(doc.to_text(false), "");
    }

    #[test]
    fn test_title_is_first_section() {
        let records = vec![
            BlockRecord::paragraph("preamble"),
            BlockRecord::header("Getting Started", 0),
            BlockRecord::header("Details", 1),
        ];
        let doc = crate::build(&records);
        assert_eq!(doc.title().as_deref(), Some("Getting Started"));
    }

    #[test]
    fn test_top_sections_two_levels_deep() {
        // A > B > C nested by heading level: only A is top, at any depth.
        let records = vec![
            BlockRecord::header("A", 0),
            BlockRecord::header("B", 1),
            BlockRecord::header("C", 2),
        ];
        let doc = crate::build(&records);

        assert_eq!(doc.sections().len(), 3);
        let top = doc.top_sections();
        assert_eq!(top.len(), 1);
        assert_eq!(doc.tree().get(top[0]).title(), "A");
    }
}
