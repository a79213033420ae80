//! Block node types.

use serde::{Deserialize, Serialize};

use super::Table;
use crate::record::BlockRecord;

/// Index of a node in a [`BlockTree`](super::BlockTree) arena.
///
/// Parent back-references are stored as ids, never as a second owning
/// handle, so the tree stays acyclic under ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The closed set of block variants.
///
/// The tree builder pattern-matches exhaustively on this discriminator;
/// records with a missing or unrecognized tag become [`BlockKind::Generic`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    /// The synthetic root; exactly one per tree, never rendered as content
    Root,

    /// An untagged or unrecognized block
    Generic,

    /// A paragraph of text; may own list items that follow it
    Paragraph,

    /// A section heading; owns the blocks under it in the outline
    Section,

    /// A bulleted or numbered list entry
    ListItem,

    /// A table with header and body rows
    Table(Table),
}

/// A node in the reconstructed document tree.
///
/// Carries the variant discriminator, the nesting level, position and
/// spatial metadata from the source record, the node's own text lines, and
/// the child/parent links maintained by the builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    /// Block variant
    pub kind: BlockKind,

    /// Heading depth for sections, indent depth for list items, -1 otherwise
    pub level: i32,

    /// Page the block was found on, -1 when unknown
    pub page_idx: i32,

    /// Position in the original flat stream, -1 when unknown
    pub block_idx: i32,

    /// Top edge on the page, -1.0 when unknown
    pub top: f64,

    /// Left edge on the page, -1.0 when unknown
    pub left: f64,

    /// Bounding box, opaque pass-through
    pub bbox: Vec<f64>,

    /// The node's own text lines, excluding descendants
    pub sentences: Vec<String>,

    pub(crate) children: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl Block {
    /// Create the synthetic root node.
    pub(crate) fn root() -> Self {
        Self {
            kind: BlockKind::Root,
            level: -1,
            page_idx: -1,
            block_idx: -1,
            top: -1.0,
            left: -1.0,
            bbox: Vec::new(),
            sentences: Vec::new(),
            children: Vec::new(),
            parent: None,
        }
    }

    /// Create a node of the given kind from an input record.
    pub(crate) fn from_record(kind: BlockKind, record: &BlockRecord) -> Self {
        Self {
            kind,
            level: record.level,
            page_idx: record.page_idx,
            block_idx: record.block_idx,
            top: record.top,
            left: record.left,
            bbox: record.bbox.clone(),
            sentences: record.sentences.clone(),
            children: Vec::new(),
            parent: None,
        }
    }

    /// Child ids in document order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Parent id, `None` only for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The node's own text lines joined with newlines.
    ///
    /// For sections this is the title.
    pub fn title(&self) -> String {
        self.sentences.join("\n")
    }

    /// Check if this is the synthetic root.
    pub fn is_root(&self) -> bool {
        matches!(self.kind, BlockKind::Root)
    }

    /// Check if this is a section heading.
    pub fn is_section(&self) -> bool {
        matches!(self.kind, BlockKind::Section)
    }

    /// Check if this is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self.kind, BlockKind::Paragraph)
    }

    /// Check if this is a list item.
    pub fn is_list_item(&self) -> bool {
        matches!(self.kind, BlockKind::ListItem)
    }

    /// Check if this is a table.
    pub fn is_table(&self) -> bool {
        matches!(self.kind, BlockKind::Table(_))
    }

    /// The wire name of the node's variant.
    pub fn tag_name(&self) -> &'static str {
        match self.kind {
            BlockKind::Root => "root",
            BlockKind::Generic => "generic",
            BlockKind::Paragraph => "para",
            BlockKind::Section => "header",
            BlockKind::ListItem => "list_item",
            BlockKind::Table(_) => "table",
        }
    }
}
