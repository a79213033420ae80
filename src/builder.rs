//! One-pass tree construction from the flat block stream.
//!
//! The builder walks the ordered records left to right with three pieces
//! of running state: a section stack (the currently open heading ancestry,
//! root at the bottom), a list stack (the currently open list-nesting
//! ancestry), and the last node constructed. Construction is total: a
//! record never fails to place, and ambiguous level relationships resolve
//! by fixed rules so the same stream always yields the same tree.
//!
//! Nesting rules, per record tag:
//!
//! - `header`: the section stack pops entries at the same or a deeper
//!   level, then the new section attaches to the remaining top and is
//!   pushed. A new section also closes any open list scope.
//! - `para`, `table`, and untagged records attach to the innermost open
//!   section (the root when none is open).
//! - `list_item`: a paragraph immediately before an item at the same or a
//!   deeper indent becomes the item's container. An item deeper than the
//!   previous item opens a nested scope under it; a shallower item closes
//!   scopes until it finds its own depth — same-depth items are siblings,
//!   never nested. Tables and paragraphs of unrelated depth leave an open
//!   list scope untouched, so the list resumes after the interruption.

use crate::model::{Block, BlockKind, BlockTree, Document, NodeId, Table};
use crate::record::BlockRecord;

/// Builds one document tree from an ordered record stream.
///
/// Feed records with [`push_record`](Self::push_record) in stream order,
/// then call [`finish`](Self::finish). `finish` consumes the builder, so
/// the resulting tree is frozen before any renderer can see it.
#[derive(Debug)]
pub struct TreeBuilder {
    tree: BlockTree,
    section_stack: Vec<NodeId>,
    list_stack: Vec<NodeId>,
    previous: Option<NodeId>,
}

impl TreeBuilder {
    /// Create a builder holding an empty tree.
    pub fn new() -> Self {
        let tree = BlockTree::new();
        let root = tree.root();
        Self {
            tree,
            section_stack: vec![root],
            list_stack: Vec::new(),
            previous: None,
        }
    }

    /// Place the next record of the stream into the tree.
    pub fn push_record(&mut self, record: &BlockRecord) {
        let id = match record.tag.as_deref() {
            Some("header") => self.push_section(record),
            Some("para") => self.push_block(BlockKind::Paragraph, record),
            Some("table") => {
                self.push_block(BlockKind::Table(Table::from_record(record)), record)
            }
            Some("list_item") => self.push_list_item(record),
            other => {
                if let Some(tag) = other {
                    log::debug!(
                        "unrecognized tag {:?} at block {}, keeping as generic",
                        tag,
                        record.block_idx
                    );
                }
                self.push_block(BlockKind::Generic, record)
            }
        };
        self.previous = Some(id);
    }

    /// Consume the builder and hand out the frozen document.
    pub fn finish(self) -> Document {
        log::debug!(
            "built tree with {} nodes, {} open sections",
            self.tree.len(),
            self.section_stack.len() - 1
        );
        Document::new(self.tree)
    }

    /// The innermost open section, or the root when none is open.
    fn current_section(&self) -> NodeId {
        self.section_stack
            .last()
            .copied()
            .unwrap_or_else(|| self.tree.root())
    }

    fn push_block(&mut self, kind: BlockKind, record: &BlockRecord) -> NodeId {
        let id = self.tree.insert(Block::from_record(kind, record));
        let parent = self.current_section();
        self.tree.attach(parent, id);
        id
    }

    /// A heading becomes a child of the nearest open section of strictly
    /// lesser level.
    fn push_section(&mut self, record: &BlockRecord) -> NodeId {
        let id = self
            .tree
            .insert(Block::from_record(BlockKind::Section, record));
        let level = record.level;

        while self.section_stack.len() > 1 {
            let top = self.current_section();
            if self.tree.get(top).level >= level {
                self.section_stack.pop();
            } else {
                break;
            }
        }

        let parent = self.current_section();
        self.tree.attach(parent, id);
        self.section_stack.push(id);

        if !self.list_stack.is_empty() {
            log::debug!("section at level {} closes an open list scope", level);
            self.list_stack.clear();
        }
        id
    }

    fn push_list_item(&mut self, record: &BlockRecord) -> NodeId {
        let id = self
            .tree
            .insert(Block::from_record(BlockKind::ListItem, record));
        let level = record.level;

        if let Some(prev) = self.previous {
            let (prev_is_para, prev_is_item, prev_level) = {
                let block = self.tree.get(prev);
                (block.is_paragraph(), block.is_list_item(), block.level)
            };

            if prev_is_para && level >= prev_level {
                // The paragraph retroactively becomes the list's container.
                self.list_stack.push(prev);
            } else if prev_is_item {
                if level > prev_level {
                    self.list_stack.push(prev);
                } else if level < prev_level {
                    self.close_list_scopes(level);
                }
            }
        }

        let parent = self
            .list_stack
            .last()
            .copied()
            .unwrap_or_else(|| self.current_section());
        self.tree.attach(parent, id);
        id
    }

    /// Ascend out of list scopes deeper than `level`. An item entry at the
    /// same depth closes too (same-depth items are siblings); a paragraph
    /// container stays open for the items at its own depth.
    fn close_list_scopes(&mut self, level: i32) {
        while let Some(&top) = self.list_stack.last() {
            let block = self.tree.get(top);
            let closes = if block.is_paragraph() {
                block.level > level
            } else {
                block.level >= level
            };
            if closes {
                self.list_stack.pop();
            } else {
                break;
            }
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a document from an ordered record stream in one call.
pub fn build<'a, I>(records: I) -> Document
where
    I: IntoIterator<Item = &'a BlockRecord>,
{
    let mut builder = TreeBuilder::new();
    for record in records {
        builder.push_record(record);
    }
    builder.finish()
}
