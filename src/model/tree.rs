//! The block tree arena.
//!
//! All nodes of a reconstructed document live in one `Vec`; child and
//! parent links are [`NodeId`] indices. The arena owns every node exactly
//! once, so parent back-references cannot form ownership cycles. After the
//! builder finishes there is no `&mut` access path, which makes concurrent
//! read-only rendering race-free without locks.

use serde::{Deserialize, Serialize};

use super::{Block, BlockKind, NodeId};

/// An arena-backed document tree with a single synthetic root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockTree {
    nodes: Vec<Block>,
}

impl BlockTree {
    /// Create a tree containing only the synthetic root.
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Block::root()],
        }
    }

    /// Id of the synthetic root.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Look up a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this tree.
    pub fn get(&self, id: NodeId) -> &Block {
        &self.nodes[id.0]
    }

    /// Total number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree holds nothing but the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Child ids of a node, in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Parent id of a node, `None` only for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub(crate) fn insert(&mut self, block: Block) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(block);
        id
    }

    /// Append `child` to `parent`'s children and set the back-reference.
    /// The only structural mutation; used solely during construction.
    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Pre-order depth-first traversal starting at `id` (inclusive).
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            stack: vec![id],
        }
    }

    /// Ancestors of a node, root first, nearest parent last.
    pub fn parent_chain(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            chain.push(ancestor);
            current = self.parent(ancestor);
        }
        chain.reverse();
        chain
    }

    /// Breadcrumb context for a node: ancestor section titles joined with
    /// `" > "`, followed by ancestor paragraph/list-item text one per line.
    pub fn parent_text(&self, id: NodeId) -> String {
        let mut titles = Vec::new();
        let mut body = Vec::new();

        for ancestor in self.parent_chain(id) {
            let block = self.get(ancestor);
            if block.is_section() {
                titles.push(self.to_text(ancestor, false, false));
            } else if block.is_paragraph() || block.is_list_item() {
                body.push(self.to_text(ancestor, false, false));
            }
        }

        let mut text = titles.join(" > ");
        if !body.is_empty() {
            text.push('\n');
            text.push_str(&body.join("\n"));
        }
        text
    }

    /// A content fragment with its surrounding context: the breadcrumb
    /// (unless suppressed) followed by the node's own rendering, recursive
    /// for paragraphs, list items and tables.
    pub fn context_text(&self, id: NodeId, include_section_info: bool) -> String {
        let mut out = String::new();
        if include_section_info {
            out.push_str(&self.parent_text(id));
            out.push('\n');
        }

        let block = self.get(id);
        let rendered = if block.is_paragraph() || block.is_list_item() || block.is_table() {
            self.to_text(id, true, true)
        } else {
            self.to_text(id, false, false)
        };
        out.push_str(&rendered);
        out
    }

    /// Render a node as plain text.
    ///
    /// The node's own text is its sentence lines joined with newlines (a
    /// table renders its header/row lines instead). With `include_children`
    /// each child's rendering follows on its own line, in document order;
    /// `recurse` propagates `include_children` down every level, while
    /// `recurse = false` stops after the immediate children's own text.
    pub fn to_text(&self, id: NodeId, include_children: bool, recurse: bool) -> String {
        let block = self.get(id);
        let mut out = match &block.kind {
            BlockKind::Table(table) => table.to_text(),
            _ => block.sentences.join("\n"),
        };

        if include_children {
            for &child in &block.children {
                out.push('\n');
                out.push_str(&self.to_text(child, recurse, recurse));
            }
        }
        out
    }

    /// Render a node as HTML.
    ///
    /// Sections become `<hN>` with N = level + 1 capped at 6, paragraphs
    /// `<p>` with included children in a nested `<ul>`, list items `<li>`
    /// with a nested `<ul>`, tables a full `<table>` element, generic
    /// blocks `<div>`. The root contributes no markup of its own. Text
    /// content is HTML-escaped.
    pub fn to_html(&self, id: NodeId, include_children: bool, recurse: bool) -> String {
        let block = self.get(id);
        match &block.kind {
            BlockKind::Section => {
                let n = (block.level + 1).clamp(1, 6);
                let mut out = format!(
                    "<h{}>{}</h{}>",
                    n,
                    html_escape::encode_text(&block.title()),
                    n
                );
                if include_children {
                    for &child in &block.children {
                        out.push_str(&self.to_html(child, recurse, recurse));
                    }
                }
                out
            }
            BlockKind::Paragraph => {
                let mut out = format!(
                    "<p>{}",
                    html_escape::encode_text(&block.sentences.join("\n"))
                );
                self.push_children_list(&mut out, block, include_children, recurse);
                out.push_str("</p>");
                out
            }
            BlockKind::ListItem => {
                let mut out = format!(
                    "<li>{}",
                    html_escape::encode_text(&block.sentences.join("\n"))
                );
                self.push_children_list(&mut out, block, include_children, recurse);
                out.push_str("</li>");
                out
            }
            BlockKind::Table(table) => {
                let mut out = table.to_html();
                if include_children {
                    for &child in &block.children {
                        out.push_str(&self.to_html(child, recurse, recurse));
                    }
                }
                out
            }
            BlockKind::Generic => {
                let mut out = format!(
                    "<div>{}</div>",
                    html_escape::encode_text(&block.sentences.join("\n"))
                );
                if include_children {
                    for &child in &block.children {
                        out.push_str(&self.to_html(child, recurse, recurse));
                    }
                }
                out
            }
            BlockKind::Root => {
                let mut out = String::new();
                if include_children {
                    for &child in &block.children {
                        out.push_str(&self.to_html(child, recurse, recurse));
                    }
                }
                out
            }
        }
    }

    /// Included children of paragraphs and list items render inside a
    /// nested `<ul>`.
    fn push_children_list(
        &self,
        out: &mut String,
        block: &Block,
        include_children: bool,
        recurse: bool,
    ) {
        if include_children && !block.children.is_empty() {
            out.push_str("<ul>");
            for &child in &block.children {
                out.push_str(&self.to_html(child, recurse, recurse));
            }
            out.push_str("</ul>");
        }
    }
}

/// Pre-order depth-first iterator over a subtree.
pub struct Descendants<'a> {
    tree: &'a BlockTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        // Push in reverse so the leftmost child surfaces first.
        for &child in self.tree.children(id).iter().rev() {
            self.stack.push(child);
        }
        Some(id)
    }
}
