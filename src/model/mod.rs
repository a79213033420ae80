//! Document model types for reconstructed block trees.
//!
//! This module defines the node variants, the arena-backed tree that owns
//! them, and the document facade consumed by the renderers. The model is
//! built once by the [`TreeBuilder`](crate::TreeBuilder) and immutable
//! afterwards.

mod block;
mod document;
mod table;
mod tree;

pub use block::{Block, BlockKind, NodeId};
pub use document::Document;
pub use table::{CellValue, Table, TableCell, TableHeader, TableRow};
pub use tree::{BlockTree, Descendants};
