//! # relayout
//!
//! Reconstructs a navigable, hierarchical document from a flat, ordered
//! sequence of classified layout blocks.
//!
//! Layout-analysis services classify a page into leveled content units —
//! headings, paragraphs, list items, tables — but emit them as a flat
//! stream with no parent pointers. This library infers the tree that
//! structure implies (heading outlines, list nesting, paragraphs that
//! introduce lists) and renders it as plain text, HTML, or JSON, with
//! deduplicated full-document views.
//!
//! ## Quick Start
//!
//! ```
//! use relayout::BlockRecord;
//!
//! let records = vec![
//!     BlockRecord::header("1. Overview", 0),
//!     BlockRecord::paragraph("The system has three parts:"),
//!     BlockRecord::list_item("the block model,", 1),
//!     BlockRecord::list_item("the tree builder,", 1),
//!     BlockRecord::list_item("the document facade.", 1),
//! ];
//!
//! let doc = relayout::build(&records);
//! assert_eq!(doc.title().as_deref(), Some("1. Overview"));
//!
//! let text = doc.to_text(false);
//! assert!(text.contains("the tree builder,"));
//! ```
//!
//! ## Features
//!
//! - **Structure inference**: heading-outline nesting, list indentation,
//!   retroactive paragraph containers for the lists they introduce
//! - **Multiple output formats**: plain text, HTML, JSON
//! - **Deduplicated views**: render every leaf once, or every section
//!   independently
//! - **Context assembly**: breadcrumbs and ancestor text for any node
//! - **Lenient input**: missing fields default, unknown tags degrade to
//!   generic blocks, construction never fails
//!
//! The input stream itself (downloading, calling a layout service,
//! unwrapping its response envelope) is the caller's concern; this crate
//! starts at the array of classified records.

pub mod builder;
pub mod error;
pub mod model;
pub mod record;
pub mod render;

// Re-export commonly used types
pub use builder::{build, TreeBuilder};
pub use error::{Error, Result};
pub use model::{
    Block, BlockKind, BlockTree, CellValue, Document, NodeId, Table, TableCell, TableHeader,
    TableRow,
};
pub use record::{BlockRecord, CellRecord, CellValueRecord, RowRecord};
pub use render::JsonFormat;

/// Build a document from a JSON array of block records.
///
/// Records decode leniently: absent optional fields take their defaults
/// (`-1` for numeric positions, empty sequences for text), and records
/// with a missing or unknown tag are kept as generic blocks. The payload
/// itself must be a JSON array.
///
/// # Example
///
/// ```
/// let json = r#"[
///     {"tag": "header", "level": 0, "sentences": ["Report"]},
///     {"tag": "para", "sentences": ["All systems nominal."]}
/// ]"#;
///
/// let doc = relayout::from_json(json).unwrap();
/// assert_eq!(doc.to_text(false), "Report\nAll systems nominal.");
/// ```
pub fn from_json(json: &str) -> Result<Document> {
    let records: Vec<BlockRecord> =
        serde_json::from_str(json).map_err(|e| Error::InvalidRecords(e.to_string()))?;
    Ok(build(&records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"tag": "header", "level": 0, "sentences": ["Title"]},
            {"tag": "para", "sentences": ["Body text."]}
        ]"#;

        let doc = from_json(json).unwrap();
        assert_eq!(doc.title().as_deref(), Some("Title"));
        assert_eq!(doc.block_count(), 3);
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        let result = from_json(r#"{"blocks": []}"#);
        assert!(matches!(result, Err(Error::InvalidRecords(_))));
    }

    #[test]
    fn test_from_json_empty_array() {
        let doc = from_json("[]").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_from_json_tolerates_bare_records() {
        // A record with nothing but a tag still places.
        let doc = from_json(r#"[{"tag": "para"}, {}]"#).unwrap();
        assert_eq!(doc.block_count(), 3);
    }
}
