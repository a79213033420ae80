//! Input record types for the flat, classified block stream.
//!
//! A layout-analysis service emits an ordered sequence of records, each
//! carrying a type tag and a nesting level but no parent pointer. These
//! types decode that stream leniently: every optional field has a default
//! (`-1` for absent numeric fields, empty sequences for absent text), so a
//! record missing anything but its position in the stream still decodes.

use serde::{Deserialize, Serialize};

/// One classified content unit from the flat stream.
///
/// The `tag` names the block variant (`"header"`, `"para"`, `"list_item"`,
/// `"table"`); records with a missing or unrecognized tag are kept as
/// generic blocks rather than rejected. Spatial fields are opaque
/// pass-through metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockRecord {
    /// Block variant discriminator
    pub tag: Option<String>,

    /// Heading depth for headers, indent depth for list items
    pub level: i32,

    /// Page the block was found on
    pub page_idx: i32,

    /// Position in the original flat stream
    pub block_idx: i32,

    /// Top edge of the block on the page
    pub top: f64,

    /// Left edge of the block on the page
    pub left: f64,

    /// Bounding box, passed through untouched
    pub bbox: Vec<f64>,

    /// The block's own text lines
    pub sentences: Vec<String>,

    /// Table name, for `"table"` records
    pub name: Option<String>,

    /// Row records, for `"table"` records
    pub table_rows: Vec<RowRecord>,
}

impl Default for BlockRecord {
    fn default() -> Self {
        Self {
            tag: None,
            level: -1,
            page_idx: -1,
            block_idx: -1,
            top: -1.0,
            left: -1.0,
            bbox: Vec::new(),
            sentences: Vec::new(),
            name: None,
            table_rows: Vec::new(),
        }
    }
}

impl BlockRecord {
    /// Create a record with the given tag and defaults everywhere else.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Default::default()
        }
    }

    /// Create a `"header"` record with a title and heading depth.
    pub fn header(title: impl Into<String>, level: i32) -> Self {
        Self::new("header").with_level(level).with_sentence(title)
    }

    /// Create a `"para"` record with a single line of text.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new("para").with_sentence(text)
    }

    /// Create a `"list_item"` record with text and indent depth.
    pub fn list_item(text: impl Into<String>, level: i32) -> Self {
        Self::new("list_item").with_level(level).with_sentence(text)
    }

    /// Set the level and return self.
    pub fn with_level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    /// Append a sentence line and return self.
    pub fn with_sentence(mut self, line: impl Into<String>) -> Self {
        self.sentences.push(line.into());
        self
    }

    /// Set the stream position metadata and return self.
    pub fn at(mut self, page_idx: i32, block_idx: i32) -> Self {
        self.page_idx = page_idx;
        self.block_idx = block_idx;
        self
    }
}

/// One row of a `"table"` record.
///
/// `row_type` distinguishes header rows (`"table_header"`) and full-width
/// rows (`"full_row"`, a single cell spanning the table) from plain body
/// rows. A full-width row carries its cell fields directly instead of a
/// `cells` sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RowRecord {
    /// Row sub-type: `"table_header"`, `"full_row"`, or absent for body rows
    #[serde(rename = "type")]
    pub row_type: Option<String>,

    /// Cells of the row, in column order
    pub cells: Vec<CellRecord>,

    /// Cell value, for `"full_row"` rows
    pub cell_value: Option<CellValueRecord>,

    /// Column span, for `"full_row"` rows
    pub col_span: u32,
}

impl Default for RowRecord {
    fn default() -> Self {
        Self {
            row_type: None,
            cells: Vec::new(),
            cell_value: None,
            col_span: 1,
        }
    }
}

impl RowRecord {
    /// Create a body row from plain text cell values.
    pub fn body<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self {
            cells: values.into_iter().map(CellRecord::text).collect(),
            ..Default::default()
        }
    }

    /// Create a header row from plain text cell values.
    pub fn header<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self {
            row_type: Some("table_header".to_string()),
            ..Self::body(values)
        }
    }

    /// Create a full-width row from a single text value.
    pub fn full(value: impl Into<String>, col_span: u32) -> Self {
        Self {
            row_type: Some("full_row".to_string()),
            cell_value: Some(CellValueRecord::Text(value.into())),
            col_span,
            ..Default::default()
        }
    }
}

/// One cell of a table row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CellRecord {
    /// Number of columns the cell spans
    pub col_span: u32,

    /// The cell content
    pub cell_value: Option<CellValueRecord>,
}

impl Default for CellRecord {
    fn default() -> Self {
        Self {
            col_span: 1,
            cell_value: None,
        }
    }
}

impl CellRecord {
    /// Create a cell holding plain text.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            col_span: 1,
            cell_value: Some(CellValueRecord::Text(value.into())),
        }
    }
}

/// A cell value: either a scalar string or an embedded paragraph-shaped
/// record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValueRecord {
    /// Plain text content
    Text(String),

    /// A nested paragraph-shaped record
    Paragraph(Box<BlockRecord>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_defaults() {
        let record: BlockRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.tag, None);
        assert_eq!(record.level, -1);
        assert_eq!(record.page_idx, -1);
        assert_eq!(record.block_idx, -1);
        assert_eq!(record.top, -1.0);
        assert!(record.bbox.is_empty());
        assert!(record.sentences.is_empty());
        assert!(record.table_rows.is_empty());
    }

    #[test]
    fn test_record_decode() {
        let json = r#"{
            "tag": "header",
            "level": 2,
            "page_idx": 0,
            "block_idx": 7,
            "sentences": ["3.1 Results"]
        }"#;
        let record: BlockRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.tag.as_deref(), Some("header"));
        assert_eq!(record.level, 2);
        assert_eq!(record.sentences, vec!["3.1 Results"]);
    }

    #[test]
    fn test_table_record_decode() {
        let json = r#"{
            "tag": "table",
            "name": "results",
            "table_rows": [
                {"type": "table_header", "cells": [{"cell_value": "Name"}, {"cell_value": "Age"}]},
                {"cells": [{"cell_value": "Alice"}, {"cell_value": "30", "col_span": 2}]},
                {"type": "full_row", "cell_value": "Totals", "col_span": 3}
            ]
        }"#;
        let record: BlockRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.table_rows.len(), 3);
        assert_eq!(
            record.table_rows[0].row_type.as_deref(),
            Some("table_header")
        );
        assert_eq!(record.table_rows[1].cells[1].col_span, 2);
        assert_eq!(record.table_rows[2].col_span, 3);
    }

    #[test]
    fn test_nested_paragraph_cell_decode() {
        let json = r#"{"cell_value": {"tag": "para", "sentences": ["line one", "line two"]}}"#;
        let cell: CellRecord = serde_json::from_str(json).unwrap();
        match cell.cell_value {
            Some(CellValueRecord::Paragraph(ref p)) => {
                assert_eq!(p.sentences.len(), 2);
            }
            other => panic!("expected paragraph cell value, got {:?}", other),
        }
    }

    #[test]
    fn test_builder_helpers() {
        let record = BlockRecord::header("Title", 1).at(0, 3);
        assert_eq!(record.tag.as_deref(), Some("header"));
        assert_eq!(record.level, 1);
        assert_eq!(record.block_idx, 3);
        assert_eq!(record.sentences, vec!["Title"]);
    }
}
