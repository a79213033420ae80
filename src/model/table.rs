//! Table types.
//!
//! Tables arrive fully structured inside a single `"table"` record, so
//! their rows and cells are owned values rather than tree nodes. Each type
//! renders itself to plain text and to HTML.

use serde::{Deserialize, Serialize};

use crate::record::{BlockRecord, CellRecord, CellValueRecord, RowRecord};

/// A table: ordered header rows, ordered body rows, optional name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    /// Table name, empty when the source provided none
    pub name: String,

    /// Header rows, in source order
    pub headers: Vec<TableHeader>,

    /// Body rows, in source order
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Build a table from a `"table"` record's row sequence.
    ///
    /// Rows typed `"table_header"` become header rows, rows typed
    /// `"full_row"` become a single full-width cell, everything else is a
    /// body row.
    pub(crate) fn from_record(record: &BlockRecord) -> Self {
        let mut table = Table {
            name: record.name.clone().unwrap_or_default(),
            ..Default::default()
        };

        for row in &record.table_rows {
            match row.row_type.as_deref() {
                Some("table_header") => table.headers.push(TableHeader {
                    cells: row.cells.iter().map(TableCell::from_record).collect(),
                }),
                Some("full_row") => table.rows.push(TableRow {
                    cells: vec![TableCell::full_row(row)],
                }),
                _ => table.rows.push(TableRow {
                    cells: row.cells.iter().map(TableCell::from_record).collect(),
                }),
            }
        }

        table
    }

    /// Check if the table has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Column count of the first header row, or of the first body row when
    /// there is no header.
    pub fn column_count(&self) -> usize {
        self.headers
            .first()
            .map(|h| h.cells.len())
            .or_else(|| self.rows.first().map(|r| r.cells.len()))
            .unwrap_or(0)
    }

    /// Render the table as pipe-delimited text.
    ///
    /// One line per header/body row, with a `---` separator directly
    /// beneath the first header row carrying one marker per cell of that
    /// row. Mismatched column counts across rows are reproduced as-is.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();

        for (i, header) in self.headers.iter().enumerate() {
            lines.push(cells_line(&header.cells));
            if i == 0 {
                lines.push(separator_line(header.cells.len()));
            }
        }
        for row in &self.rows {
            lines.push(cells_line(&row.cells));
        }

        lines.join("\n")
    }

    /// Render the table as an HTML `<table>` element.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<table>");

        if !self.headers.is_empty() {
            out.push_str("<thead>");
            for header in &self.headers {
                out.push_str(&header.row_html());
            }
            out.push_str("</thead>");
        }

        out.push_str("<tbody>");
        for row in &self.rows {
            out.push_str(&row.to_html());
        }
        out.push_str("</tbody></table>");

        out
    }
}

/// A header row of a table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableHeader {
    /// Cells in column order
    pub cells: Vec<TableCell>,
}

impl TableHeader {
    /// Render as a pipe-delimited line followed by its separator line.
    pub fn to_text(&self) -> String {
        format!(
            "{}\n{}",
            cells_line(&self.cells),
            separator_line(self.cells.len())
        )
    }

    /// Render as a standalone `<thead>` element.
    pub fn to_html(&self) -> String {
        format!("<thead>{}</thead>", self.row_html())
    }

    /// The bare `<tr>` markup, for embedding in a table's own `<thead>`.
    pub(crate) fn row_html(&self) -> String {
        let mut out = String::from("<tr>");
        for cell in &self.cells {
            out.push_str(&cell.to_html(true));
        }
        out.push_str("</tr>");
        out
    }
}

/// A body row of a table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in column order; a full-width row holds a single cell
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Render as a pipe-delimited line.
    pub fn to_text(&self) -> String {
        cells_line(&self.cells)
    }

    /// Render as a `<tr>` element with `<td>` cells.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<tr>");
        for cell in &self.cells {
            out.push_str(&cell.to_html(false));
        }
        out.push_str("</tr>");
        out
    }
}

/// A table cell: a column span and either scalar text or an embedded
/// paragraph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCell {
    /// Number of columns the cell spans
    pub col_span: u32,

    /// The cell content
    pub value: CellValue,
}

impl TableCell {
    /// Create a cell holding plain text.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            col_span: 1,
            value: CellValue::Text(value.into()),
        }
    }

    pub(crate) fn from_record(cell: &CellRecord) -> Self {
        Self {
            col_span: cell.col_span,
            value: CellValue::from_record(cell.cell_value.as_ref()),
        }
    }

    /// Build the single cell of a `"full_row"` row, which carries its cell
    /// fields directly.
    pub(crate) fn full_row(row: &RowRecord) -> Self {
        Self {
            col_span: row.col_span,
            value: CellValue::from_record(row.cell_value.as_ref()),
        }
    }

    /// The cell's text content.
    pub fn to_text(&self) -> String {
        match &self.value {
            CellValue::Text(s) => s.clone(),
            CellValue::Paragraph { sentences } => sentences.join("\n"),
        }
    }

    /// Render as a `<th>` (header) or `<td>` (body) element, with a
    /// `colspan` attribute when the span exceeds one column.
    pub fn to_html(&self, header: bool) -> String {
        let tag = if header { "th" } else { "td" };
        let content = match &self.value {
            CellValue::Text(s) => html_escape::encode_text(s).into_owned(),
            CellValue::Paragraph { sentences } => {
                let text = sentences.join("\n");
                format!("<p>{}</p>", html_escape::encode_text(&text))
            }
        };

        if self.col_span > 1 {
            format!(
                "<{} colspan=\"{}\">{}</{}>",
                tag, self.col_span, content, tag
            )
        } else {
            format!("<{}>{}</{}>", tag, content, tag)
        }
    }
}

/// Content of a table cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Plain text
    Text(String),

    /// An embedded paragraph's text lines
    Paragraph {
        /// The paragraph's own lines
        sentences: Vec<String>,
    },
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Text(String::new())
    }
}

impl CellValue {
    fn from_record(value: Option<&CellValueRecord>) -> Self {
        match value {
            None => CellValue::Text(String::new()),
            Some(CellValueRecord::Text(s)) => CellValue::Text(s.clone()),
            Some(CellValueRecord::Paragraph(p)) => CellValue::Paragraph {
                sentences: p.sentences.clone(),
            },
        }
    }
}

/// Pipe-delimited line for a row of cells. Newlines inside cell text are
/// flattened to spaces so each row stays a single line.
fn cells_line(cells: &[TableCell]) -> String {
    let texts: Vec<String> = cells
        .iter()
        .map(|c| c.to_text().replace('\n', " "))
        .collect();
    format!("| {} |", texts.join(" | "))
}

/// Separator line with one `---` marker per cell.
fn separator_line(count: usize) -> String {
    let markers = vec!["---"; count];
    format!("| {} |", markers.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table {
            name: String::new(),
            headers: vec![TableHeader {
                cells: vec![
                    TableCell::text("Name"),
                    TableCell::text("Age"),
                    TableCell::text("City"),
                ],
            }],
            rows: vec![
                TableRow {
                    cells: vec![
                        TableCell::text("Alice"),
                        TableCell::text("30"),
                        TableCell::text("Seoul"),
                    ],
                },
                TableRow {
                    cells: vec![
                        TableCell::text("Bob"),
                        TableCell::text("25"),
                        TableCell::text("Busan"),
                    ],
                },
            ],
        }
    }

    #[test]
    fn test_table_text_line_count() {
        let text = sample_table().to_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "| Name | Age | City |");
        assert_eq!(lines[1], "| --- | --- | --- |");
        assert_eq!(lines[2], "| Alice | 30 | Seoul |");
        assert_eq!(lines[3], "| Bob | 25 | Busan |");
    }

    #[test]
    fn test_table_html() {
        let html = sample_table().to_html();
        assert!(html.starts_with("<table><thead><tr><th>Name</th>"));
        assert!(html.contains("<tbody><tr><td>Alice</td>"));
        assert!(html.ends_with("</tbody></table>"));
    }

    #[test]
    fn test_headerless_table_has_no_separator() {
        let table = Table {
            rows: vec![TableRow {
                cells: vec![TableCell::text("a"), TableCell::text("b")],
            }],
            ..Default::default()
        };

        assert_eq!(table.to_text(), "| a | b |");
        assert!(!table.to_html().contains("<thead>"));
    }

    #[test]
    fn test_colspan_attribute_only_when_spanning() {
        let plain = TableCell::text("x");
        assert_eq!(plain.to_html(false), "<td>x</td>");

        let spanning = TableCell {
            col_span: 3,
            value: CellValue::Text("wide".to_string()),
        };
        assert_eq!(spanning.to_html(false), "<td colspan=\"3\">wide</td>");
    }

    #[test]
    fn test_paragraph_cell() {
        let cell = TableCell {
            col_span: 1,
            value: CellValue::Paragraph {
                sentences: vec!["first".to_string(), "second".to_string()],
            },
        };

        assert_eq!(cell.to_text(), "first\nsecond");
        assert_eq!(cell.to_html(false), "<td><p>first\nsecond</p></td>");
    }

    #[test]
    fn test_multiline_cell_flattened_in_row_line() {
        let row = TableRow {
            cells: vec![TableCell {
                col_span: 1,
                value: CellValue::Paragraph {
                    sentences: vec!["one".to_string(), "two".to_string()],
                },
            }],
        };
        assert_eq!(row.to_text(), "| one two |");
    }

    #[test]
    fn test_cell_html_escaping() {
        let cell = TableCell::text("a < b & c");
        assert_eq!(cell.to_html(false), "<td>a &lt; b &amp; c</td>");
    }

    #[test]
    fn test_from_record_full_row() {
        let record = BlockRecord {
            tag: Some("table".to_string()),
            name: Some("summary".to_string()),
            table_rows: vec![
                RowRecord::header(["A", "B"]),
                RowRecord::body(["1", "2"]),
                RowRecord::full("Totals", 2),
            ],
            ..Default::default()
        };

        let table = Table::from_record(&record);
        assert_eq!(table.name, "summary");
        assert_eq!(table.headers.len(), 1);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1].cells.len(), 1);
        assert_eq!(table.rows[1].cells[0].col_span, 2);
        assert_eq!(table.rows[1].cells[0].to_text(), "Totals");
    }
}
