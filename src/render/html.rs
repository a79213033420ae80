//! HTML rendering for reconstructed documents.

use crate::model::Document;

/// Render the whole document as HTML, wrapped in an `<html>` element.
///
/// Section selection mirrors [`to_text`](super::to_text): all sections
/// with `include_duplicates`, top sections only without.
pub fn to_html(doc: &Document, include_duplicates: bool) -> String {
    let sections = if include_duplicates {
        doc.sections()
    } else {
        doc.top_sections()
    };

    let mut out = String::from("<html>");
    for &id in &sections {
        out.push_str(&doc.tree().to_html(id, true, true));
    }
    out.push_str("</html>");
    out
}
