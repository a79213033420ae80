//! Plain text rendering for reconstructed documents.

use crate::model::Document;

/// Render the whole document as plain text.
///
/// Sections render recursively, one after another in document order. With
/// `include_duplicates` every section renders independently, so nested
/// sections' content appears once under each enclosing section and once on
/// its own; without it only sections with no section ancestor render,
/// which emits every leaf exactly once.
pub fn to_text(doc: &Document, include_duplicates: bool) -> String {
    let sections = if include_duplicates {
        doc.sections()
    } else {
        doc.top_sections()
    };

    sections
        .iter()
        .map(|&id| doc.tree().to_text(id, true, true))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::BlockRecord;

    #[test]
    fn test_to_text_deduplicated() {
        let records = vec![
            BlockRecord::header("Outer", 0),
            BlockRecord::header("Inner", 1),
            BlockRecord::paragraph("Leaf text."),
        ];
        let doc = crate::build(&records);

        let text = to_text(&doc, false);
        assert_eq!(text, "Outer\nInner\nLeaf text.");
        assert_eq!(text.matches("Leaf text.").count(), 1);
    }

    #[test]
    fn test_to_text_with_duplicates() {
        let records = vec![
            BlockRecord::header("Outer", 0),
            BlockRecord::header("Inner", 1),
            BlockRecord::paragraph("Leaf text."),
        ];
        let doc = crate::build(&records);

        // The nested section renders under its parent and again on its own.
        let text = to_text(&doc, true);
        assert_eq!(text.matches("Leaf text.").count(), 2);
        assert_eq!(text.matches("Inner").count(), 2);
    }

    #[test]
    fn test_content_outside_sections_is_invisible() {
        // Document rendering walks sections only; a sectionless stream
        // renders to nothing.
        let records = vec![BlockRecord::paragraph("floating")];
        let doc = crate::build(&records);
        assert_eq!(to_text(&doc, false), "");
    }
}
