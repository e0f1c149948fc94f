//! Markdown rendering for element sequences.

use crate::model::Element;

/// Render a sequence of elements as Markdown.
///
/// Each element contributes its own Markdown form, unframed and unescaped;
/// elements with no Markdown form (checkboxes) are skipped. Blocks are
/// joined with blank lines.
pub fn to_markdown(elements: &[Element]) -> String {
    elements
        .iter()
        .filter_map(Element::to_markdown)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CheckBox, TextElement};

    #[test]
    fn test_to_markdown_joins_blocks() {
        let elements: Vec<Element> = vec![
            TextElement::title("Intro").into(),
            TextElement::narrative_text("Body text.").into(),
            TextElement::list_item("first").into(),
        ];
        assert_eq!(to_markdown(&elements), "# Intro\n\nBody text.\n\n- first");
    }

    #[test]
    fn test_to_markdown_skips_checkboxes() {
        let elements: Vec<Element> = vec![
            TextElement::title("Form").into(),
            CheckBox::new(true).into(),
            TextElement::narrative_text("done").into(),
        ];
        assert_eq!(to_markdown(&elements), "# Form\n\ndone");
    }

    #[test]
    fn test_to_markdown_empty() {
        assert_eq!(to_markdown(&[]), "");
    }
}
