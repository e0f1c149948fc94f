//! # unelements
//!
//! Typed element taxonomy for document-content extraction output.
//!
//! Extraction pipelines emit a flat sequence of semantically distinct
//! content units: titles, narrative text, list items, checkboxes, page
//! breaks. This library models those units as a closed taxonomy with two
//! stable rendering contracts: a structured dictionary form for
//! programmatic consumption and round-tripping, and a Markdown form for
//! human-readable rendering.
//!
//! ## Quick Start
//!
//! ```
//! use unelements::{render, Element, TextElement};
//!
//! let elements: Vec<Element> = vec![
//!     TextElement::title("Intro").into(),
//!     TextElement::narrative_text("Hello world.").into(),
//! ];
//!
//! let markdown = render::to_markdown(&elements);
//! assert_eq!(markdown, "# Intro\n\nHello world.");
//!
//! let json = render::to_json(&elements, unelements::JsonFormat::Compact)?;
//! let restored = render::from_json(&json)?;
//! assert_eq!(restored, elements);
//! # Ok::<(), unelements::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Closed taxonomy**: eight text categories plus checkboxes, with
//!   exhaustive match-based dispatch
//! - **Stable identity**: content-derived 128-bit identifiers that track
//!   the originally extracted text, even after cleaning
//! - **Compacting serialization**: metadata emits only present fields
//! - **Cleaning pipeline**: ordered, atomic text transforms with built-in
//!   cleaners
//! - **Type registry**: reconstruct typed elements from their serialized
//!   form, including legacy tag aliases

pub mod cleanup;
pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    derive_from_text, Category, CheckBox, Element, ElementId, ElementMetadata, TextElement,
    CHECKBOX_TAG, PAGE_BREAK_TEXT,
};
pub use render::JsonFormat;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_surface_round_trip() {
        let element: Element = TextElement::title("Intro")
            .with_metadata(ElementMetadata::new().with_page_number(1))
            .into();
        let restored = Element::from_dict(&element.to_dict()).unwrap();
        assert_eq!(restored, element);
        assert_eq!(restored.id(), element.id());
    }

    #[test]
    fn test_registry_resolves_legacy_alias() {
        let category = model::registry::resolve("BulletedText").unwrap();
        assert_eq!(category, Category::ListItem);
    }
}
