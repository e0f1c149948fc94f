//! Element model types.
//!
//! This module defines the element taxonomy produced by document-content
//! extraction: the category set, element identity, provenance metadata,
//! and the registry used to rebuild elements from their dictionary form.

mod element;
mod id;
mod metadata;
pub mod registry;

pub use element::{Category, CheckBox, Element, TextElement, CHECKBOX_TAG, PAGE_BREAK_TEXT};
pub use id::{derive_from_text, ElementId};
pub use metadata::ElementMetadata;
