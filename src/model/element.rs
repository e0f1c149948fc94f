//! The element taxonomy.
//!
//! An element is one semantically distinct unit of extracted document
//! content. The taxonomy is a closed set: text-bearing categories
//! ([`TextElement`] with a [`Category`] tag) and the non-text [`CheckBox`].
//! Every element exposes a structured dictionary form ([`Element::to_dict`])
//! and, for text categories, a Markdown form.

use crate::error::Result;
use crate::model::{ElementId, ElementMetadata};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Text every page-break element carries, regardless of constructor input.
pub const PAGE_BREAK_TEXT: &str = "<PAGE BREAK>";

/// The fixed type tag used by checkbox elements in the dictionary form.
pub const CHECKBOX_TAG: &str = "CheckBox";

/// Category tag of a text-bearing element.
///
/// The set is fixed and finite; the tag string doubles as the `type`
/// discriminator in the dictionary form and as the registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Free text that no classifier claimed
    UncategorizedText,
    /// Text associated with a figure caption
    FigureCaption,
    /// Multiple well-formulated sentences of body text
    NarrativeText,
    /// A narrative element that is part of a list
    ListItem,
    /// A title or heading
    Title,
    /// A postal address
    Address,
    /// Image metadata captured as text
    Image,
    /// A page break marker
    PageBreak,
}

impl Category {
    /// All categories, in registry order.
    pub const ALL: [Category; 8] = [
        Category::UncategorizedText,
        Category::FigureCaption,
        Category::NarrativeText,
        Category::ListItem,
        Category::Title,
        Category::Address,
        Category::Image,
        Category::PageBreak,
    ];

    /// The tag string for this category.
    pub fn tag(&self) -> &'static str {
        match self {
            Category::UncategorizedText => "UncategorizedText",
            Category::FigureCaption => "FigureCaption",
            Category::NarrativeText => "NarrativeText",
            Category::ListItem => "ListItem",
            Category::Title => "Title",
            Category::Address => "Address",
            Category::Image => "Image",
            Category::PageBreak => "PageBreak",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A text-bearing element.
///
/// The identifier is fixed when the element is constructed: an explicit id
/// if one is supplied, otherwise derived from the initial text. Cleaning
/// mutates `text` but never the identifier, so the id keeps tracking the
/// originally extracted fragment.
#[derive(Debug, Clone)]
pub struct TextElement {
    /// Category tag
    pub category: Category,

    /// Text content; mutated in place by the cleaning pipeline
    pub text: String,

    /// Element identifier
    pub id: ElementId,

    /// Spatial coordinates, typically a bounding box; semantics are opaque
    pub coordinates: Option<Vec<f64>>,

    /// Provenance metadata
    pub metadata: ElementMetadata,
}

impl TextElement {
    /// Create a text element with a derived identifier.
    ///
    /// A page-break element ignores the supplied text and always carries
    /// [`PAGE_BREAK_TEXT`]; its derived identifier hashes that literal.
    pub fn new(category: Category, text: impl Into<String>) -> Self {
        let text = match category {
            Category::PageBreak => PAGE_BREAK_TEXT.to_string(),
            _ => text.into(),
        };
        let id = ElementId::for_text(None, &text);
        Self {
            category,
            text,
            id,
            coordinates: None,
            metadata: ElementMetadata::new(),
        }
    }

    /// Uncategorized free text.
    pub fn uncategorized(text: impl Into<String>) -> Self {
        Self::new(Category::UncategorizedText, text)
    }

    /// A figure caption.
    pub fn figure_caption(text: impl Into<String>) -> Self {
        Self::new(Category::FigureCaption, text)
    }

    /// Narrative body text.
    pub fn narrative_text(text: impl Into<String>) -> Self {
        Self::new(Category::NarrativeText, text)
    }

    /// A list item.
    pub fn list_item(text: impl Into<String>) -> Self {
        Self::new(Category::ListItem, text)
    }

    /// A title.
    pub fn title(text: impl Into<String>) -> Self {
        Self::new(Category::Title, text)
    }

    /// An address.
    pub fn address(text: impl Into<String>) -> Self {
        Self::new(Category::Address, text)
    }

    /// Image metadata captured as text.
    pub fn image(text: impl Into<String>) -> Self {
        Self::new(Category::Image, text)
    }

    /// A page break. Takes no text; the content is always
    /// [`PAGE_BREAK_TEXT`].
    pub fn page_break() -> Self {
        Self::new(Category::PageBreak, "")
    }

    /// Replace the derived identifier with an explicit one.
    pub fn with_id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = id.into();
        self
    }

    /// Attach spatial coordinates.
    pub fn with_coordinates(mut self, coordinates: Vec<f64>) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    /// Attach provenance metadata.
    pub fn with_metadata(mut self, metadata: ElementMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Rebuild a text element from stored parts.
    ///
    /// A stored identifier is preserved exactly; only when the stored id is
    /// unassigned does the element re-derive one from the stored text.
    /// Page-break text is forced to [`PAGE_BREAK_TEXT`] here as well, so a
    /// hand-edited dictionary cannot smuggle other content into the
    /// category.
    pub(crate) fn from_parts(
        category: Category,
        text: String,
        id: ElementId,
        coordinates: Option<Vec<f64>>,
        metadata: ElementMetadata,
    ) -> Self {
        let text = match category {
            Category::PageBreak => PAGE_BREAK_TEXT.to_string(),
            _ => text,
        };
        let id = match id {
            ElementId::Assigned(id) => ElementId::Assigned(id),
            ElementId::Unassigned => ElementId::for_text(None, &text),
        };
        Self {
            category,
            text,
            id,
            coordinates,
            metadata,
        }
    }

    /// Render this element as Markdown.
    pub fn to_markdown(&self) -> String {
        match self.category {
            Category::UncategorizedText | Category::FigureCaption => {
                format!("![]({})", self.text)
            }
            Category::NarrativeText | Category::Address => self.text.clone(),
            Category::ListItem => format!("- {}", self.text),
            Category::Title => format!("# {}", self.text),
            Category::Image => String::new(),
            Category::PageBreak => "\n\n".to_string(),
        }
    }

    /// Convert to the structured dictionary form.
    pub fn to_dict(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::from(self.category.tag()));
        map.insert("element_id".to_string(), id_value(&self.id));
        map.insert("coordinates".to_string(), coordinates_value(&self.coordinates));
        map.insert("text".to_string(), Value::from(self.text.clone()));
        map.insert("metadata".to_string(), self.metadata.to_dict());
        Value::Object(map)
    }
}

impl fmt::Display for TextElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Value equality over `text`, `coordinates`, and `category`. Identifier
/// and metadata are excluded.
impl PartialEq for TextElement {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
            && self.coordinates == other.coordinates
            && self.category == other.category
    }
}

/// A checkbox, primarily found in documents that are forms.
///
/// Checkboxes carry no text, so they never derive an identifier from
/// content; an unset identifier stays unassigned.
#[derive(Debug, Clone)]
pub struct CheckBox {
    /// Whether the box is checked
    pub checked: bool,

    /// Element identifier
    pub id: ElementId,

    /// Spatial coordinates
    pub coordinates: Option<Vec<f64>>,

    /// Provenance metadata
    pub metadata: ElementMetadata,
}

impl CheckBox {
    /// Create a checkbox with no identifier assigned.
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            id: ElementId::Unassigned,
            coordinates: None,
            metadata: ElementMetadata::new(),
        }
    }

    /// Assign an explicit identifier.
    pub fn with_id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = id.into();
        self
    }

    /// Attach spatial coordinates.
    pub fn with_coordinates(mut self, coordinates: Vec<f64>) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    /// Attach provenance metadata.
    pub fn with_metadata(mut self, metadata: ElementMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Convert to the structured dictionary form.
    pub fn to_dict(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::from(CHECKBOX_TAG));
        map.insert("checked".to_string(), Value::from(self.checked));
        map.insert("coordinates".to_string(), coordinates_value(&self.coordinates));
        map.insert("element_id".to_string(), id_value(&self.id));
        map.insert("metadata".to_string(), self.metadata.to_dict());
        Value::Object(map)
    }
}

impl Default for CheckBox {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Value equality over `checked` and `coordinates` only.
impl PartialEq for CheckBox {
    fn eq(&self, other: &Self) -> bool {
        self.checked == other.checked && self.coordinates == other.coordinates
    }
}

/// Any element of the taxonomy.
///
/// Comparing elements of different variants is `false`, never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A text-bearing element
    Text(TextElement),

    /// A checkbox
    CheckBox(CheckBox),
}

impl Element {
    /// The element identifier.
    pub fn id(&self) -> &ElementId {
        match self {
            Element::Text(e) => &e.id,
            Element::CheckBox(e) => &e.id,
        }
    }

    /// The spatial coordinates, if any.
    pub fn coordinates(&self) -> Option<&[f64]> {
        match self {
            Element::Text(e) => e.coordinates.as_deref(),
            Element::CheckBox(e) => e.coordinates.as_deref(),
        }
    }

    /// The provenance metadata.
    pub fn metadata(&self) -> &ElementMetadata {
        match self {
            Element::Text(e) => &e.metadata,
            Element::CheckBox(e) => &e.metadata,
        }
    }

    /// The `type` tag this element serializes under.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Element::Text(e) => e.category.tag(),
            Element::CheckBox(_) => CHECKBOX_TAG,
        }
    }

    /// The text content, or `None` for non-text elements.
    pub fn text(&self) -> Option<&str> {
        match self {
            Element::Text(e) => Some(&e.text),
            Element::CheckBox(_) => None,
        }
    }

    /// Check if this is a text-bearing element.
    pub fn is_text(&self) -> bool {
        matches!(self, Element::Text(_))
    }

    /// Convert to the structured dictionary form.
    pub fn to_dict(&self) -> Value {
        match self {
            Element::Text(e) => e.to_dict(),
            Element::CheckBox(e) => e.to_dict(),
        }
    }

    /// Render as Markdown, or `None` for elements with no Markdown form.
    pub fn to_markdown(&self) -> Option<String> {
        match self {
            Element::Text(e) => Some(e.to_markdown()),
            Element::CheckBox(_) => None,
        }
    }

    /// Reconstruct an element from its dictionary form.
    ///
    /// The `type` tag selects the variant via the registry; a stored
    /// `element_id` is preserved exactly as written.
    pub fn from_dict(value: &Value) -> Result<Self> {
        crate::model::registry::from_dict(value)
    }
}

impl From<TextElement> for Element {
    fn from(element: TextElement) -> Self {
        Element::Text(element)
    }
}

impl From<CheckBox> for Element {
    fn from(element: CheckBox) -> Self {
        Element::CheckBox(element)
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_dict().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Element::from_dict(&value).map_err(D::Error::custom)
    }
}

fn id_value(id: &ElementId) -> Value {
    match id {
        ElementId::Assigned(id) => Value::from(id.clone()),
        ElementId::Unassigned => Value::Null,
    }
}

fn coordinates_value(coordinates: &Option<Vec<f64>>) -> Value {
    match coordinates {
        Some(coords) => Value::from(coords.clone()),
        None => Value::Null,
    }
}
