//! Category tag registry and dictionary reconstruction.
//!
//! The registry is a process-wide immutable table mapping the `type` tag of
//! a serialized text element back to its [`Category`]. It covers every text
//! category plus the legacy `BulletedText` alias kept for historical
//! serialized output. Checkboxes are not part of the text taxonomy and are
//! recognized directly by their fixed tag.

use crate::error::{Error, Result};
use crate::model::element::{Category, CheckBox, Element, TextElement, CHECKBOX_TAG};
use crate::model::{ElementId, ElementMetadata};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

/// Legacy tag that older output used for list items.
const BULLETED_TEXT_TAG: &str = "BulletedText";

static TEXT_ELEMENT_TYPES: Lazy<HashMap<&'static str, Category>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for category in Category::ALL {
        map.insert(category.tag(), category);
    }
    map.insert(BULLETED_TEXT_TAG, Category::ListItem);
    map
});

/// Resolve a category tag to its category.
///
/// Fails with [`Error::UnknownElementType`] for tags outside the registry.
pub fn resolve(tag: &str) -> Result<Category> {
    TEXT_ELEMENT_TYPES
        .get(tag)
        .copied()
        .ok_or_else(|| Error::UnknownElementType(tag.to_string()))
}

/// Check whether a tag names a registered text category.
pub fn is_registered(tag: &str) -> bool {
    TEXT_ELEMENT_TYPES.contains_key(tag)
}

/// Reconstruct an element from its dictionary form.
pub(crate) fn from_dict(value: &Value) -> Result<Element> {
    let obj = value
        .as_object()
        .ok_or_else(|| Error::MalformedElement("expected a JSON object".to_string()))?;
    let tag = obj
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::MalformedElement("missing string `type` key".to_string()))?;

    let id = parse_id(obj.get("element_id"))?;
    let coordinates = parse_coordinates(obj.get("coordinates"))?;
    let metadata = match obj.get("metadata") {
        Some(m) => ElementMetadata::from_dict(m)?,
        None => ElementMetadata::new(),
    };

    if tag == CHECKBOX_TAG {
        let checked = obj.get("checked").and_then(Value::as_bool).unwrap_or(false);
        return Ok(Element::CheckBox(CheckBox {
            checked,
            id,
            coordinates,
            metadata,
        }));
    }

    let category = resolve(tag)?;
    let text = obj
        .get("text")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::MalformedElement(format!("`{}` element is missing `text`", tag)))?
        .to_string();
    log::trace!("reconstructed {} element", tag);
    Ok(Element::Text(TextElement::from_parts(
        category,
        text,
        id,
        coordinates,
        metadata,
    )))
}

fn parse_id(value: Option<&Value>) -> Result<ElementId> {
    match value {
        None | Some(Value::Null) => Ok(ElementId::Unassigned),
        Some(Value::String(id)) => Ok(ElementId::Assigned(id.clone())),
        Some(other) => Err(Error::MalformedElement(format!(
            "`element_id` must be a string or null, got {}",
            other
        ))),
    }
}

fn parse_coordinates(value: Option<&Value>) -> Result<Option<Vec<f64>>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(entries)) => entries
            .iter()
            .map(|v| {
                v.as_f64().ok_or_else(|| {
                    Error::MalformedElement(format!("non-numeric coordinate: {}", v))
                })
            })
            .collect::<Result<Vec<f64>>>()
            .map(Some),
        Some(other) => Err(Error::MalformedElement(format!(
            "`coordinates` must be an array or null, got {}",
            other
        ))),
    }
}
