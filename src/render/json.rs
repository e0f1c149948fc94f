//! JSON serialization for element sequences.

use crate::error::Result;
use crate::model::Element;
use serde_json::Value;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a sequence of elements to a JSON array of dictionary forms.
pub fn to_json(elements: &[Element], format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(elements),
        JsonFormat::Compact => serde_json::to_string(elements),
    };
    Ok(result?)
}

/// Reconstruct a sequence of elements from a JSON array of dictionary
/// forms.
pub fn from_json(json: &str) -> Result<Vec<Element>> {
    let values: Vec<Value> = serde_json::from_str(json)?;
    let elements = values
        .iter()
        .map(Element::from_dict)
        .collect::<Result<Vec<Element>>>()?;
    log::debug!("reconstructed {} elements", elements.len());
    Ok(elements)
}
