//! Element provenance metadata.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Provenance metadata attached to an element.
///
/// All fields are optional. The dictionary form contains only the fields
/// that are present; absent fields are omitted rather than emitted as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementMetadata {
    /// Name of the file the element was extracted from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Page number the element appeared on (1-indexed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,

    /// Source URL for content extracted from the web
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ElementMetadata {
    /// Create empty metadata with all fields absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the origin filename.
    ///
    /// Accepts any path-like value; it is normalized to its string
    /// representation at construction time.
    pub fn with_filename(mut self, filename: impl AsRef<Path>) -> Self {
        self.filename = Some(filename.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Set the page number.
    pub fn with_page_number(mut self, page_number: u32) -> Self {
        self.page_number = Some(page_number);
        self
    }

    /// Set the source URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Check if all fields are absent.
    pub fn is_empty(&self) -> bool {
        self.filename.is_none() && self.page_number.is_none() && self.url.is_none()
    }

    /// Convert to the compacted dictionary form.
    pub fn to_dict(&self) -> Value {
        let mut map = serde_json::Map::new();
        if let Some(ref filename) = self.filename {
            map.insert("filename".to_string(), Value::from(filename.clone()));
        }
        if let Some(page_number) = self.page_number {
            map.insert("page_number".to_string(), Value::from(page_number));
        }
        if let Some(ref url) = self.url {
            map.insert("url".to_string(), Value::from(url.clone()));
        }
        Value::Object(map)
    }

    /// Reconstruct metadata from a (possibly partial) dictionary.
    ///
    /// Keys not present in the dictionary default to absent.
    pub fn from_dict(value: &Value) -> Result<Self> {
        Ok(serde_json::from_value(value.clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_filename_normalization() {
        let metadata = ElementMetadata::new().with_filename(PathBuf::from("docs/report.pdf"));
        assert_eq!(metadata.filename, Some("docs/report.pdf".to_string()));
    }

    #[test]
    fn test_to_dict_omits_absent_fields() {
        let metadata = ElementMetadata::new().with_page_number(7);
        let dict = metadata.to_dict();
        let obj = dict.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["page_number"], 7);
    }

    #[test]
    fn test_empty_metadata_serializes_to_empty_dict() {
        let dict = ElementMetadata::new().to_dict();
        assert!(dict.as_object().unwrap().is_empty());
    }

    #[test]
    fn test_round_trip() {
        let metadata = ElementMetadata::new()
            .with_filename("report.pdf")
            .with_url("https://example.com/report");
        let restored = ElementMetadata::from_dict(&metadata.to_dict()).unwrap();
        assert_eq!(restored, metadata);
        assert!(restored.page_number.is_none());
    }

    #[test]
    fn test_from_dict_partial() {
        let value = serde_json::json!({ "filename": "a.txt" });
        let metadata = ElementMetadata::from_dict(&value).unwrap();
        assert_eq!(metadata.filename, Some("a.txt".to_string()));
        assert!(metadata.page_number.is_none());
        assert!(metadata.url.is_none());
    }
}
