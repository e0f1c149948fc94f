//! Error types for the unelements library.

use thiserror::Error;

/// Result type alias for unelements operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building, cleaning, or reconstructing
/// elements.
#[derive(Error, Debug)]
pub enum Error {
    /// The element type tag is not registered.
    #[error("Unknown element type: {0}")]
    UnknownElementType(String),

    /// A cleaning transform failed; the element text was left unchanged.
    #[error("Cleaner failed: {0}")]
    Cleaner(String),

    /// An element dictionary is missing required keys or has wrong shapes.
    #[error("Malformed element dictionary: {0}")]
    MalformedElement(String),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownElementType("Sidebar".to_string());
        assert_eq!(err.to_string(), "Unknown element type: Sidebar");

        let err = Error::Cleaner("bad pattern".to_string());
        assert_eq!(err.to_string(), "Cleaner failed: bad pattern");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
