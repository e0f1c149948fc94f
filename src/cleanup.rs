//! Text cleaning pipeline for text-bearing elements.
//!
//! A cleaner is a pure transform `&str -> Result<String>`. The pipeline
//! applies cleaners strictly left to right, each consuming the previous
//! output, and commits the result to the element only after the whole
//! chain succeeds. A failing cleaner aborts the pipeline and leaves the
//! element text unchanged.
//!
//! The element identifier is never touched by cleaning: identity tracks
//! the originally extracted text, not the current content.

use crate::error::Result;
use crate::model::TextElement;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static EXTRA_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]{2,}").expect("static pattern"));
static LEADING_BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[•●○■□◆◇▪▫►▻∙*-]\s*").expect("static pattern"));
static TRAILING_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.,:;]+$").expect("static pattern"));

impl TextElement {
    /// Apply a chain of cleaners to this element's text, in order.
    ///
    /// The chain runs against a local value; the element is mutated only
    /// if every cleaner succeeds.
    ///
    /// # Example
    ///
    /// ```
    /// use unelements::TextElement;
    ///
    /// let mut element = TextElement::narrative_text("hi");
    /// element
    ///     .apply(&[&|text: &str| Ok(text.to_uppercase())])
    ///     .unwrap();
    /// assert_eq!(element.text, "HI");
    /// ```
    pub fn apply(&mut self, cleaners: &[&dyn Fn(&str) -> Result<String>]) -> Result<()> {
        let mut cleaned = self.text.clone();
        for cleaner in cleaners {
            cleaned = cleaner(&cleaned)?;
        }
        self.text = cleaned;
        Ok(())
    }
}

/// Replace newlines and non-breaking spaces with spaces, collapse runs of
/// whitespace into a single space, and trim.
pub fn clean_extra_whitespace(text: &str) -> Result<String> {
    let joined = text.replace(['\n', '\r', '\u{a0}'], " ");
    Ok(EXTRA_WHITESPACE.replace_all(&joined, " ").trim().to_string())
}

/// Strip a leading bullet marker and the whitespace after it.
pub fn clean_bullets(text: &str) -> Result<String> {
    Ok(LEADING_BULLET.replace(text, "").into_owned())
}

/// Strip trailing punctuation (periods, commas, colons, semicolons).
pub fn clean_trailing_punctuation(text: &str) -> Result<String> {
    Ok(TRAILING_PUNCTUATION.replace(text, "").into_owned())
}

/// Normalize Unicode to NFC form.
pub fn normalize_unicode(text: &str) -> Result<String> {
    Ok(text.nfc().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_apply_runs_left_to_right() {
        let upper = |text: &str| Ok(text.to_uppercase());
        let exclaim = |text: &str| Ok(format!("{}!", text));

        let mut element = TextElement::narrative_text("hi");
        element.apply(&[&upper, &exclaim]).unwrap();
        assert_eq!(element.text, "HI!");

        // an order-sensitive pair confirms strict left-to-right application
        let lower = |text: &str| Ok(text.to_lowercase());
        let mut element = TextElement::narrative_text("hi");
        element.apply(&[&upper, &lower]).unwrap();
        assert_eq!(element.text, "hi");
        let mut element = TextElement::narrative_text("hi");
        element.apply(&[&lower, &upper]).unwrap();
        assert_eq!(element.text, "HI");
    }

    #[test]
    fn test_apply_does_not_touch_id() {
        let mut element = TextElement::narrative_text("abc");
        let original_id = element.id.clone();
        element.apply(&[&|_: &str| Ok("xyz".to_string())]).unwrap();
        assert_eq!(element.text, "xyz");
        assert_eq!(element.id, original_id);
        assert_eq!(original_id, TextElement::narrative_text("abc").id);
    }

    #[test]
    fn test_failing_cleaner_leaves_text_unchanged() {
        let mut element = TextElement::narrative_text("original");
        let result = element.apply(&[
            &|text: &str| Ok(text.to_uppercase()),
            &|_: &str| Err(Error::Cleaner("boom".to_string())),
        ]);
        assert!(matches!(result, Err(Error::Cleaner(_))));
        assert_eq!(element.text, "original");
    }

    #[test]
    fn test_clean_extra_whitespace() {
        assert_eq!(
            clean_extra_whitespace("ITEM 1.     BUSINESS").unwrap(),
            "ITEM 1. BUSINESS"
        );
        assert_eq!(clean_extra_whitespace("a\nb\u{a0} c ").unwrap(), "a b c");
    }

    #[test]
    fn test_clean_bullets() {
        assert_eq!(clean_bullets("• item one").unwrap(), "item one");
        assert_eq!(clean_bullets("no bullet here").unwrap(), "no bullet here");
    }

    #[test]
    fn test_clean_trailing_punctuation() {
        assert_eq!(clean_trailing_punctuation("done.").unwrap(), "done");
        assert_eq!(clean_trailing_punctuation("a.b").unwrap(), "a.b");
    }

    #[test]
    fn test_normalize_unicode() {
        // e + combining acute normalizes to the precomposed form
        assert_eq!(normalize_unicode("e\u{301}").unwrap(), "\u{e9}");
    }

    #[test]
    fn test_builtin_cleaners_compose_with_apply() {
        let mut element = TextElement::list_item("•  bullet   point.");
        element
            .apply(&[&clean_bullets, &clean_extra_whitespace, &clean_trailing_punctuation])
            .unwrap();
        assert_eq!(element.text, "bullet point");
    }
}
