//! Unicode sentence segmenter implementation.
//!
//! This module provides a segmenter that splits text on Unicode sentence
//! boundaries (UAX #29). It properly handles international text and
//! discards boundary spans that contain no word content.
//!
//! # Examples
//!
//! ```
//! use termcheck::analysis::segmenter::SentenceSegmenter;
//! use termcheck::analysis::segmenter::unicode::UnicodeSentenceSegmenter;
//!
//! let segmenter = UnicodeSentenceSegmenter::new();
//! let sentences = segmenter
//!     .segment("Gradient descent converges. Batch Gradient Descent does too.")
//!     .unwrap();
//!
//! assert_eq!(sentences.len(), 2);
//! assert!(sentences[0].starts_with("Gradient"));
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::segmenter::SentenceSegmenter;
use crate::error::Result;

/// A segmenter that splits text on Unicode sentence boundaries.
///
/// This segmenter uses the Unicode Text Segmentation algorithm (UAX #29)
/// to identify sentence boundaries. Spans without any alphanumeric
/// character (stray punctuation runs, blank lines) are dropped since they
/// can contribute no candidates.
#[derive(Clone, Debug, Default)]
pub struct UnicodeSentenceSegmenter;

impl UnicodeSentenceSegmenter {
    /// Create a new Unicode sentence segmenter.
    pub fn new() -> Self {
        UnicodeSentenceSegmenter
    }
}

impl SentenceSegmenter for UnicodeSentenceSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>> {
        let sentences = text
            .split_sentence_bounds()
            .filter(|span| span.chars().any(char::is_alphanumeric))
            .map(|span| span.trim().to_string())
            .collect();

        Ok(sentences)
    }

    fn name(&self) -> &'static str {
        "unicode"
    }
}
