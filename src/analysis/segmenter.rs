//! Sentence segmenter implementations.
//!
//! Segmenters split raw document text into sentence strings. Sentence
//! boundaries are decided entirely here; the consistency core never
//! re-segments.
//!
//! # Examples
//!
//! ```
//! use termcheck::analysis::segmenter::SentenceSegmenter;
//! use termcheck::analysis::segmenter::unicode::UnicodeSentenceSegmenter;
//!
//! let segmenter = UnicodeSentenceSegmenter::new();
//! let sentences = segmenter.segment("First sentence. Second sentence.").unwrap();
//! assert_eq!(sentences.len(), 2);
//! ```

use crate::error::Result;

/// Trait for segmenters that split text into ordered sentence spans.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait SentenceSegmenter: Send + Sync {
    /// Split the given text into sentences, in document order.
    ///
    /// Empty or whitespace-only input yields an empty vector.
    fn segment(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this segmenter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual segmenter modules
pub mod unicode;
