//! Candidate extraction.
//!
//! A candidate is a contiguous span of 1–9 tokens from one sentence,
//! considered as a unit for consistency checking. Extraction honors two
//! rules that keep false positives down:
//!
//! - the sentence's first token is never a unigram candidate (its
//!   capitalization carries no signal);
//! - a capitalized unigram sitting next to another capitalized word is
//!   suppressed (proper-noun runs like "Operator Descriptor" are not
//!   inconsistencies).
//!
//! Multi-token spans are taken exhaustively: every window of each length
//! 2..=9 that lies wholly within the sentence. Windows that would run past
//! the sentence end are dropped, never shrunk.

use serde::{Deserialize, Serialize};

use crate::analysis::token::{Sentence, Token};
use crate::consistency::canonical::{self, MAX_NGRAM};

/// A span of 1–9 consecutive tokens drawn from one sentence, with its
/// derived surface form and canonical key.
///
/// The token count is always explicit, even for unigrams; nothing
/// downstream inspects the shape of the span.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The literal text as it appears in the document, space-joined and
    /// trimmed of boundary punctuation
    pub surface: String,

    /// The canonical key the span groups under
    pub key: String,

    /// Number of tokens in the span (1..=9)
    pub len: usize,

    /// Sentence-relative position of the span's first token
    pub position: usize,
}

/// Extracts candidates from sentences.
#[derive(Clone, Debug)]
pub struct CandidateExtractor {
    max_len: usize,
}

impl Default for CandidateExtractor {
    fn default() -> Self {
        CandidateExtractor { max_len: MAX_NGRAM }
    }
}

impl CandidateExtractor {
    /// Create an extractor with the default maximum span length.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with a custom maximum span length.
    pub fn with_max_len(max_len: usize) -> Self {
        CandidateExtractor { max_len }
    }

    /// Extract all candidates from one sentence: filtered unigrams plus
    /// every full multi-token window.
    pub fn extract(&self, sentence: &Sentence) -> Vec<Candidate> {
        let tokens = sentence.tokens();
        let mut candidates = Vec::new();

        // Unigrams start at index 1; the sentence-initial token is never a
        // candidate on its own.
        for i in 1..tokens.len() {
            if is_suppressed(tokens, i) {
                continue;
            }
            self.push_span(tokens, i, 1, &mut candidates);
        }

        // Multi-token spans, all windows that fit inside the sentence.
        for len in 2..=self.max_len {
            if len > tokens.len() {
                break;
            }
            for start in 0..=(tokens.len() - len) {
                self.push_span(tokens, start, len, &mut candidates);
            }
        }

        candidates
    }

    fn push_span(&self, tokens: &[Token], start: usize, len: usize, out: &mut Vec<Candidate>) {
        let texts: Vec<&str> = tokens[start..start + len]
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        let key = canonical::canonicalize(&texts);
        // Pure punctuation spans canonicalize to nothing reportable.
        if key.is_empty() {
            return;
        }
        out.push(Candidate {
            surface: canonical::surface_form(&texts),
            key,
            len,
            position: start,
        });
    }
}

/// The capitalization adjacency filter.
///
/// A capitalized token at index i (i ≥ 1) is suppressed when it sits next
/// to another capitalized word: `(i > 1 AND prev capitalized) OR (next
/// capitalized)`. At i = 1 the prev half is excluded — the sentence-initial
/// token's capitalization carries no signal, so a capitalized second word
/// is only suppressed if the following word is also capitalized.
fn is_suppressed(tokens: &[Token], i: usize) -> bool {
    if !tokens[i].is_capitalized() {
        return false;
    }
    let prev_capitalized = i > 1 && tokens[i - 1].is_capitalized();
    let next_capitalized = tokens
        .get(i + 1)
        .is_some_and(|next| next.is_capitalized());
    prev_capitalized || next_capitalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Sentence;

    fn sentence(words: &[&str]) -> Sentence {
        Sentence::new(
            words
                .iter()
                .enumerate()
                .map(|(i, w)| Token::new(*w, i))
                .collect(),
        )
    }

    fn unigram_surfaces(words: &[&str]) -> Vec<String> {
        CandidateExtractor::new()
            .extract(&sentence(words))
            .into_iter()
            .filter(|c| c.len == 1)
            .map(|c| c.surface)
            .collect()
    }

    #[test]
    fn test_sentence_initial_token_never_a_unigram() {
        let surfaces = unigram_surfaces(&["Batch", "gradient", "descent"]);
        assert!(!surfaces.contains(&"Batch".to_string()));
        assert!(surfaces.contains(&"gradient".to_string()));
    }

    #[test]
    fn test_second_word_kept_when_next_is_lowercase() {
        // "The Operator may be replaced" — Operator survives.
        let surfaces = unigram_surfaces(&["The", "Operator", "may", "be", "replaced"]);
        assert!(surfaces.contains(&"Operator".to_string()));
    }

    #[test]
    fn test_second_word_suppressed_when_next_is_capitalized() {
        // "The Operator Descriptor describes" — Operator and Descriptor
        // are both suppressed as a proper-noun run.
        let surfaces = unigram_surfaces(&["The", "Operator", "Descriptor", "describes"]);
        assert!(!surfaces.contains(&"Operator".to_string()));
        assert!(!surfaces.contains(&"Descriptor".to_string()));
    }

    #[test]
    fn test_capitalized_after_capitalized_suppressed() {
        let surfaces = unigram_surfaces(&["in", "Batch", "Gradient", "Descent"]);
        assert!(!surfaces.contains(&"Gradient".to_string()));
        assert!(!surfaces.contains(&"Descent".to_string()));
    }

    #[test]
    fn test_lowercase_tokens_never_suppressed() {
        let surfaces = unigram_surfaces(&["The", "Operator", "describes", "an", "operator"]);
        assert!(surfaces.contains(&"operator".to_string()));
    }

    #[test]
    fn test_last_token_has_no_next() {
        // Capitalized last token with lowercase predecessor survives.
        let surfaces = unigram_surfaces(&["replaced", "by", "Hadoop"]);
        assert!(surfaces.contains(&"Hadoop".to_string()));
    }

    #[test]
    fn test_window_lengths_exact() {
        let candidates = CandidateExtractor::new().extract(&sentence(&["a", "b", "c"]));
        // Unigrams at 1..3, bigrams at 0..2, one trigram; no window is
        // shrunk to fit.
        assert!(candidates.iter().all(|c| c.position + c.len <= 3));
        assert_eq!(candidates.iter().filter(|c| c.len == 2).count(), 2);
        assert_eq!(candidates.iter().filter(|c| c.len == 3).count(), 1);
        assert!(candidates.iter().all(|c| c.len <= MAX_NGRAM));
    }

    #[test]
    fn test_custom_max_len() {
        let candidates =
            CandidateExtractor::with_max_len(2).extract(&sentence(&["a", "b", "c", "d"]));
        assert!(candidates.iter().all(|c| c.len <= 2));
        assert_eq!(candidates.iter().filter(|c| c.len == 2).count(), 3);
    }

    #[test]
    fn test_punctuation_only_spans_skipped() {
        let candidates = CandidateExtractor::new().extract(&sentence(&["wait", ",", "."]));
        assert!(candidates.iter().all(|c| !c.key.is_empty()));
    }

    #[test]
    fn test_empty_sentence_yields_nothing() {
        let candidates = CandidateExtractor::new().extract(&Sentence::new(Vec::new()));
        assert!(candidates.is_empty());
    }
}
