//! Token and sentence types for text analysis.
//!
//! These are the fundamental units that flow from the tokenizer into the
//! consistency core. A [`Token`] keeps the surface string exactly as it
//! appears in the document (original casing, internal hyphens); a
//! [`Sentence`] is an ordered, immutable sequence of tokens.
//!
//! # Examples
//!
//! Creating a simple token:
//!
//! ```
//! use termcheck::analysis::token::Token;
//!
//! let token = Token::new("machine-learning", 3);
//! assert_eq!(token.text, "machine-learning");
//! assert_eq!(token.position, 3);
//! ```
//!
//! Building a sentence:
//!
//! ```
//! use termcheck::analysis::token::{Sentence, Token};
//!
//! let sentence = Sentence::new(vec![Token::new("Hello", 0), Token::new("world", 1)]);
//! assert_eq!(sentence.len(), 2);
//! assert!(sentence.tokens()[0].is_capitalized());
//! ```

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
///
/// The text content is preserved verbatim from the document. Tokens are
/// immutable once produced by the tokenizer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token, original casing and hyphens intact
    pub text: String,

    /// The position of the token within its sentence (0-based)
    pub position: usize,
}

impl Token {
    /// Create a new token with the given text and sentence-relative position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }

    /// Check whether the token starts with an upper-case letter.
    ///
    /// The empty string is not capitalized.
    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Type alias for a stream of tokens produced by a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// An ordered, finite sequence of tokens making up one sentence.
///
/// Sentence boundaries are produced entirely by the segmenter; the
/// consistency core never re-segments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    /// Create a sentence from already-tokenized text.
    pub fn new(tokens: Vec<Token>) -> Self {
        Sentence { tokens }
    }

    /// The tokens of this sentence, in order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens in this sentence.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the sentence contains no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
