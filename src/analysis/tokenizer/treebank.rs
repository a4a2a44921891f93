//! Treebank-style tokenizer implementation.
//!
//! This module provides a word tokenizer following Penn Treebank
//! conventions: most punctuation is split into standalone tokens,
//! contraction suffixes are split from their host word, and internal
//! hyphens stay inside one token. Casing is never altered.
//!
//! # Examples
//!
//! ```
//! use termcheck::analysis::tokenizer::Tokenizer;
//! use termcheck::analysis::tokenizer::treebank::TreebankTokenizer;
//!
//! let tokenizer = TreebankTokenizer::new();
//! let tokens: Vec<_> = tokenizer
//!     .tokenize("This sentence's subject is machine-learning.")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(
//!     tokens,
//!     vec!["This", "sentence", "'s", "subject", "is", "machine-learning", "."]
//! );
//! ```

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

lazy_static! {
    /// Ellipses become standalone tokens before single periods are handled.
    static ref ELLIPSIS: Regex = Regex::new(r"\.\.\.").expect("static pattern is valid");

    /// Punctuation that is always split, excluding period, comma, hyphen,
    /// and apostrophe which get dedicated rules.
    static ref PUNCT: Regex =
        Regex::new(r#"([;:@#$%&?!()\[\]{}<>"“”])"#).expect("static pattern is valid");

    /// Commas split unless they sit between digits (e.g. "1,000").
    static ref COMMA: Regex = Regex::new(r",(\D)").expect("static pattern is valid");
    static ref COMMA_END: Regex = Regex::new(r",$").expect("static pattern is valid");

    /// Contraction suffixes split from their host word.
    static ref NT: Regex = Regex::new(r"(?i)([a-z0-9])(n't)\b").expect("static pattern is valid");
    static ref APOS: Regex =
        Regex::new(r"(?i)([a-z0-9])('s|'m|'d|'ll|'re|'ve)\b").expect("static pattern is valid");

    /// The sentence-terminal period is detached; internal abbreviation
    /// periods ("e.g.") stay inside their token.
    static ref FINAL_PERIOD: Regex =
        Regex::new(r#"([^.\s])(\.)([\])}>"'”’]*)\s*$"#).expect("static pattern is valid");
}

/// A word tokenizer following Penn Treebank conventions.
///
/// The tokenizer applies an ordered pipeline of regex rewrites to one
/// sentence and then splits on whitespace. It guarantees the conventions
/// the consistency core depends on:
///
/// - punctuation is generally split into its own token;
/// - internal hyphens within a single orthographic word are preserved as
///   part of one token ("machine-learning" stays whole);
/// - original letter casing is preserved verbatim.
#[derive(Clone, Debug, Default)]
pub struct TreebankTokenizer;

impl TreebankTokenizer {
    /// Create a new treebank tokenizer.
    pub fn new() -> Self {
        TreebankTokenizer
    }

    /// Apply the rewrite pipeline to one sentence.
    fn rewrite(text: &str) -> String {
        let text = ELLIPSIS.replace_all(text, " ... ");
        let text = PUNCT.replace_all(&text, " $1 ");
        let text = COMMA.replace_all(&text, " , $1");
        let text = COMMA_END.replace_all(&text, " ,");
        let text = NT.replace_all(&text, "$1 $2");
        let text = APOS.replace_all(&text, "$1 $2");
        let text = FINAL_PERIOD.replace_all(&text, "$1 $2$3");
        text.into_owned()
    }
}

impl Tokenizer for TreebankTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = Self::rewrite(text)
            .split_whitespace()
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "treebank"
    }
}
