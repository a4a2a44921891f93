//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split one sentence into word tokens. The consistency core
//! only relies on the treebank-style conventions stated by the trait:
//! punctuation is generally split into its own token, internal hyphens
//! within one orthographic word are preserved, and original letter casing
//! is preserved verbatim.
//!
//! # Examples
//!
//! ```
//! use termcheck::analysis::tokenizer::Tokenizer;
//! use termcheck::analysis::tokenizer::treebank::TreebankTokenizer;
//!
//! let tokenizer = TreebankTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world.").unwrap().collect();
//! assert_eq!(tokens.len(), 4);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert sentence text into tokens.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use termcheck::analysis::token::{Token, TokenStream};
/// use termcheck::analysis::tokenizer::Tokenizer;
/// use termcheck::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given sentence into a stream of tokens.
    ///
    /// Token positions are sentence-relative, starting at 0.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod treebank;
