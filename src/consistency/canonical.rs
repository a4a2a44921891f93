//! Canonical key derivation.
//!
//! The canonical key of a token sequence is insensitive to capitalization,
//! hyphenation, and inter-token spacing, but sensitive to the underlying
//! letters and their order. "machine-learning", "machine learning", and
//! "machinelearning" all collapse to `machinelearning` — an intentional
//! over-merging that the redundancy resolver filters when it is spurious.
//!
//! # Examples
//!
//! ```
//! use termcheck::consistency::canonical::canonicalize;
//!
//! assert_eq!(canonicalize(&["Gradient", "Descent"]), "gradientdescent");
//! assert_eq!(canonicalize(&["gradient-descent"]), "gradientdescent");
//! ```

/// Maximum n-gram length considered by the extractor.
pub const MAX_NGRAM: usize = 9;

/// Characters trimmed from the boundaries of keys and surface forms.
pub const BOUNDARY_TRIM: &[char] = &[',', '.', ' '];

/// Derive the canonical key of an ordered token sequence.
///
/// Each token is lower-cased, the tokens are concatenated with no
/// separator, leading/trailing commas, periods, and spaces are stripped,
/// and all hyphens are removed. Deterministic, pure function of the input
/// content only.
pub fn canonicalize<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut joined = String::new();
    for token in tokens {
        for ch in token.as_ref().chars() {
            joined.extend(ch.to_lowercase());
        }
    }
    joined.trim_matches(BOUNDARY_TRIM).replace('-', "")
}

/// Derive the surface form of an ordered token sequence: the tokens joined
/// by single spaces, with leading/trailing commas, periods, and spaces
/// trimmed.
pub fn surface_form<S: AsRef<str>>(tokens: &[S]) -> String {
    let joined = tokens
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    joined.trim_matches(BOUNDARY_TRIM).to_string()
}
