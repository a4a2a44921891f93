//! Text analysis module for termcheck.
//!
//! This module provides the NLP boundary of the linter: sentence
//! segmentation and word tokenization. Both sides are trait-based so the
//! consistency core never depends on incidental behaviors of one
//! implementation beyond the stated treebank conventions.

pub mod segmenter;
pub mod token;
pub mod tokenizer;
