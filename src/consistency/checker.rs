//! The consistency checker.
//!
//! [`ConsistencyChecker`] wires the analysis boundary (segmenter +
//! tokenizer) to the detection core (extraction, grouping, resolution,
//! report building). A check is a pure function of the input text: the
//! group map is constructed inside the run and discarded with it.
//!
//! # Examples
//!
//! ```
//! use termcheck::consistency::checker::ConsistencyChecker;
//!
//! let checker = ConsistencyChecker::default();
//! let report = checker
//!     .check("The Operator may be replaced by another operator")
//!     .unwrap();
//!
//! assert_eq!(report.entries()[0].key, "operator");
//! assert_eq!(report.entries()[0].variants, vec!["Operator", "operator"]);
//! ```

use std::sync::Arc;

use rayon::prelude::*;

use crate::analysis::segmenter::SentenceSegmenter;
use crate::analysis::segmenter::unicode::UnicodeSentenceSegmenter;
use crate::analysis::token::Sentence;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::treebank::TreebankTokenizer;
use crate::consistency::candidate::CandidateExtractor;
use crate::consistency::group::GroupMap;
use crate::consistency::report::ConsistencyReport;
use crate::consistency::resolver;
use crate::error::Result;

/// Detects inconsistent surface forms in one document.
///
/// The segmenter and tokenizer are trait objects, so any implementation
/// honoring the treebank conventions can be plugged in; the default pairs
/// [`UnicodeSentenceSegmenter`] with [`TreebankTokenizer`].
#[derive(Clone)]
pub struct ConsistencyChecker {
    segmenter: Arc<dyn SentenceSegmenter>,
    tokenizer: Arc<dyn Tokenizer>,
    extractor: CandidateExtractor,
}

impl Default for ConsistencyChecker {
    fn default() -> Self {
        ConsistencyChecker::new(
            Arc::new(UnicodeSentenceSegmenter::new()),
            Arc::new(TreebankTokenizer::new()),
        )
    }
}

impl ConsistencyChecker {
    /// Create a checker with the given segmenter and tokenizer.
    pub fn new(segmenter: Arc<dyn SentenceSegmenter>, tokenizer: Arc<dyn Tokenizer>) -> Self {
        ConsistencyChecker {
            segmenter,
            tokenizer,
            extractor: CandidateExtractor::new(),
        }
    }

    /// Segment and tokenize the document into sentences.
    ///
    /// Sentences that tokenize to nothing contribute no candidates and are
    /// dropped here.
    fn analyze(&self, text: &str) -> Result<Vec<Sentence>> {
        let mut sentences = Vec::new();
        for span in self.segmenter.segment(text)? {
            let tokens: Vec<_> = self.tokenizer.tokenize(&span)?.collect();
            if !tokens.is_empty() {
                sentences.push(Sentence::new(tokens));
            }
        }
        Ok(sentences)
    }

    /// Run the consistency check over the document.
    pub fn check(&self, text: &str) -> Result<ConsistencyReport> {
        let mut groups = GroupMap::new();
        for sentence in self.analyze(text)? {
            self.collect(&sentence, &mut groups);
        }
        Ok(ConsistencyReport::from_groups(resolver::resolve(groups)))
    }

    /// Run the consistency check with per-sentence extraction in parallel.
    ///
    /// Partial group maps are merged into one before resolution, since
    /// redundancy judgments need the complete document-wide variant set per
    /// key. Produces the same report as [`check`](Self::check).
    pub fn check_parallel(&self, text: &str) -> Result<ConsistencyReport> {
        let sentences = self.analyze(text)?;
        let groups = sentences
            .par_iter()
            .map(|sentence| {
                let mut local = GroupMap::new();
                self.collect(sentence, &mut local);
                local
            })
            .reduce(GroupMap::new, |mut acc, partial| {
                acc.merge(partial);
                acc
            });
        Ok(ConsistencyReport::from_groups(resolver::resolve(groups)))
    }

    fn collect(&self, sentence: &Sentence, groups: &mut GroupMap) {
        for candidate in self.extractor.extract(sentence) {
            groups.add(candidate.key, candidate.surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_descent_scenario() {
        let checker = ConsistencyChecker::default();
        let report = checker
            .check("Batch gradient descent algorithms ... in Batch Gradient Descent ...")
            .unwrap();

        let entry = report
            .iter()
            .find(|e| e.key == "gradientdescent")
            .expect("gradientdescent group should be reported");
        assert_eq!(entry.variants, vec!["Gradient Descent", "gradient descent"]);

        // No other multi-word key from this phrase survives.
        assert!(
            report
                .iter()
                .filter(|e| e.key != "gradientdescent")
                .all(|e| e.variants.iter().all(|v| !v.contains(' ')))
        );
    }

    #[test]
    fn test_empty_input() {
        let checker = ConsistencyChecker::default();
        assert!(checker.check("").unwrap().is_empty());
        assert!(checker.check("  \n \t ").unwrap().is_empty());
    }

    #[test]
    fn test_no_singleton_groups() {
        let checker = ConsistencyChecker::default();
        let report = checker
            .check("Stochastic methods help. Batch methods also help.")
            .unwrap();
        assert!(report.iter().all(|e| e.variants.len() >= 2));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let text = "Batch gradient descent converges slowly. \
                    We prefer Batch Gradient Descent anyway. \
                    Hadoop runs it, not hadoop. \
                    The Operator may be replaced by another operator.";
        let checker = ConsistencyChecker::default();
        assert_eq!(
            checker.check(text).unwrap(),
            checker.check_parallel(text).unwrap()
        );
    }
}
