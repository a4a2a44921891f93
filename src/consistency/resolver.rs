//! Redundancy resolution.
//!
//! Not every group with two surface forms is a genuine inconsistency. A
//! short phrase and a longer phrase containing it can canonicalize to the
//! same key by coincidence of concatenated letters ("of machine learning
//! tasks" vs "of machine-learning tasks" both cover the key with different
//! span lengths). Stripping the common leading and trailing token runs of
//! a pair exposes such accidental overlaps: if anything strips, the two
//! members are different-length spans of the same underlying text, not a
//! full-span variant, and the whole group is discarded.
//!
//! A true inconsistency strips nothing — "Gradient Descent" vs
//! "gradient descent" share no lexically identical token, so the pair
//! survives intact and the group is reported.

use std::collections::BTreeSet;

use crate::consistency::group::GroupMap;

/// Remove the common leading run and then the common trailing run from two
/// token sequences, isolating each sequence's non-shared core.
///
/// # Examples
///
/// ```
/// use termcheck::consistency::resolver::strip_common_fixes;
///
/// let a = ["of", "machine", "learning", "tasks"];
/// let b = ["of", "machine-learning", "tasks"];
/// let (x, y) = strip_common_fixes(&a, &b);
/// assert_eq!(x, ["machine", "learning"]);
/// assert_eq!(y, ["machine-learning"]);
/// ```
pub fn strip_common_fixes<'a, 'b>(
    mut a: &'a [&'b str],
    mut b: &'a [&'b str],
) -> (&'a [&'b str], &'a [&'b str]) {
    while let ([first_a, rest_a @ ..], [first_b, rest_b @ ..]) = (a, b) {
        if first_a != first_b {
            break;
        }
        a = rest_a;
        b = rest_b;
    }
    while let ([init_a @ .., last_a], [init_b @ .., last_b]) = (a, b) {
        if last_a != last_b {
            break;
        }
        a = init_a;
        b = init_b;
    }
    (a, b)
}

/// Check whether a pair of surface forms is a spurious overlap: two
/// different-length spans sharing a prefix or suffix rather than a genuine
/// full-span variant.
fn is_spurious_pair(a: &str, b: &str) -> bool {
    let a_tokens: Vec<&str> = a.split(' ').collect();
    let b_tokens: Vec<&str> = b.split(' ').collect();
    let (x, y) = strip_common_fixes(&a_tokens, &b_tokens);
    (x.join(" "), y.join(" ")) != (a.to_string(), b.to_string())
}

/// Prune groups that report nothing or whose inconsistency is spurious.
///
/// Groups with fewer than two distinct surface forms are dropped outright.
/// For the rest, all unordered pairs of variants are examined in
/// lexicographic order; one spurious pair discards the entire group. The
/// survivors are returned with their full variant sets, in arbitrary order.
pub fn resolve(groups: GroupMap) -> Vec<(String, BTreeSet<String>)> {
    groups
        .into_groups()
        .filter(|(_, variants)| variants.len() >= 2 && !has_spurious_pair(variants))
        .collect()
}

fn has_spurious_pair(variants: &BTreeSet<String>) -> bool {
    let variants: Vec<&String> = variants.iter().collect();
    for (i, a) in variants.iter().enumerate() {
        for b in &variants[i + 1..] {
            if is_spurious_pair(a, b) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group_of(key: &str, variants: &[&str]) -> GroupMap {
        let mut map = GroupMap::new();
        for v in variants {
            map.add(key, *v);
        }
        map
    }

    fn surviving_keys(map: GroupMap) -> Vec<String> {
        let mut keys: Vec<String> = resolve(map).into_iter().map(|(k, _)| k).collect();
        keys.sort();
        keys
    }

    #[test]
    fn test_strip_common_fixes_spec_example() {
        let a = ["of", "machine", "learning", "tasks"];
        let b = ["of", "machine-learning", "tasks"];
        let (x, y) = strip_common_fixes(&a, &b);
        assert_eq!(x, ["machine", "learning"]);
        assert_eq!(y, ["machine-learning"]);
    }

    #[test]
    fn test_strip_common_fixes_nothing_shared() {
        let a = ["Gradient", "Descent"];
        let b = ["gradient", "descent"];
        let (x, y) = strip_common_fixes(&a, &b);
        assert_eq!(x, a);
        assert_eq!(y, b);
    }

    #[test]
    fn test_strip_common_fixes_one_side_consumed() {
        let a = ["machine", "learning"];
        let b = ["machine"];
        let (x, y) = strip_common_fixes(&a, &b);
        assert_eq!(x, ["learning"]);
        assert!(y.is_empty());
    }

    #[test]
    fn test_singleton_group_dropped() {
        assert!(surviving_keys(group_of("descent", &["descent"])).is_empty());
    }

    #[test]
    fn test_full_span_variant_kept() {
        let keys = surviving_keys(group_of(
            "gradientdescent",
            &["Gradient Descent", "gradient descent"],
        ));
        assert_eq!(keys, vec!["gradientdescent"]);
    }

    #[test]
    fn test_single_word_capitalization_kept() {
        let keys = surviving_keys(group_of("hadoop", &["Hadoop", "hadoop"]));
        assert_eq!(keys, vec!["hadoop"]);
    }

    #[test]
    fn test_common_prefix_discards_group() {
        // "Batch gradient" vs "Batch Gradient" share the leading token, so
        // the difference is not a full-span variant.
        let keys = surviving_keys(group_of(
            "batchgradient",
            &["Batch Gradient", "Batch gradient"],
        ));
        assert!(keys.is_empty());
    }

    #[test]
    fn test_common_suffix_discards_group() {
        let keys = surviving_keys(group_of(
            "thissentence",
            &["This sentence", "this sentence"],
        ));
        assert!(keys.is_empty());
    }

    #[test]
    fn test_hyphenation_variant_kept() {
        let keys = surviving_keys(group_of(
            "machinelearning",
            &["machine learning", "machine-learning"],
        ));
        assert_eq!(keys, vec!["machinelearning"]);
    }

    #[test]
    fn test_one_spurious_pair_discards_whole_group() {
        // The third variant shares a suffix with the second; even though
        // the first pair is a genuine variant, the group goes.
        let keys = surviving_keys(group_of(
            "k",
            &["alpha beta", "Alpha Beta", "other Beta"],
        ));
        assert!(keys.is_empty());
    }
}
