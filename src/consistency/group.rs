//! Group aggregation.
//!
//! A group collects, per canonical key, the set of distinct surface forms
//! observed anywhere in the document. Exact string equality defines
//! distinctness; a surface form seen many times contributes once.
//!
//! [`GroupMap::add`] is the only way groups grow ([`GroupMap::merge`] is a
//! fold of `add`s for the parallel path). The map is built inside one
//! detection run and owned by it; nothing is shared across runs.

use std::collections::BTreeSet;

use ahash::AHashMap;

/// Canonical key → distinct surface forms.
///
/// Variants are stored in a `BTreeSet` so enumeration order is
/// deterministic (lexicographic), which the redundancy resolver and the
/// report rely on.
#[derive(Clone, Debug, Default)]
pub struct GroupMap {
    groups: AHashMap<String, BTreeSet<String>>,
}

impl GroupMap {
    /// Create an empty group map.
    pub fn new() -> Self {
        GroupMap::default()
    }

    /// Insert `surface` into the set belonging to `key`, creating the set
    /// if absent.
    pub fn add<K, S>(&mut self, key: K, surface: S)
    where
        K: Into<String>,
        S: Into<String>,
    {
        self.groups.entry(key.into()).or_default().insert(surface.into());
    }

    /// Fold another map's groups into this one.
    pub fn merge(&mut self, other: GroupMap) {
        for (key, surfaces) in other.groups {
            for surface in surfaces {
                self.add(key.clone(), surface);
            }
        }
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if no groups exist.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Look up the variant set for a key.
    pub fn get(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.groups.get(key)
    }

    /// Consume the map, yielding (key, variants) pairs in arbitrary order.
    pub fn into_groups(self) -> impl Iterator<Item = (String, BTreeSet<String>)> {
        self.groups.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_deduplicates() {
        let mut map = GroupMap::new();
        map.add("hadoop", "Hadoop");
        map.add("hadoop", "hadoop");
        map.add("hadoop", "Hadoop");

        let variants = map.get("hadoop").unwrap();
        assert_eq!(variants.len(), 2);
    }

    #[test]
    fn test_variant_order_is_lexicographic() {
        let mut map = GroupMap::new();
        map.add("k", "beta");
        map.add("k", "Alpha");
        map.add("k", "alpha");

        let variants: Vec<&String> = map.get("k").unwrap().iter().collect();
        assert_eq!(variants, vec!["Alpha", "alpha", "beta"]);
    }

    #[test]
    fn test_merge() {
        let mut left = GroupMap::new();
        left.add("k", "a");

        let mut right = GroupMap::new();
        right.add("k", "b");
        right.add("other", "c");

        left.merge(right);
        assert_eq!(left.len(), 2);
        assert_eq!(left.get("k").unwrap().len(), 2);
    }

    #[test]
    fn test_empty() {
        let map = GroupMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert!(map.get("missing").is_none());
    }
}
