//! Report building.
//!
//! The report is the final, ordered view of the surviving groups: canonical
//! keys in lexicographic order, each with its surface-form variants (also
//! lexicographic). Entries are serde-serializable for the JSON output path.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One reported inconsistency: a canonical key and the distinct surface
/// forms it was seen with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// The canonical key shared by all variants
    pub key: String,

    /// The distinct surface forms, in lexicographic order (always ≥ 2)
    pub variants: Vec<String>,
}

/// The final ordered sequence of reported inconsistencies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    entries: Vec<ReportEntry>,
}

impl ConsistencyReport {
    /// Build a report from resolved groups, sorting by canonical key.
    pub fn from_groups(groups: Vec<(String, BTreeSet<String>)>) -> Self {
        let mut entries: Vec<ReportEntry> = groups
            .into_iter()
            .map(|(key, variants)| ReportEntry {
                key,
                variants: variants.into_iter().collect(),
            })
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));

        ConsistencyReport { entries }
    }

    /// The report entries, sorted by canonical key.
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Iterate over the report entries in key order.
    pub fn iter(&self) -> std::slice::Iter<'_, ReportEntry> {
        self.entries.iter()
    }

    /// Number of reported groups.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether nothing qualified for the report.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ConsistencyReport {
    type Item = &'a ReportEntry;
    type IntoIter = std::slice::Iter<'a, ReportEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
