use crate::labels::extractor::LabelExtraction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelStatistics {
    pub total_entries: usize,
    pub labeled_entries: usize,
    pub hidden_skipped: usize,
    pub unlabeled_entries: usize,
    pub duplicate_keys: usize,
    pub distinct_labels: usize,
    pub labels_by_count: BTreeMap<String, usize>,
}

impl LabelStatistics {
    pub fn from_extraction(extraction: &LabelExtraction) -> Self {
        let mut labels_by_count = BTreeMap::new();
        let mut unlabeled_entries = 0;

        for label in extraction.labels.values() {
            if label.is_empty() {
                unlabeled_entries += 1;
            } else {
                *labels_by_count.entry(label.clone()).or_insert(0) += 1;
            }
        }

        Self {
            total_entries: extraction.entries_seen,
            labeled_entries: extraction.labels.len(),
            hidden_skipped: extraction.hidden_skipped,
            unlabeled_entries,
            duplicate_keys: extraction.duplicates.len(),
            distinct_labels: labels_by_count.len(),
            labels_by_count,
        }
    }

    /// Labels ordered by file count, most frequent first.
    pub fn ranked_labels(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<_> = self
            .labels_by_count
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
            .collect();
        // BTreeMap order already breaks ties alphabetically; the sort is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn display_summary(&self) -> String {
        let mut summary = format!(
            "Label Results:\n  Entries scanned: {}\n  Labeled files: {}\n  Hidden skipped: {}\n",
            self.total_entries, self.labeled_entries, self.hidden_skipped
        );

        if self.unlabeled_entries > 0 {
            summary.push_str(&format!(
                "  Without label: {}\n",
                self.unlabeled_entries
            ));
        }

        if self.duplicate_keys > 0 {
            summary.push_str(&format!("  Duplicate names: {}\n", self.duplicate_keys));
        }

        if !self.labels_by_count.is_empty() {
            summary.push_str(&format!("  Distinct labels: {}\n", self.distinct_labels));
            for (label, count) in self.ranked_labels() {
                let noun = if count == 1 { "file" } else { "files" };
                summary.push_str(&format!("    {}: {} {}\n", label, count, noun));
            }
        }

        summary
    }
}
