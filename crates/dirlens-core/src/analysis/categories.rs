//! Per-category size and count statistics.
//!
//! Counters are created fresh for every call, so repeated analyses never
//! accumulate state and the static category table is never mutated.

use crate::model::{format_size, FileCategory, Node};
use serde::Serialize;

/// Size and count totals for a single category over one analysis pass.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryStats {
    pub category: FileCategory,
    pub total_size: u64,
    pub file_count: u64,
}

impl CategoryStats {
    fn zeroed(category: FileCategory) -> Self {
        Self {
            category,
            total_size: 0,
            file_count: 0,
        }
    }

    /// Human-readable total, e.g. "1.5 MB".
    pub fn total_size_formatted(&self) -> String {
        format_size(self.total_size)
    }
}

/// Compute per-category totals for every file in the tree.
///
/// Returns each category with at least one file, plus
/// [`FileCategory::Others`] unconditionally even when empty, in declaration
/// order. Sorting — conventionally descending by total size — is left to
/// the presentation layer.
pub fn analyse_categories(root: &Node) -> Vec<CategoryStats> {
    let mut stats: Vec<CategoryStats> = FileCategory::ALL
        .iter()
        .copied()
        .map(CategoryStats::zeroed)
        .collect();

    for file in root.files() {
        // Every file node carries its first-match category by construction.
        let category = file.category.unwrap_or(FileCategory::Others);
        let entry = &mut stats[category as usize];
        entry.total_size += file.size;
        entry.file_count += 1;
    }

    stats.retain(|s| s.file_count > 0 || s.category == FileCategory::Others);
    stats
}
