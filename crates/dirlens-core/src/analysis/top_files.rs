//! Largest-files analysis.
//!
//! Flattens a completed tree into its file nodes and ranks them by size
//! for the "top N files" report.

use crate::model::Node;

/// Number of entries returned when the caller has no preference.
pub const DEFAULT_LIMIT: usize = 100;

/// Collect every file in the tree and return the `limit` largest,
/// descending by size.
///
/// The sort is stable, so files of equal size keep their traversal
/// encounter order. A `limit` of zero yields an empty list; a limit larger
/// than the file count yields every file.
pub fn largest_files(root: &Node, limit: usize) -> Vec<&Node> {
    if limit == 0 {
        return Vec::new();
    }

    let mut files: Vec<&Node> = root.files().collect();
    files.sort_by(|a, b| b.size.cmp(&a.size));
    files.truncate(limit);
    files
}
