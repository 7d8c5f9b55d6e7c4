//! Tree node for a single filesystem entry.
//!
//! A scan produces one rooted ownership hierarchy: every directory node
//! owns its children outright, with no shared or back references. Once the
//! scan returns, the tree is treated as read-only — the analysis passes
//! only ever borrow it.

use super::category::{classify, FileCategory};
use super::size::format_size;
use compact_str::CompactString;
use serde::Serialize;
use std::path::PathBuf;
use std::time::SystemTime;

/// A single file or directory in the scanned tree.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// File or directory name (the final path component).
    pub name: CompactString,

    /// Absolute path of this entry.
    pub path: PathBuf,

    /// `true` if this node represents a directory.
    pub is_dir: bool,

    /// Logical size in bytes. For directories this is the sum of all
    /// descendant file sizes, finalised bottom-up during the scan.
    pub size: u64,

    /// Last-modified timestamp, when the filesystem reported one.
    pub modified: Option<SystemTime>,

    /// Lowercased extension with leading dot (".jpg"). Empty for
    /// directories and for files without an extension.
    pub extension: CompactString,

    /// Classification bucket. `Some` for every file, `None` for every
    /// directory — enforced by the constructors.
    pub category: Option<FileCategory>,

    /// Direct children, in the order the filesystem listed them.
    /// Empty for files.
    pub children: Vec<Node>,
}

impl Node {
    /// Create a file node. The category is derived from `extension`, so a
    /// file node always carries the first-match category for its extension.
    pub fn new_file(
        name: CompactString,
        path: PathBuf,
        size: u64,
        modified: Option<SystemTime>,
        extension: CompactString,
    ) -> Self {
        let category = classify(&extension);
        Self {
            name,
            path,
            is_dir: false,
            size,
            modified,
            extension,
            category: Some(category),
            children: Vec::new(),
        }
    }

    /// Create a directory node with no children and zero size. The scanner
    /// fills in children and finalises the size bottom-up.
    pub fn new_dir(name: CompactString, path: PathBuf, modified: Option<SystemTime>) -> Self {
        Self {
            name,
            path,
            is_dir: true,
            size: 0,
            modified,
            extension: CompactString::const_new(""),
            category: None,
            children: Vec::new(),
        }
    }

    /// Depth-first iterator over every file node in this subtree,
    /// in traversal encounter order. Directories are walked, not yielded.
    pub fn files(&self) -> Files<'_> {
        Files { stack: vec![self] }
    }

    /// Number of files in this subtree.
    pub fn file_count(&self) -> u64 {
        self.files().count() as u64
    }

    /// Human-readable size, e.g. "1.5 MB".
    pub fn size_formatted(&self) -> String {
        format_size(self.size)
    }
}

/// Depth-first file iterator backed by an explicit stack, so arbitrarily
/// deep trees cannot overflow the call stack.
pub struct Files<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Files<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        while let Some(node) = self.stack.pop() {
            if node.is_dir {
                // Reversed push keeps children in their stored order.
                for child in node.children.iter().rev() {
                    self.stack.push(child);
                }
            } else {
                return Some(node);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: u64) -> Node {
        let extension = match name.rsplit_once('.') {
            Some((_, ext)) => CompactString::from(format!(".{}", ext.to_lowercase())),
            None => CompactString::const_new(""),
        };
        Node::new_file(
            CompactString::new(name),
            PathBuf::from(name),
            size,
            None,
            extension,
        )
    }

    fn dir(name: &str, children: Vec<Node>) -> Node {
        let mut node = Node::new_dir(CompactString::new(name), PathBuf::from(name), None);
        node.size = children.iter().map(|c| c.size).sum();
        node.children = children;
        node
    }

    #[test]
    fn file_nodes_carry_their_category() {
        assert_eq!(file("photo.jpg", 10).category, Some(FileCategory::Images));
        assert_eq!(file("notes.txt", 10).category, Some(FileCategory::Documents));
        assert_eq!(file("mystery.qqq", 10).category, Some(FileCategory::Others));
        assert_eq!(file("README", 10).category, Some(FileCategory::Others));
    }

    #[test]
    fn directory_nodes_have_no_category() {
        let d = Node::new_dir(CompactString::new("src"), PathBuf::from("src"), None);
        assert!(d.category.is_none());
        assert!(d.extension.is_empty());
    }

    /// `files()` must yield files in depth-first encounter order and skip
    /// directory nodes entirely.
    #[test]
    fn files_iterates_depth_first() {
        let tree = dir(
            "root",
            vec![
                file("a.txt", 1),
                dir("sub", vec![file("b.txt", 2), file("c.txt", 3)]),
                file("d.txt", 4),
            ],
        );

        let names: Vec<&str> = tree.files().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt", "d.txt"]);
    }

    #[test]
    fn file_count_counts_descendant_files_only() {
        let tree = dir(
            "root",
            vec![
                file("a.txt", 1),
                dir("sub", vec![file("b.txt", 2)]),
                dir("empty", vec![]),
            ],
        );
        assert_eq!(tree.file_count(), 2);
    }
}
