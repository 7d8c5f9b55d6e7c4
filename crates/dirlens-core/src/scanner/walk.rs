//! Recursive depth-first directory walk.
//!
//! Each recursive call owns a disjoint subtree, so the walk is
//! single-threaded with no shared mutable state. A directory's size is
//! finalised only after all of its children have been processed — a strict
//! bottom-up order that makes every directory size the sum of its direct
//! children's sizes.

use crate::model::Node;
use crate::scanner::ScanError;
use compact_str::{format_compact, CompactString};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

/// Mutable state threaded through the recursive walk.
pub(crate) struct WalkContext<'a> {
    /// Invoked with the display name of each successfully read file.
    pub(crate) on_file: &'a mut dyn FnMut(&str),
    /// Cooperative cancellation flag, checked between directory entries.
    pub(crate) cancel: Option<&'a AtomicBool>,
    /// Entries omitted from the tree because of access denial.
    pub(crate) skipped: u64,
}

impl WalkContext<'_> {
    fn cancelled(&self) -> bool {
        self.cancel
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Walk one directory, returning its fully populated node.
///
/// Per-entry access denials are absorbed here: the entry is skipped,
/// counted, and the walk continues with its siblings. A denial on the
/// directory listing itself bubbles up as an `Err` so the caller decides —
/// the parent level omits the whole subtree, the top level returns a bare
/// root node instead of failing.
pub(crate) fn walk_dir(path: &Path, ctx: &mut WalkContext<'_>) -> Result<Node, ScanError> {
    let mut node = dir_node(path);

    let entries = fs::read_dir(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    for entry in entries {
        if ctx.cancelled() {
            return Err(ScanError::Cancelled);
        }

        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                ctx.skipped += 1;
                continue;
            }
            Err(source) => {
                return Err(ScanError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let child_path = entry.path();
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                ctx.skipped += 1;
                continue;
            }
            Err(source) => {
                return Err(ScanError::Io {
                    path: child_path,
                    source,
                });
            }
        };

        if file_type.is_dir() {
            match walk_dir(&child_path, ctx) {
                Ok(child) => node.children.push(child),
                // An unreadable subdirectory is omitted entirely;
                // its siblings still get scanned.
                Err(err) if err.is_access_denied() => ctx.skipped += 1,
                Err(err) => return Err(err),
            }
        } else {
            // Symlinks are treated as plain entries and never followed.
            let meta = match fs::symlink_metadata(&child_path) {
                Ok(meta) => meta,
                Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                    ctx.skipped += 1;
                    continue;
                }
                Err(source) => {
                    return Err(ScanError::Io {
                        path: child_path,
                        source,
                    });
                }
            };

            let name = CompactString::new(entry.file_name().to_string_lossy());
            let extension = normalised_extension(&child_path);
            (ctx.on_file)(&name);
            node.children.push(Node::new_file(
                name,
                child_path,
                meta.len(),
                meta.modified().ok(),
                extension,
            ));
        }
    }

    // Children are final at this point: a child file contributes its raw
    // length, a child directory its already-aggregated size.
    node.size = node.children.iter().map(|child| child.size).sum();
    Ok(node)
}

/// Construct a directory node from filesystem metadata, without children.
pub(crate) fn dir_node(path: &Path) -> Node {
    let modified = fs::metadata(path).ok().and_then(|meta| meta.modified().ok());
    Node::new_dir(display_name(path), path.to_path_buf(), modified)
}

/// Derive a display name for a directory.
fn display_name(path: &Path) -> CompactString {
    match path.file_name() {
        Some(name) => CompactString::new(name.to_string_lossy()),
        // Roots like "/" or "C:\" have no final component; show the path.
        None => CompactString::new(path.to_string_lossy()),
    }
}

/// Lowercased extension with leading dot; empty when the file has none.
fn normalised_extension(path: &Path) -> CompactString {
    match path.extension() {
        Some(ext) => format_compact!(".{}", ext.to_string_lossy().to_lowercase()),
        None => CompactString::const_new(""),
    }
}
