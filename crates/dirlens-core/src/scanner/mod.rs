//! Scanner module — builds a [`Node`] tree from a filesystem subtree.
//!
//! The traversal is recursive, single-threaded, and depth-first: children
//! are fully processed before their parent's size is computed. Only
//! access-denied failures are absorbed — the affected entry is omitted from
//! the tree and counted in [`ScanOutcome::skipped`]; any other failure
//! aborts the whole scan.
//!
//! [`start_scan`] wraps the blocking walk in a named background thread with
//! a bounded progress channel and cooperative cancellation, so interactive
//! callers never block on filesystem I/O.

pub mod progress;
mod walk;

use crate::model::Node;
use progress::ScanProgress;
use walk::WalkContext;

use crossbeam_channel::Receiver;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Unrecoverable scan failure.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The filesystem failed with something other than an access denial —
    /// missing path, I/O error, resource exhaustion.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The cancellation flag was raised while the walk was in progress.
    #[error("scan was cancelled")]
    Cancelled,
}

impl ScanError {
    /// Access-denied failures are absorbed as entry skips, never surfaced.
    pub(crate) fn is_access_denied(&self) -> bool {
        matches!(
            self,
            Self::Io { source, .. } if source.kind() == io::ErrorKind::PermissionDenied
        )
    }
}

/// The result of a completed scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanOutcome {
    /// Root of the scanned tree.
    pub root: Node,
    /// Entries omitted from the tree because the filesystem denied access.
    pub skipped: u64,
}

impl ScanOutcome {
    /// `true` when every reachable entry made it into the tree.
    pub fn is_complete(&self) -> bool {
        self.skipped == 0
    }
}

/// Scan a directory subtree, discarding progress.
///
/// See [`scan_with_progress`] for the full contract.
pub fn scan(root: &Path) -> Result<ScanOutcome, ScanError> {
    scan_with_progress(root, |_| {})
}

/// Scan a directory subtree, invoking `on_file` with the display name of
/// each successfully read file, in traversal order.
///
/// Blocks on filesystem I/O for the whole walk; latency-sensitive callers
/// should use [`start_scan`] instead.
pub fn scan_with_progress<F>(root: &Path, mut on_file: F) -> Result<ScanOutcome, ScanError>
where
    F: FnMut(&str),
{
    scan_inner(root, &mut on_file, None)
}

fn scan_inner(
    root: &Path,
    on_file: &mut dyn FnMut(&str),
    cancel: Option<&AtomicBool>,
) -> Result<ScanOutcome, ScanError> {
    // Node paths are absolute even when the caller hands us something
    // relative.
    let root = std::path::absolute(root).map_err(|source| ScanError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    let mut ctx = WalkContext {
        on_file,
        cancel,
        skipped: 0,
    };

    match walk::walk_dir(&root, &mut ctx) {
        Ok(node) => {
            debug!(
                "walk of {} complete: {} files, {} bytes, {} entries skipped",
                root.display(),
                node.file_count(),
                node.size,
                ctx.skipped
            );
            Ok(ScanOutcome {
                root: node,
                skipped: ctx.skipped,
            })
        }
        // An unreadable scan root still yields a (childless) node rather
        // than a failure; `skipped` records the denial.
        Err(err) if err.is_access_denied() => {
            warn!("scan root {} is not readable: {err}", root.display());
            Ok(ScanOutcome {
                root: walk::dir_node(&root),
                skipped: ctx.skipped + 1,
            })
        }
        Err(err) => Err(err),
    }
}

/// Maximum number of progress messages that may queue in the channel.
///
/// Per-file messages are small, but a bounded channel means a stalled
/// consumer applies back-pressure to the scan thread instead of growing
/// the heap without limit.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 4_096;

/// Handle to a running or completed background scan. Allows cancellation
/// and receiving progress updates.
pub struct ScanHandle {
    /// Receiver for progress updates from the scan thread.
    pub progress_rx: Receiver<ScanProgress>,
    /// Flag to request cancellation.
    cancel_flag: Arc<AtomicBool>,
    /// Join handle for the scan thread.
    _thread: Option<thread::JoinHandle<()>>,
}

impl ScanHandle {
    /// Request the scan to stop as soon as possible.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }
}

/// Start a scan on a background thread.
///
/// Returns a `ScanHandle` for receiving progress and requesting
/// cancellation. The thread sends one [`ScanProgress::File`] message per
/// scanned file, followed by exactly one terminal message — `Complete`,
/// `Failed`, or `Cancelled`. Message order matches traversal order.
pub fn start_scan(root_path: PathBuf) -> ScanHandle {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<ScanProgress>(PROGRESS_CHANNEL_CAPACITY);
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let cancel_clone = cancel_flag.clone();

    let thread = thread::Builder::new()
        .name("dirlens-scanner".into())
        .spawn(move || {
            info!("Starting scan of {}", root_path.display());
            let start = Instant::now();

            let mut on_file = |name: &str| {
                // A dropped receiver is not an error; keep scanning.
                let _ = progress_tx.send(ScanProgress::File {
                    name: name.to_owned(),
                });
            };

            match scan_inner(&root_path, &mut on_file, Some(&cancel_clone)) {
                Ok(outcome) => {
                    let duration = start.elapsed();
                    info!(
                        "Scan of {} complete in {duration:?} ({} entries skipped)",
                        root_path.display(),
                        outcome.skipped
                    );
                    let _ = progress_tx.send(ScanProgress::Complete { outcome, duration });
                }
                Err(ScanError::Cancelled) => {
                    info!("Scan of {} cancelled", root_path.display());
                    let _ = progress_tx.send(ScanProgress::Cancelled);
                }
                Err(error) => {
                    warn!("Scan of {} failed: {error}", root_path.display());
                    let _ = progress_tx.send(ScanProgress::Failed { error });
                }
            }
        })
        .expect("failed to spawn scanner thread");

    ScanHandle {
        progress_rx,
        cancel_flag,
        _thread: Some(thread),
    }
}
