//! Scan progress reporting — lightweight messages sent from the scan
//! thread to the consuming thread via a crossbeam channel.

use super::{ScanError, ScanOutcome};
use std::time::Duration;

/// Progress updates sent from the scan thread.
///
/// Delivery preserves emission order. Per-file messages exist for liveness
/// feedback only — consumers must not rely on them for correctness.
#[derive(Debug)]
pub enum ScanProgress {
    /// A file entry was read successfully.
    File { name: String },

    /// Scanning finished; the completed tree travels with the message.
    Complete {
        outcome: ScanOutcome,
        duration: Duration,
    },

    /// Scanning aborted with an unrecoverable failure.
    Failed { error: ScanError },

    /// Scanning stopped because the caller requested cancellation.
    Cancelled,
}
