//! File comparison logic

use crate::types::{FileEntry, SyncAction};

/// Compare a source entry against its replica counterpart.
///
/// Comparison is by modification time only, with a strict ordering rule:
///
/// - Source strictly newer (`src.mtime > rep.mtime`) → Overwrite
/// - Equal or older → Skip
///
/// Equal timestamps never trigger a copy, so a pass over an unchanged
/// tree performs zero copies. This is a deliberate approximation: files
/// with identical timestamps but different content are treated as in
/// sync, and no byte-level comparison is ever performed.
pub fn compare_files(src: &FileEntry, replica: &FileEntry) -> SyncAction {
    match src.mtime.cmp(&replica.mtime) {
        std::cmp::Ordering::Greater => SyncAction::Overwrite(src.clone()),
        std::cmp::Ordering::Less | std::cmp::Ordering::Equal => SyncAction::Skip,
    }
}
