//! SyncAction - Actions determined by the diff stage

use super::FileEntry;
use std::path::PathBuf;

/// Reconciliation action determined by comparing the two trees
#[derive(Debug, Clone)]
pub enum SyncAction {
    /// Copy new file (exists in source, missing in replica)
    CopyNew(FileEntry),

    /// Overwrite existing file (source mtime strictly newer)
    Overwrite(FileEntry),

    /// Delete replica file (missing in source)
    Delete(PathBuf),

    /// No action (replica file already up to date)
    Skip,
}

impl SyncAction {
    /// The relative path this action applies to, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            SyncAction::CopyNew(entry) | SyncAction::Overwrite(entry) => Some(&entry.path),
            SyncAction::Delete(path) => Some(path),
            SyncAction::Skip => None,
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, SyncAction::Skip)
    }
}
