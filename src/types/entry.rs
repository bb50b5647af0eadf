//! FileEntry - Represents a single file in a mirrored tree

use std::path::PathBuf;
use std::time::SystemTime;

/// A file captured during tree enumeration.
///
/// The path is relative to the tree root and is the identity key when
/// comparing the source tree against the replica: two entries with equal
/// relative paths are "the same file" regardless of which tree they came
/// from.
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    /// Path relative to the tree root
    pub path: PathBuf,

    /// File size in bytes
    pub size: u64,

    /// Last modification time
    pub mtime: SystemTime,
}

impl FileEntry {
    pub fn new(path: PathBuf, size: u64, mtime: SystemTime) -> Self {
        Self { path, size, mtime }
    }
}
