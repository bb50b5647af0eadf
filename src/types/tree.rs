//! FileTree - Snapshot of one directory tree

use super::FileEntry;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// In-memory snapshot of a tree, captured by one enumeration.
///
/// Holds the relative file entries plus the set of relative directory
/// paths. The diff stage compares the file entries of two snapshots; the
/// prune stage takes a fresh snapshot after deletions and sweeps its
/// directory set. Snapshots are never cached across passes; every pass
/// re-enumerates from scratch.
#[derive(Debug, Clone, PartialEq)]
pub struct FileTree {
    /// Map: relative_path → FileEntry
    pub entries: HashMap<PathBuf, FileEntry>,

    /// Relative paths of every directory under the root (root excluded)
    pub dirs: HashSet<PathBuf>,

    /// Aggregate statistics
    pub total_size: u64,

    /// Root the snapshot was taken from
    pub root_path: PathBuf,
}

impl FileTree {
    /// Create a new empty FileTree
    pub fn new(root_path: PathBuf) -> Self {
        Self {
            entries: HashMap::new(),
            dirs: HashSet::new(),
            total_size: 0,
            root_path,
        }
    }

    /// Insert a file entry, replacing any previous entry at the same path
    pub fn insert(&mut self, path: PathBuf, entry: FileEntry) {
        if let Some(old_entry) = self.entries.get(&path) {
            self.total_size = self.total_size.saturating_sub(old_entry.size);
        }

        self.total_size += entry.size;
        self.entries.insert(path, entry);
    }

    /// Record a directory seen during enumeration
    pub fn insert_dir(&mut self, path: PathBuf) {
        self.dirs.insert(path);
    }

    /// Get a file entry by relative path
    pub fn get(&self, path: &Path) -> Option<&FileEntry> {
        self.entries.get(path)
    }

    /// Check if a relative file path exists in the tree
    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    /// Number of file entries in the tree
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the tree has no files
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterator over all (relative path, FileEntry) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&PathBuf, &FileEntry)> {
        self.entries.iter()
    }

    /// Iterator over just the relative file paths
    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.keys()
    }
}
