//! Recursive tree walker

use crate::types::{FileEntry, FileTree, MiraError};
use std::path::Path;

/// Enumerate everything under `root` into a [`FileTree`] snapshot.
///
/// Mirroring is unfiltered, so the walker runs with all standard ignore
/// filters disabled: every file and every directory under the root is
/// captured. Symlinks are not followed.
///
/// Any failure during enumeration (root vanished, unreadable entry,
/// unavailable metadata) aborts with [`MiraError::Enumeration`]; the
/// caller abandons the pass and the next scheduled tick retries from
/// scratch.
pub fn scan_directory(root: &Path) -> Result<FileTree, MiraError> {
    let enumeration_error = |source: std::io::Error| MiraError::Enumeration {
        root: root.to_path_buf(),
        source,
    };

    if !root.is_dir() {
        return Err(enumeration_error(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "root is not an existing directory",
        )));
    }

    let mut tree = FileTree::new(root.to_path_buf());

    let walker = ignore::WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    for result in walker {
        let entry = result.map_err(|e| enumeration_error(std::io::Error::other(e)))?;

        // Depth 0 is the root itself
        if entry.depth() == 0 {
            continue;
        }

        let relative_path = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| enumeration_error(std::io::Error::other(e)))?
            .to_path_buf();

        let file_type = match entry.file_type() {
            Some(ft) => ft,
            None => continue, // stdin and friends; cannot occur under a root
        };

        if file_type.is_dir() {
            tree.insert_dir(relative_path);
            continue;
        }

        let metadata = entry
            .metadata()
            .map_err(|e| enumeration_error(std::io::Error::other(e)))?;
        let mtime = metadata.modified().map_err(enumeration_error)?;

        let file_entry = FileEntry::new(relative_path.clone(), metadata.len(), mtime);
        tree.insert(relative_path, file_entry);
    }

    Ok(tree)
}
