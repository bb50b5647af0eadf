//! Empty-directory pruning

use crate::scanner::scan_directory;
use crate::types::MiraError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Remove every directory under `root` that contains no files and no
/// subdirectories, in deepest-first order.
///
/// Takes a fresh [`crate::types::FileTree`] snapshot of the replica, so
/// the candidate set reflects the state after this pass's deletions, then
/// sweeps the snapshot's directory set. Depth ordering makes pruning
/// transitive within the single sweep: a child emptied and removed
/// earlier in the iteration empties its parent, and the parent is checked
/// afterwards against the live filesystem.
///
/// # Returns
/// The relative paths of pruned directories (in removal order) and the
/// item-level errors encountered. Errors never stop the sweep.
pub fn prune_empty_directories(root: &Path) -> (Vec<PathBuf>, Vec<MiraError>) {
    let mut pruned = Vec::new();
    let mut errors = Vec::new();

    let tree = match scan_directory(root) {
        Ok(tree) => tree,
        Err(e) => return (pruned, vec![e]),
    };

    // Deepest first, so children are evaluated before their parents
    let mut dirs: Vec<&PathBuf> = tree.dirs.iter().collect();
    dirs.sort_by_key(|dir| std::cmp::Reverse(dir.components().count()));

    for relative in dirs {
        let dir = root.join(relative);

        match is_empty_dir(&dir) {
            Ok(true) => match std::fs::remove_dir(&dir) {
                Ok(()) => pruned.push(relative.clone()),
                Err(e) => errors.push(MiraError::DirectoryPrune {
                    path: relative.clone(),
                    source: e,
                }),
            },
            Ok(false) => {}
            // Already gone (removed externally between snapshot and check)
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => errors.push(MiraError::DirectoryPrune {
                path: relative.clone(),
                source: e,
            }),
        }
    }

    (pruned, errors)
}

fn is_empty_dir(dir: &Path) -> std::io::Result<bool> {
    Ok(std::fs::read_dir(dir)?.next().is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_prunes_single_empty_directory() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let root = temp_dir.path();

        fs::create_dir(root.join("empty")).expect("create empty dir");

        let (pruned, errors) = prune_empty_directories(root);

        assert!(errors.is_empty());
        assert_eq!(pruned, vec![PathBuf::from("empty")]);
        assert!(!root.join("empty").exists());
    }

    #[test]
    fn test_prunes_nested_empty_directories_transitively() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let root = temp_dir.path();

        // a/b/c all become empty once c is removed, then b, then a
        fs::create_dir_all(root.join("a/b/c")).expect("create nested dirs");

        let (pruned, errors) = prune_empty_directories(root);

        assert!(errors.is_empty());
        assert_eq!(
            pruned,
            vec![
                PathBuf::from("a/b/c"),
                PathBuf::from("a/b"),
                PathBuf::from("a"),
            ]
        );
        assert!(!root.join("a").exists());
    }

    #[test]
    fn test_keeps_directories_containing_files() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let root = temp_dir.path();

        fs::create_dir_all(root.join("keep/nested-empty")).expect("create dirs");
        fs::write(root.join("keep/file.txt"), b"data").expect("write file");

        let (pruned, errors) = prune_empty_directories(root);

        assert!(errors.is_empty());
        assert_eq!(pruned, vec![PathBuf::from("keep/nested-empty")]);
        assert!(root.join("keep").exists());
        assert!(root.join("keep/file.txt").exists());
    }

    #[test]
    fn test_empty_root_is_never_pruned() {
        let temp_dir = TempDir::new().expect("create temp dir");

        let (pruned, errors) = prune_empty_directories(temp_dir.path());

        assert!(pruned.is_empty());
        assert!(errors.is_empty());
        assert!(temp_dir.path().exists());
    }

    #[test]
    fn test_vanished_root_reports_error_without_panicking() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let missing = temp_dir.path().join("vanished");

        let (pruned, errors) = prune_empty_directories(&missing);

        assert!(pruned.is_empty());
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_mixed_siblings() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let root = temp_dir.path();

        fs::create_dir_all(root.join("parent/empty-child")).expect("create dirs");
        fs::create_dir_all(root.join("parent/full-child")).expect("create dirs");
        fs::write(root.join("parent/full-child/f.txt"), b"x").expect("write file");

        let (pruned, _errors) = prune_empty_directories(root);

        assert_eq!(pruned, vec![PathBuf::from("parent/empty-child")]);
        assert!(root.join("parent/full-child/f.txt").exists());
    }
}
