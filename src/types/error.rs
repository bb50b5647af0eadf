//! Error types for mira

use std::path::PathBuf;
use thiserror::Error;

/// Error types for mira operations
///
/// Two tiers: `Enumeration` aborts the reconciliation pass that raised it,
/// while the item-level variants (`ItemCopy`, `ItemDelete`,
/// `DirectoryPrune`) are logged and the pass continues with the remaining
/// items.
#[derive(Debug, Error)]
pub enum MiraError {
    /// Tree enumeration failed; the whole pass is abandoned
    #[error("failed to enumerate {root}: {source}")]
    Enumeration {
        root: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Copying a single file failed
    #[error("failed to copy {path}: {source}")]
    ItemCopy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Deleting a single replica file failed
    #[error("failed to delete {path}: {source}")]
    ItemDelete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Removing an empty replica directory failed
    #[error("failed to prune directory {path}: {source}")]
    DirectoryPrune {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("{0}")]
    Config(String),

    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MiraError {
    /// Errors that abandon the current pass entirely; everything else is
    /// isolated to the single item that failed.
    pub fn is_pass_aborting(&self) -> bool {
        matches!(
            self,
            MiraError::Enumeration { .. } | MiraError::Config(_) | MiraError::Io(_)
        )
    }

    /// The relative path of the item the error relates to, if any
    pub fn relative_path(&self) -> Option<&PathBuf> {
        match self {
            MiraError::ItemCopy { path, .. }
            | MiraError::ItemDelete { path, .. }
            | MiraError::DirectoryPrune { path, .. } => Some(path),
            _ => None,
        }
    }
}
