//! Executor module for file operations

pub mod copy;
pub mod prune;

use crate::config::SyncConfig;
use crate::diff::SyncPlan;
use crate::logging::SyncLogger;
use crate::types::{MiraError, SyncAction};
use std::fs;
use std::path::Path;

pub use copy::copy_file;
pub use prune::prune_empty_directories;

/// Outcome counters for one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Files copied or overwritten
    pub copied: usize,
    /// Replica files deleted
    pub deleted: usize,
    /// Empty directories removed
    pub pruned: usize,
    /// Item-level failures (copy, delete or prune)
    pub failed: usize,
}

/// Execute the copy and delete actions of a plan.
///
/// Actions run sequentially; each success emits one log line and each
/// per-item failure is logged and counted without stopping the remaining
/// actions. The caller runs the prune stage afterwards.
pub fn execute_plan(plan: &SyncPlan, config: &SyncConfig, logger: &SyncLogger) -> PassStats {
    let mut stats = PassStats::default();

    for action in &plan.actions {
        match action {
            SyncAction::CopyNew(entry) | SyncAction::Overwrite(entry) => {
                let src_path = config.source.join(&entry.path);
                let dest_path = config.replica.join(&entry.path);

                match copy_file(&src_path, &dest_path) {
                    Ok(_) => {
                        stats.copied += 1;
                        logger.log(&format!("Copied {}", entry.path.display()));
                    }
                    Err(e) => {
                        stats.failed += 1;
                        let err = MiraError::ItemCopy {
                            path: entry.path.clone(),
                            source: e,
                        };
                        logger.log(&err.to_string());
                    }
                }
            }
            SyncAction::Delete(path) => {
                let dest_path = config.replica.join(path);

                match fs::remove_file(&dest_path) {
                    Ok(()) => {
                        stats.deleted += 1;
                        logger.log(&format!("Deleted {}", path.display()));
                    }
                    Err(e) => {
                        stats.failed += 1;
                        let err = MiraError::ItemDelete {
                            path: path.clone(),
                            source: e,
                        };
                        logger.log(&err.to_string());
                    }
                }
            }
            SyncAction::Skip => {}
        }
    }

    stats
}

/// Run the prune stage against the replica and fold its results into the
/// pass statistics.
pub fn execute_prune(replica_root: &Path, logger: &SyncLogger, stats: &mut PassStats) {
    let (pruned, errors) = prune_empty_directories(replica_root);

    for dir in &pruned {
        logger.log(&format!("Deleted empty directory {}", dir.display()));
    }
    for err in &errors {
        logger.log(&err.to_string());
    }

    stats.pruned += pruned.len();
    stats.failed += errors.len();
}
