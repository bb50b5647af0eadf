//! Sync plan generation

use crate::diff::compare_files;
use crate::types::{FileTree, SyncAction};

/// Ordered list of actions for one reconciliation pass
#[derive(Debug, Clone, Default)]
pub struct SyncPlan {
    /// Actions to execute, sorted by path
    pub actions: Vec<SyncAction>,

    /// Aggregate statistics about the plan
    pub stats: PlanStats,
}

impl SyncPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an action to the plan and update statistics
    pub fn add_action(&mut self, action: SyncAction) {
        match &action {
            SyncAction::CopyNew(_) => self.stats.copy_count += 1,
            SyncAction::Overwrite(_) => self.stats.overwrite_count += 1,
            SyncAction::Delete(_) => self.stats.delete_count += 1,
            SyncAction::Skip => self.stats.skip_count += 1,
        }

        self.actions.push(action);
    }

    /// True if the plan contains anything beyond skips
    pub fn has_work(&self) -> bool {
        self.actions.iter().any(|action| !action.is_skip())
    }

    /// Sort actions by path for deterministic log output
    pub fn sort_by_path(&mut self) {
        self.actions.sort_by(|a, b| match (a.path(), b.path()) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
    }
}

/// Statistics about a sync plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlanStats {
    pub copy_count: usize,
    pub overwrite_count: usize,
    pub delete_count: usize,
    pub skip_count: usize,
}

/// Compare source and replica snapshots and derive the pass's actions.
///
/// Source entries missing from the replica become `CopyNew`; entries
/// present in both are compared by mtime; replica entries absent from the
/// source become `Delete`. Empty-directory pruning is not planned here:
/// it runs against the live filesystem after deletes, so it can see
/// directories emptied by this same pass.
pub fn generate_sync_plan(src_tree: &FileTree, replica_tree: &FileTree) -> SyncPlan {
    let mut plan = SyncPlan::new();

    for (path, src_entry) in src_tree.iter() {
        match replica_tree.get(path) {
            None => plan.add_action(SyncAction::CopyNew(src_entry.clone())),
            Some(replica_entry) => plan.add_action(compare_files(src_entry, replica_entry)),
        }
    }

    for path in replica_tree.paths() {
        if !src_tree.contains(path) {
            plan.add_action(SyncAction::Delete(path.clone()));
        }
    }

    plan.sort_by_path();

    plan
}
