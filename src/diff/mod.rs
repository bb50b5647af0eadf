//! Diff stage - tree comparison and plan generation

mod compare;
mod plan;

pub use compare::compare_files;
pub use plan::{generate_sync_plan, PlanStats, SyncPlan};
