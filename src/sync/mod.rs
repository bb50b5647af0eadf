//! One full reconciliation pass

use crate::config::SyncConfig;
use crate::diff::generate_sync_plan;
use crate::executor::{execute_plan, execute_prune, PassStats};
use crate::logging::SyncLogger;
use crate::scanner::scan_directory;
use crate::types::MiraError;

/// Run one reconciliation pass: enumerate both trees, copy new and
/// updated files into the replica, delete replica orphans, prune empty
/// directories.
///
/// Enumeration failure aborts the pass with an error and leaves both
/// trees untouched; the next scheduled tick retries from scratch. All
/// later failures are item-level: logged, counted in the returned
/// [`PassStats`], never fatal.
pub fn run_pass(config: &SyncConfig, logger: &SyncLogger) -> Result<PassStats, MiraError> {
    let src_tree = scan_directory(&config.source)?;
    let replica_tree = scan_directory(&config.replica)?;

    let plan = generate_sync_plan(&src_tree, &replica_tree);

    let mut stats = execute_plan(&plan, config, logger);
    execute_prune(&config.replica, logger, &mut stats);

    Ok(stats)
}
