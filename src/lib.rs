//! # mira - One-Way Directory Mirroring
//!
//! Keeps a replica directory tree identical to a source tree by running a
//! full reconciliation pass on a fixed interval: enumerate both trees,
//! copy new and updated files, delete replica orphans, prune directories
//! left empty.
//!
//! Comparison is by modification time only; no content hashing is
//! performed.

// Module declarations
pub mod config;
pub mod diff;
pub mod executor;
pub mod logging;
pub mod scanner;
pub mod scheduler;
pub mod sync;
pub mod types;

// Re-export commonly used types
pub use config::SyncConfig;
pub use logging::SyncLogger;
pub use types::{FileEntry, FileTree, MiraError, SyncAction};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
