//! Core type definitions for mira

mod action;
mod entry;
mod error;
mod tree;

pub use action::SyncAction;
pub use entry::FileEntry;
pub use error::MiraError;
pub use tree::FileTree;
