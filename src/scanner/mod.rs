//! Directory enumeration

mod walker;

pub use walker::scan_directory;
