//! I/O adapters for sentinel commands.

pub mod git;
pub mod init;
pub mod rules_store;
pub mod settings;
