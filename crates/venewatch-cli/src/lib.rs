//! venewatch-cli library root.
//!
//! Re-exports the entry form and mail configuration modules so that
//! integration tests can exercise them directly without going through the
//! interactive session loop.

pub mod config;
pub mod entry;
