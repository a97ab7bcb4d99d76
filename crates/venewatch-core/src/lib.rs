//! venewatch-core
//!
//! Pure domain types for Venetoclax side-effect surveillance: the fixed
//! parameter table, daily measurement records, and the append-only session
//! history. No I/O — this is the shared vocabulary of the venewatch system.

pub mod models;
