//! GatiSutra dashboard feed: library crate behind the `gs-dashboard` binary.
//!
//! Exposes configuration and report assembly so `gs-e2e-tests` can drive
//! the same code paths the binary uses.

pub mod config;
pub mod report;
