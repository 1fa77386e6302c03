//! Shared test harness for E2E integration tests.
//!
//! Wraps a frozen Pune snapshot at a fixed clock plus a scratch directory
//! for catalog and config files, so tests exercise the same load paths the
//! binary uses.

#![allow(dead_code)]

use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

use gs_feed_store::{Catalog, FeedSnapshot};

/// End-to-end test harness.
pub struct FeedHarness {
    /// Fixed "now" used for catalog timestamps and relative ages.
    pub now: DateTime<Utc>,
    /// Snapshot of the built-in catalog at `now`.
    pub snapshot: FeedSnapshot,
    dir: TempDir,
}

impl FeedHarness {
    /// Harness over the built-in Pune catalog.
    pub fn with_pune() -> Self {
        let now = fixed_now();
        Self {
            now,
            snapshot: Catalog::pune(now).snapshot(now),
            dir: TempDir::new().unwrap(),
        }
    }

    /// Write `catalog` as JSON into the scratch dir and return its path.
    pub fn write_catalog(&self, catalog: &Catalog) -> PathBuf {
        let json = serde_json::to_string_pretty(catalog).unwrap();
        self.write_file("catalog.json", &json)
    }

    /// Write arbitrary contents into the scratch dir.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 9, 17, 12, 0, 0).unwrap()
}
