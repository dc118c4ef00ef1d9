//! Per-file page cache status and the ordered collection the renderers consume.

mod list;

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use list::PcStatusList;

/// Page cache residency of a single file at the moment it was probed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PcStatus {
    /// Path or label the file was requested by.
    pub name: String,
    /// File size in bytes.
    pub size: i64,
    /// When the residency vector was sampled.
    pub timestamp: DateTime<Utc>,
    /// Last modification time of the file.
    pub mtime: DateTime<Utc>,
    /// Memory pages spanned by the file.
    pub pages: usize,
    /// Pages currently resident in the page cache.
    pub cached: usize,
    /// Pages not resident in the page cache.
    pub uncached: usize,
    /// `cached / pages * 100`.
    pub percent: f64,
    /// Residency of every page, `true` when cached. `None` once cleared.
    pub per_page_status: Option<Vec<bool>>,
}

impl PcStatus {
    /// Build a status from a per-page residency vector, deriving the counters.
    pub fn from_pages(
        name: impl Into<String>,
        size: i64,
        timestamp: DateTime<Utc>,
        mtime: DateTime<Utc>,
        per_page_status: Vec<bool>,
    ) -> Self {
        let pages = per_page_status.len();
        let cached = per_page_status.iter().filter(|resident| **resident).count();
        Self {
            name: name.into(),
            size,
            timestamp,
            mtime,
            pages,
            cached,
            uncached: pages - cached,
            percent: percent_of(cached, pages),
            per_page_status: Some(per_page_status),
        }
    }

    /// Approximate bytes in cache, derived from the percentage rather than
    /// from page accounting.
    pub fn cached_size(&self) -> i64 {
        (self.size as f64 * self.percent / 100.0).round() as i64
    }

    /// Drop the per-page vector to keep serialized output small.
    pub fn clear_per_page_status(&mut self) {
        self.per_page_status = None;
    }

    /// Replace the name with its final path component.
    pub fn use_basename(&mut self) {
        if let Some(base) = Path::new(&self.name).file_name() {
            self.name = base.to_string_lossy().into_owned();
        }
    }
}

/// `part / whole * 100`, NaN when `whole` is zero.
pub fn percent_of(part: usize, whole: usize) -> f64 {
    (part as f64 / whole as f64) * 100.0
}
