use std::ops::{Deref, DerefMut};

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::PcStatus;

/// Narrowest name column, wide enough for the `Name` header.
const MIN_NAME_WIDTH: usize = 5;

/// Ordered collection of statuses, in probe order unless sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PcStatusList(Vec<PcStatus>);

impl PcStatusList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Order by cached pages, most cached first. Ties keep their input order.
    pub fn sort_by_cached(&mut self) {
        self.0.sort_by(|a, b| b.cached.cmp(&a.cached));
    }

    /// Display width of the longest name, never below [`MIN_NAME_WIDTH`].
    pub fn max_name_width(&self) -> usize {
        self.0
            .iter()
            .map(|pcs| pcs.name.width())
            .max()
            .unwrap_or(0)
            .max(MIN_NAME_WIDTH)
    }

    pub fn clear_per_page_status(&mut self) {
        self.0.iter_mut().for_each(PcStatus::clear_per_page_status);
    }

    pub fn use_basenames(&mut self) {
        self.0.iter_mut().for_each(PcStatus::use_basename);
    }
}

impl From<Vec<PcStatus>> for PcStatusList {
    fn from(stats: Vec<PcStatus>) -> Self {
        Self(stats)
    }
}

impl Deref for PcStatusList {
    type Target = Vec<PcStatus>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PcStatusList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
