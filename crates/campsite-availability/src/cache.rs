use std::collections::HashMap;

use crate::types::{MonthKey, SiteAvailability};

/// In-memory cache of computed site summaries, one entry per
/// campground-month. Unbounded; lives for the session and is never evicted.
/// Expected cardinality is a handful of months across a few campgrounds.
#[derive(Debug, Default)]
pub struct SessionCache {
    entries: HashMap<MonthKey, Vec<SiteAvailability>>,
}

impl SessionCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached summaries for a campground-month, if present. An empty slice
    /// is a valid hit: months with no open sites are cached too.
    pub fn get(&self, key: &MonthKey) -> Option<&[SiteAvailability]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Store the summaries for a campground-month, replacing any previous
    /// entry.
    pub fn insert(&mut self, key: MonthKey, sites: Vec<SiteAvailability>) {
        self.entries.insert(key, sites);
    }

    /// Number of cached campground-months.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
