//! Cached listing of recent override actions.
//!
//! The cache exists so the operations view stays cheap to revisit; a
//! successful grant invalidates it, guaranteeing the next read shows
//! the new entry.

use std::sync::{Arc, RwLock};

use crate::domain::provisioning::AdminLogEntry;
use crate::ports::{AnalyticsReader, ApiError};

/// In-process cache of the admin log listing.
#[derive(Debug, Default)]
pub struct AdminLogCache {
    entries: RwLock<Option<Vec<AdminLogEntry>>>,
}

impl AdminLogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the cached listing; the next load refetches.
    pub fn invalidate(&self) {
        *self
            .entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }

    fn get(&self) -> Option<Vec<AdminLogEntry>> {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn put(&self, entries: Vec<AdminLogEntry>) {
        *self
            .entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(entries);
    }
}

/// Loads the override audit log, serving from cache when warm.
pub struct LoadAdminLogsHandler {
    reader: Arc<dyn AnalyticsReader>,
    cache: Arc<AdminLogCache>,
}

impl LoadAdminLogsHandler {
    pub fn new(reader: Arc<dyn AnalyticsReader>, cache: Arc<AdminLogCache>) -> Self {
        Self { reader, cache }
    }

    pub async fn handle(&self) -> Result<Vec<AdminLogEntry>, ApiError> {
        if let Some(cached) = self.cache.get() {
            return Ok(cached);
        }

        let entries = self.reader.admin_logs().await?;
        self.cache.put(entries.clone());
        Ok(entries)
    }
}
