//! Processing statistics tracking.
//!
//! This module provides thread-safe counting of terminal site statuses while a
//! batch is running, used for progress and end-of-run logging.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{ScrapeStatus, StatusCategory};

/// Thread-safe per-status counters.
///
/// Every `ScrapeStatus` variant gets an atomic counter at construction, so
/// sites finishing on different tasks can record their outcome without a lock.
/// Share it across tasks with `Arc`.
pub struct ProcessingStats {
    statuses: HashMap<ScrapeStatus, AtomicUsize>,
}

impl ProcessingStats {
    pub fn new() -> Self {
        let mut statuses = HashMap::new();
        for status in ScrapeStatus::iter() {
            statuses.insert(status, AtomicUsize::new(0));
        }
        ProcessingStats { statuses }
    }

    /// Records one site finishing with `status`.
    pub fn record(&self, status: ScrapeStatus) {
        if let Some(counter) = self.statuses.get(&status) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment status counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                status
            );
        }
    }

    pub fn get_count(&self, status: ScrapeStatus) -> usize {
        self.statuses
            .get(&status)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Sites finished so far, any status.
    pub fn total(&self) -> usize {
        self.statuses
            .values()
            .map(|c| c.load(Ordering::Relaxed))
            .sum()
    }

    /// Sites finished so far whose status falls in `category`.
    pub fn category_total(&self, category: StatusCategory) -> usize {
        ScrapeStatus::iter()
            .filter(|s| s.category() == category)
            .map(|s| self.get_count(s))
            .sum()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
