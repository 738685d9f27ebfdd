//! End-of-run statistics.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ProcessingStats, ScrapeStatus};

/// Logs the count of every status that occurred at least once.
pub fn print_status_statistics(stats: &ProcessingStats) {
    let total = stats.total();
    if total == 0 {
        return;
    }

    info!("Status Counts ({} total):", total);
    for status in ScrapeStatus::iter() {
        let count = stats.get_count(status);
        if count > 0 {
            info!("   {} ({}): {}", status.label(), status.code(), count);
        }
    }
}
