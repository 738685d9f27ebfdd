//! Error handling and processing statistics.
//!
//! This module provides:
//! - Setup error types (`InitializationError`, `ConfigError`, `InputError`)
//! - `FetchError` and its categorization from `reqwest` failures
//! - The `ScrapeStatus` taxonomy every site result ends in
//! - Retry backoff schedule
//! - Per-status processing statistics
//!
//! Setup errors abort a batch. Everything that goes wrong for a single site is
//! folded into that site's `ScrapeStatus` instead.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, get_retry_strategy};
pub use stats::ProcessingStats;
pub use types::{
    ConfigError, FetchError, InitializationError, InputError, ScrapeStatus, StatusCategory,
};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for status in ScrapeStatus::iter() {
            assert_eq!(stats.get_count(status), 0);
        }
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_processing_stats_record() {
        let stats = ProcessingStats::new();
        stats.record(ScrapeStatus::Success);
        stats.record(ScrapeStatus::Success);
        stats.record(ScrapeStatus::FailedTimeout);
        stats.record(ScrapeStatus::FailedDns);
        stats.record(ScrapeStatus::SkippedNoWebsite);

        assert_eq!(stats.get_count(ScrapeStatus::Success), 2);
        assert_eq!(stats.total(), 5);
        assert_eq!(stats.category_total(StatusCategory::Succeeded), 2);
        assert_eq!(stats.category_total(StatusCategory::Failed), 2);
        assert_eq!(stats.category_total(StatusCategory::Skipped), 1);
        assert_eq!(stats.category_total(StatusCategory::NoData), 0);
    }

    #[test]
    fn test_every_status_has_one_category() {
        let stats = ProcessingStats::new();
        for status in ScrapeStatus::iter() {
            stats.record(status);
        }
        let by_category = [
            StatusCategory::Succeeded,
            StatusCategory::NoData,
            StatusCategory::Failed,
            StatusCategory::Skipped,
        ]
        .iter()
        .map(|c| stats.category_total(*c))
        .sum::<usize>();
        assert_eq!(by_category, stats.total());
    }

    #[test]
    fn test_status_codes_and_labels() {
        assert_eq!(ScrapeStatus::FailedTimeout.code(), "FAILED_TIMEOUT");
        assert_eq!(ScrapeStatus::FailedTimeout.label(), "Failed: Timeout");
        assert_eq!(
            ScrapeStatus::SkippedNoWebsite.to_string(),
            "Skipped: No Website Available"
        );
        assert_eq!(
            serde_json::to_string(&ScrapeStatus::SuccessNoData).unwrap(),
            "\"SUCCESS_NO_DATA\""
        );
    }
}
