//! Aggregate batch outcome.

use std::path::PathBuf;

use serde::Serialize;

use crate::error_handling::{ScrapeStatus, StatusCategory};
use crate::scrape::SiteResult;

/// Results of a batch run.
///
/// `results` is in input order. The four category counts always add up to
/// `total_inputs`.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub total_inputs: usize,
    pub succeeded: usize,
    pub no_data_found: usize,
    pub failed: usize,
    pub skipped: usize,
    pub elapsed_seconds: f64,
    /// Where the output table was written, when one was
    pub output_path: Option<PathBuf>,
    pub results: Vec<SiteResult>,
}

impl BatchReport {
    /// Partitions `results` by status category.
    pub fn from_results(results: Vec<SiteResult>, elapsed_seconds: f64) -> Self {
        let count = |category: StatusCategory| {
            results
                .iter()
                .filter(|r| r.status.category() == category)
                .count()
        };
        Self {
            total_inputs: results.len(),
            succeeded: count(StatusCategory::Succeeded),
            no_data_found: count(StatusCategory::NoData),
            failed: count(StatusCategory::Failed),
            skipped: count(StatusCategory::Skipped),
            elapsed_seconds,
            output_path: None,
            results,
        }
    }

    /// Number of sites that ended in exactly `status`.
    pub fn count(&self, status: ScrapeStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }

    /// One-line human summary of the run.
    pub fn summary_message(&self) -> String {
        format!(
            "Processed {} websites in {:.2}s. Success: {}, No Data: {}, Failed: {}, Skipped: {}",
            self.total_inputs,
            self.elapsed_seconds,
            self.succeeded,
            self.no_data_found,
            self.failed,
            self.skipped
        )
    }
}
