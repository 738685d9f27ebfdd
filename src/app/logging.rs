//! Progress logging utilities.

use std::time::Instant;

use log::info;

use crate::error_handling::{ProcessingStats, StatusCategory};

/// Logs how many sites have finished and the current throughput.
///
/// # Arguments
///
/// * `start_time` - When the batch started
/// * `stats` - Live per-status counters
/// * `total_sites` - Number of rows in the batch
pub fn log_progress(start_time: Instant, stats: &ProcessingStats, total_sites: usize) {
    let completed = stats.total();
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {}/{} sites in {:.2} seconds (~{:.2} sites/sec; {} with contacts, {} failed)",
        completed,
        total_sites,
        elapsed_secs,
        rate,
        stats.category_total(StatusCategory::Succeeded),
        stats.category_total(StatusCategory::Failed),
    );
}
