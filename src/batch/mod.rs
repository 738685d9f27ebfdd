//! Batch processing: CSV in, one scrape task per row, CSV and report out.
//!
//! Key entry points:
//! - `process_file()` - Whole pipeline driven by a `Config`
//! - `run_batch()` - Scrape rows already in memory with the HTTP fetcher
//! - `run_batch_with()` - Same, with any `PageFetcher`

pub mod input;
pub mod output;
mod report;

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::info;
use tokio_util::sync::CancellationToken;

use crate::app::{log_progress, print_status_statistics, shutdown_gracefully};
use crate::config::Config;
use crate::error_handling::{InitializationError, ProcessingStats, ScrapeStatus};
use crate::fetch::{Fetcher, PageFetcher};
use crate::initialization::init_semaphore;
use crate::scrape::{SiteResult, SiteScraper};
use crate::utils::panic_message;

pub use input::{read_rows, InputRow};
pub use output::write_results;
pub use report::BatchReport;

/// Runs the whole pipeline for `config.input`.
///
/// Validates the config, loads the input table, scrapes every row, writes the
/// output table (and the JSON report, if requested) and returns the report.
///
/// # Errors
///
/// Fails only on setup problems: invalid config, unreadable or malformed
/// input, HTTP client construction, or output that cannot be written. Per-site
/// failures are reported in the returned `BatchReport`.
///
/// # Example
///
/// ```no_run
/// use contact_harvest::{process_file, Config};
/// use std::path::PathBuf;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     input: PathBuf::from("businesses.csv"),
///     ..Default::default()
/// };
/// let report = process_file(&config).await?;
/// println!("{}", report.summary_message());
/// # Ok(())
/// # }
/// ```
pub async fn process_file(config: &Config) -> Result<BatchReport> {
    config.validate().context("Invalid configuration")?;
    let fetcher = Fetcher::new(config).context("Failed to initialize HTTP client")?;
    process_file_with(config, Arc::new(fetcher)).await
}

/// `process_file` with a caller-supplied fetcher.
///
/// # Errors
///
/// Same as `process_file`, minus HTTP client construction.
pub async fn process_file_with<F>(config: &Config, fetcher: Arc<F>) -> Result<BatchReport>
where
    F: PageFetcher + 'static,
{
    config.validate().context("Invalid configuration")?;

    let rows = read_rows(&config.input, &config.title_column, &config.website_column)
        .with_context(|| format!("Failed to load input file {}", config.input.display()))?;
    info!(
        "Loaded {} rows from {}",
        rows.len(),
        config.input.display()
    );

    let mut report = run_batch_with(rows, config, fetcher).await;

    let output_path = config.output_path();
    write_results(&output_path, &report.results)
        .with_context(|| format!("Failed to write output file {}", output_path.display()))?;
    info!("Results written to {}", output_path.display());
    report.output_path = Some(output_path);

    if let Some(summary_path) = &config.summary_json {
        write_summary_json(summary_path, &report)?;
    }

    info!("{}", report.summary_message());
    Ok(report)
}

fn write_summary_json(path: &Path, report: &BatchReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize batch report")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write summary file {}", path.display()))?;
    info!("Summary written to {}", path.display());
    Ok(())
}

/// Scrapes `rows` with a reqwest-backed fetcher built from `config`.
///
/// # Errors
///
/// Returns `InitializationError` if the HTTP client cannot be built.
pub async fn run_batch(
    rows: Vec<InputRow>,
    config: &Config,
) -> Result<BatchReport, InitializationError> {
    let fetcher = Fetcher::new(config)?;
    Ok(run_batch_with(rows, config, Arc::new(fetcher)).await)
}

/// Scrapes every row concurrently and returns results in input order.
///
/// One task is spawned per row; at most `config.max_concurrent` of them scrape
/// at once. A task that panics is reported as `FAILED_SCRAPING` for its row
/// and does not affect the others.
pub async fn run_batch_with<F>(rows: Vec<InputRow>, config: &Config, fetcher: Arc<F>) -> BatchReport
where
    F: PageFetcher + 'static,
{
    let start_time = Instant::now();
    let total = rows.len();
    info!(
        "Scraping {} sites ({} at a time)",
        total, config.max_concurrent
    );

    let stats = Arc::new(ProcessingStats::new());
    let semaphore = init_semaphore(config.max_concurrent.max(1));
    let scraper = SiteScraper::new(fetcher);

    let cancel = CancellationToken::new();
    let logging_task = (config.progress_interval_secs > 0).then(|| {
        let cancel = cancel.child_token();
        let stats = Arc::clone(&stats);
        let interval = Duration::from_secs(config.progress_interval_secs);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // First tick completes immediately
            ticker.tick().await;
            loop {
                tokio::select! {
                    _ = ticker.tick() => log_progress(start_time, &stats, total),
                    _ = cancel.cancelled() => break,
                }
            }
        })
    });

    let mut tasks = FuturesUnordered::new();
    for (index, row) in rows.iter().enumerate() {
        let scraper = scraper.clone();
        let semaphore = Arc::clone(&semaphore);
        let stats = Arc::clone(&stats);
        let row = row.clone();

        let handle = tokio::spawn(async move {
            let _permit = semaphore.acquire_owned().await.ok();
            let result = scraper.scrape(&row.label, &row.website).await;
            stats.record(result.status);
            result
        });
        tasks.push(async move { (index, handle.await) });
    }

    let mut slots: Vec<Option<SiteResult>> = vec![None; total];
    while let Some((index, joined)) = tasks.next().await {
        let result = match joined {
            Ok(result) => result,
            Err(e) => {
                let row = &rows[index];
                let detail = if e.is_panic() {
                    panic_message(e.into_panic().as_ref())
                } else {
                    e.to_string()
                };
                log::error!("{}: scrape task failed: {}", row.label, detail);
                stats.record(ScrapeStatus::FailedScraping);
                SiteResult::unreachable(
                    &row.label,
                    &row.website,
                    ScrapeStatus::FailedScraping,
                    &detail,
                )
            }
        };
        slots[index] = Some(result);
    }

    shutdown_gracefully(cancel, logging_task).await;

    let results: Vec<SiteResult> = slots
        .into_iter()
        .zip(&rows)
        .map(|(slot, row)| {
            slot.unwrap_or_else(|| {
                SiteResult::unreachable(
                    &row.label,
                    &row.website,
                    ScrapeStatus::FailedScraping,
                    "task produced no result",
                )
            })
        })
        .collect();

    print_status_statistics(&stats);
    BatchReport::from_results(results, start_time.elapsed().as_secs_f64())
}
