//! contact_harvest library: website contact extraction for business listings
//!
//! Given a table of (business name, website) rows, this library visits each
//! website, collects contact emails and phone numbers, and reports a status
//! for every row.
//!
//! Pipeline, per row:
//! - `domain` normalizes the raw website string and expands it into URL variants
//! - `fetch` retrieves pages with retry, backoff and concurrency ceilings
//! - `contacts` extracts and validates emails and phone numbers from HTML
//! - `scrape` drives one site through fetch, extraction and contact-page fallback
//! - `batch` runs every row concurrently and writes the output table
//!
//! # Example
//!
//! ```no_run
//! use contact_harvest::{process_file, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: std::path::PathBuf::from("businesses.csv"),
//!     max_concurrent: 20,
//!     ..Default::default()
//! };
//!
//! let report = process_file(&config).await?;
//! println!("{}", report.summary_message());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

mod app;
pub mod batch;
pub mod config;
pub mod contacts;
pub mod domain;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod scrape;
pub mod tool;
mod utils;

// Re-export public API
pub use batch::{
    process_file, process_file_with, run_batch, run_batch_with, BatchReport, InputRow,
};
pub use config::{Config, LogFormat, LogLevel, StatusRetryPolicy};
pub use contacts::{extract, ContactRecord};
pub use domain::{normalize, variants_for, Domain};
pub use error_handling::{FetchError, ScrapeStatus};
pub use fetch::{FetchedPage, Fetcher, PageFetcher};
pub use scrape::{SiteResult, SiteScraper};
pub use tool::{ToolOutput, ToolRequest};
