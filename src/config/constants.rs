//! Configuration constants.
//!
//! This module defines the defaults and hard limits used throughout the pipeline:
//! request timeouts, retry/backoff parameters, concurrency ceilings, page size
//! limits, and output formatting caps.

// Input columns
/// Default name of the column holding the business label
pub const DEFAULT_TITLE_COLUMN: &str = "Title";
/// Default name of the column holding the raw website string
pub const DEFAULT_WEBSITE_COLUMN: &str = "Website";

// Request timeouts
/// Overall per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Lowest accepted per-request timeout
pub const MIN_TIMEOUT_SECS: u64 = 5;
/// Highest accepted per-request timeout
pub const MAX_TIMEOUT_SECS: u64 = 120;
/// TCP connect timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Socket read timeout in seconds
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 20;

// Retry policy
/// Attempts per URL variant (initial attempt included)
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const MIN_RETRIES: u32 = 1;
pub const MAX_RETRIES: u32 = 5;
/// First backoff delay in milliseconds
pub const RETRY_BASE_DELAY_MS: u64 = 1000;
/// Multiplier applied to the delay after every failed attempt
pub const RETRY_BACKOFF_FACTOR: u32 = 2;

// Concurrency
/// Site scrapes allowed inside their fetch+extract section at once
pub const DEFAULT_MAX_CONCURRENT: usize = 10;
pub const MIN_CONCURRENT: usize = 1;
pub const MAX_CONCURRENT: usize = 50;
/// Global ceiling on in-flight HTTP requests across the whole batch
pub const DEFAULT_FETCH_CONCURRENCY: usize = 10;
/// Ceiling on in-flight HTTP requests to any single host
pub const DEFAULT_PER_HOST_CONNECTIONS: usize = 5;

// Response and body size limits
/// Maximum body size for a site's primary page (10MB)
pub const MAX_PAGE_SIZE: u64 = 10 * 1024 * 1024;
/// Maximum body size for a contact sub-page (5MB)
pub const MAX_CONTACT_PAGE_SIZE: u64 = 5 * 1024 * 1024;
/// Redirect hops followed before giving up
pub const MAX_REDIRECTS: usize = 10;

// Extraction
/// Contact sub-pages visited when the primary page yields nothing
pub const MAX_CONTACT_PAGES: usize = 2;
/// Characters of diagnostic text kept on a failed site result
pub const MAX_ERROR_DETAIL_LENGTH: usize = 100;

// Output
/// Emails/phones written per output cell
pub const MAX_OUTPUT_ENTRIES: usize = 5;
/// Placeholder written for an absent URL or an empty contact list
pub const NOT_AVAILABLE: &str = "N/A";
/// Suffix appended to the input file stem to name the default output file
pub const OUTPUT_FILE_SUFFIX: &str = "_email_phone";
/// Output header row, in column order
pub const OUTPUT_COLUMNS: [&str; 4] = ["Title", "Working_URL", "Email", "Phone"];

// Logging
/// Seconds between progress log lines
pub const LOGGING_INTERVAL_SECS: u64 = 5;

/// Default User-Agent string for HTTP requests.
///
/// A desktop Chrome string. Many small-business sites sit behind hosting
/// providers that reject obvious bot agents, so a browser-like value gets
/// noticeably more pages through. Override with `--user-agent`.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
