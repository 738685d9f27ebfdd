//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration. `Config` derives `clap::Parser` for the binary and
//! implements `Default` for library callers who build it by hand.

use std::path::{Path, PathBuf};

use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};

use crate::config::constants::*;
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which non-200 HTTP statuses the fetcher retries.
///
/// Timeouts and connection failures are always retried; this only governs
/// responses that arrived with an unexpected status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatusRetryPolicy {
    /// Retry every non-200 status (default)
    All,
    /// Retry 5xx and 429 only; other statuses fail the variant immediately
    Server,
    /// Never retry on status; the first non-200 response is final
    None,
}

impl StatusRetryPolicy {
    /// Returns true if a response with `status` should be attempted again.
    pub fn should_retry(self, status: u16) -> bool {
        match self {
            StatusRetryPolicy::All => status != 200,
            StatusRetryPolicy::Server => status == 429 || (500..600).contains(&status),
            StatusRetryPolicy::None => false,
        }
    }
}

/// Harvest configuration.
///
/// This struct is parsed from the command line by the binary and can be
/// constructed programmatically by library callers.
///
/// # Examples
///
/// ```no_run
/// use contact_harvest::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("businesses.csv"),
///     max_concurrent: 20,
///     timeout_seconds: 15,
///     ..Default::default()
/// };
/// ```
///
/// ```bash
/// # Basic usage, writes businesses_email_phone.csv next to the input
/// contact_harvest businesses.csv
///
/// # Custom columns and a tighter timeout
/// contact_harvest leads.csv --title-column Name --website-column URL --timeout-seconds 10
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "contact_harvest",
    about = "Visits each business website in a CSV and collects contact emails and phone numbers."
)]
pub struct Config {
    /// CSV file with one business per row
    #[arg(value_parser)]
    pub input: PathBuf,

    /// Output CSV path (default: `<input stem>_email_phone.csv` next to the input)
    #[arg(long, short, value_parser)]
    pub output: Option<PathBuf>,

    /// Column holding the business label
    #[arg(long, default_value = DEFAULT_TITLE_COLUMN)]
    pub title_column: String,

    /// Column holding the website
    #[arg(long, default_value = DEFAULT_WEBSITE_COLUMN)]
    pub website_column: String,

    /// Per-request timeout in seconds (5-120)
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS,
          value_parser = clap::value_parser!(u64).range(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS))]
    pub timeout_seconds: u64,

    /// TCP connect timeout in seconds
    #[arg(long, default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS)]
    pub connect_timeout_seconds: u64,

    /// Socket read timeout in seconds
    #[arg(long, default_value_t = DEFAULT_READ_TIMEOUT_SECS)]
    pub read_timeout_seconds: u64,

    /// Attempts per URL variant, initial attempt included (1-5)
    #[arg(long, default_value_t = DEFAULT_MAX_RETRIES,
          value_parser = clap::value_parser!(u32).range(MIN_RETRIES as i64..=MAX_RETRIES as i64))]
    pub max_retries: u32,

    /// Site scrapes allowed to run at once (1-50)
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENT,
          value_parser = RangedU64ValueParser::<usize>::new().range(MIN_CONCURRENT as u64..=MAX_CONCURRENT as u64))]
    pub max_concurrent: usize,

    /// Global ceiling on in-flight HTTP requests
    #[arg(long, default_value_t = DEFAULT_FETCH_CONCURRENCY)]
    pub fetch_concurrency: usize,

    /// Ceiling on in-flight HTTP requests per host
    #[arg(long, default_value_t = DEFAULT_PER_HOST_CONNECTIONS)]
    pub per_host_connections: usize,

    /// First retry delay in milliseconds
    #[arg(long, default_value_t = RETRY_BASE_DELAY_MS)]
    pub retry_base_delay_ms: u64,

    /// Multiplier applied to the retry delay after each failed attempt
    #[arg(long, default_value_t = RETRY_BACKOFF_FACTOR)]
    pub retry_backoff_factor: u32,

    /// Which non-200 statuses are retried: all|server|none
    #[arg(long, value_enum, default_value_t = StatusRetryPolicy::All)]
    pub retry_statuses: StatusRetryPolicy,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Accept invalid TLS certificates
    #[arg(long)]
    pub insecure: bool,

    /// Also write the full batch report as JSON to this path
    #[arg(long, value_parser)]
    pub summary_json: Option<PathBuf>,

    /// Seconds between progress log lines
    #[arg(long, default_value_t = LOGGING_INTERVAL_SECS)]
    pub progress_interval_secs: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.csv"),
            output: None,
            title_column: DEFAULT_TITLE_COLUMN.to_string(),
            website_column: DEFAULT_WEBSITE_COLUMN.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            connect_timeout_seconds: DEFAULT_CONNECT_TIMEOUT_SECS,
            read_timeout_seconds: DEFAULT_READ_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
            per_host_connections: DEFAULT_PER_HOST_CONNECTIONS,
            retry_base_delay_ms: RETRY_BASE_DELAY_MS,
            retry_backoff_factor: RETRY_BACKOFF_FACTOR,
            retry_statuses: StatusRetryPolicy::All,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            insecure: false,
            summary_json: None,
            progress_interval_secs: LOGGING_INTERVAL_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks every knob against its documented range.
    ///
    /// Clap already enforces the ranges for command-line input; this covers
    /// configs assembled in code.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range(
            "timeout_seconds",
            self.timeout_seconds,
            MIN_TIMEOUT_SECS,
            MAX_TIMEOUT_SECS,
        )?;
        check_range(
            "max_retries",
            u64::from(self.max_retries),
            u64::from(MIN_RETRIES),
            u64::from(MAX_RETRIES),
        )?;
        check_range(
            "max_concurrent",
            self.max_concurrent as u64,
            MIN_CONCURRENT as u64,
            MAX_CONCURRENT as u64,
        )?;
        for (name, value) in [
            ("connect_timeout_seconds", self.connect_timeout_seconds),
            ("read_timeout_seconds", self.read_timeout_seconds),
            ("fetch_concurrency", self.fetch_concurrency as u64),
            ("per_host_connections", self.per_host_connections as u64),
            ("retry_backoff_factor", u64::from(self.retry_backoff_factor)),
        ] {
            if value == 0 {
                return Err(ConfigError::Zero(name));
            }
        }
        if self.title_column.trim().is_empty() {
            return Err(ConfigError::EmptyColumnName("title_column"));
        }
        if self.website_column.trim().is_empty() {
            return Err(ConfigError::EmptyColumnName("website_column"));
        }
        Ok(())
    }

    /// Resolves where the output CSV is written.
    ///
    /// Uses `output` when set, otherwise `<stem>_email_phone.csv` in the
    /// directory of the input file.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => default_output_path(&self.input),
        }
    }
}

/// Derives `<dir>/<stem>_email_phone.csv` from an input path.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let file_name = format!("{stem}{OUTPUT_FILE_SUFFIX}.csv");
    match input.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(file_name),
        _ => PathBuf::from(file_name),
    }
}

fn check_range(name: &'static str, value: u64, min: u64, max: u64) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}
