//! Error type definitions.
//!
//! This module defines the setup errors that abort a batch, the per-request
//! `FetchError`, and the terminal `ScrapeStatus` taxonomy every site result
//! carries.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::StatusRetryPolicy;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// A default header could not be encoded.
    #[error("Invalid default header {0}")]
    HeaderError(String),
}

/// A configuration value outside its accepted range.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("{0} must not be empty")]
    EmptyColumnName(&'static str),
}

/// Problems with the input table that abort the batch before any fetch.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Input file must be a CSV file: {}", .0.display())]
    NotCsv(PathBuf),

    #[error("Input file has no header row")]
    MissingHeader,

    /// Column {0} (1-based) has an empty header name.
    #[error("Column {0} has no header name")]
    UnnamedColumn(usize),

    #[error("Required column '{0}' not found in header")]
    MissingColumn(String),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Failure of a single HTTP fetch, after categorization.
///
/// Variants carry a short, sanitized detail string rather than the source
/// error so that the value can be cloned into results and compared in tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Timeout")]
    Timeout,

    #[error("SSL error: {0}")]
    Tls(String),

    #[error("DNS resolution failed: {0}")]
    Dns(String),

    #[error("Connection error: {0}")]
    Connect(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Page too large: {size} bytes exceeds {limit}")]
    TooLarge { size: u64, limit: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unexpected error: {0}")]
    Other(String),
}

impl FetchError {
    /// Determines if another attempt at the same URL could succeed.
    ///
    /// # Retriable Errors
    ///
    /// - Timeouts, connection failures, DNS and TLS failures
    /// - Non-200 statuses allowed by `policy`
    ///
    /// # Non-Retriable Errors
    ///
    /// - Oversized pages, malformed URLs, anything uncategorized
    pub fn is_retriable(&self, policy: StatusRetryPolicy) -> bool {
        match self {
            FetchError::Timeout
            | FetchError::Connect(_)
            | FetchError::Dns(_)
            | FetchError::Tls(_) => true,
            FetchError::Status(code) => policy.should_retry(*code),
            FetchError::TooLarge { .. } | FetchError::InvalidUrl(_) | FetchError::Other(_) => {
                false
            }
        }
    }

    /// The terminal status a site ends in when this was its last fetch error.
    pub fn site_status(&self) -> ScrapeStatus {
        match self {
            FetchError::Timeout => ScrapeStatus::FailedTimeout,
            FetchError::Tls(_) => ScrapeStatus::FailedSsl,
            FetchError::Dns(_) => ScrapeStatus::FailedDns,
            _ => ScrapeStatus::FailedConnection,
        }
    }
}

/// Terminal outcome of scraping one site.
///
/// Every input row ends in exactly one of these. Serialized with the stable
/// machine code; `label()` gives the human wording used in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScrapeStatus {
    Success,
    SuccessNoData,
    FailedConnection,
    FailedTimeout,
    FailedInvalidDomain,
    FailedSsl,
    FailedDns,
    FailedScraping,
    SkippedNoWebsite,
}

/// Bucket a status is counted under in the batch report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Succeeded,
    NoData,
    Failed,
    Skipped,
}

impl std::fmt::Display for ScrapeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl ScrapeStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ScrapeStatus::Success => "SUCCESS",
            ScrapeStatus::SuccessNoData => "SUCCESS_NO_DATA",
            ScrapeStatus::FailedConnection => "FAILED_CONNECTION",
            ScrapeStatus::FailedTimeout => "FAILED_TIMEOUT",
            ScrapeStatus::FailedInvalidDomain => "FAILED_INVALID_DOMAIN",
            ScrapeStatus::FailedSsl => "FAILED_SSL",
            ScrapeStatus::FailedDns => "FAILED_DNS",
            ScrapeStatus::FailedScraping => "FAILED_SCRAPING",
            ScrapeStatus::SkippedNoWebsite => "SKIPPED_NO_WEBSITE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScrapeStatus::Success => "Success",
            ScrapeStatus::SuccessNoData => "Success: No Contact Data",
            ScrapeStatus::FailedConnection => "Failed: Connection Error",
            ScrapeStatus::FailedTimeout => "Failed: Timeout",
            ScrapeStatus::FailedInvalidDomain => "Failed: Invalid Domain",
            ScrapeStatus::FailedSsl => "Failed: SSL Error",
            ScrapeStatus::FailedDns => "Failed: DNS Resolution",
            ScrapeStatus::FailedScraping => "Failed: Scraping Error",
            ScrapeStatus::SkippedNoWebsite => "Skipped: No Website Available",
        }
    }

    pub fn category(&self) -> StatusCategory {
        match self {
            ScrapeStatus::Success => StatusCategory::Succeeded,
            ScrapeStatus::SuccessNoData => StatusCategory::NoData,
            ScrapeStatus::SkippedNoWebsite => StatusCategory::Skipped,
            ScrapeStatus::FailedConnection
            | ScrapeStatus::FailedTimeout
            | ScrapeStatus::FailedInvalidDomain
            | ScrapeStatus::FailedSsl
            | ScrapeStatus::FailedDns
            | ScrapeStatus::FailedScraping => StatusCategory::Failed,
        }
    }
}
