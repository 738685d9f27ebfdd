//! Error categorization and retry strategy.
//!
//! This module maps `reqwest` failures onto `FetchError` and builds the
//! backoff schedule used between attempts.

use std::error::Error as StdError;
use std::time::Duration;

use tokio_retry::strategy::ExponentialBackoff;

use super::types::FetchError;
use crate::utils::sanitize::sanitize_error_message;

/// Creates the exponential backoff schedule for one URL.
///
/// Yields `max_attempts - 1` delays of `base_delay_ms * factor^i`, so that
/// together with the initial attempt exactly `max_attempts` requests are made.
/// `ExponentialBackoff` raises its base to the attempt number, so the schedule
/// is built as `factor^(i+1) * (base_delay_ms / factor)`; a base that is not a
/// multiple of `factor` is rounded down to one.
///
/// # Arguments
///
/// * `base_delay_ms` - Delay before the second attempt
/// * `factor` - Multiplier applied after every further failure
/// * `max_attempts` - Total attempts, initial included
pub fn get_retry_strategy(
    base_delay_ms: u64,
    factor: u32,
    max_attempts: u32,
) -> impl Iterator<Item = Duration> {
    let factor = u64::from(factor.max(1));
    ExponentialBackoff::from_millis(factor)
        .factor(base_delay_ms / factor)
        .take(max_attempts.saturating_sub(1) as usize)
}

/// Categorizes a `reqwest::Error` into a `FetchError`.
///
/// Timeouts are recognised from the error kind. TLS and DNS failures surface
/// as connect errors whose cause chain names the problem, so the chain text is
/// inspected for those before falling back to the generic connect bucket.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The matching `FetchError`, with a sanitized detail string.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchError {
    if error.is_timeout() {
        return FetchError::Timeout;
    }

    let detail = root_cause(error);
    // Causes only; the top-level message embeds the URL
    let chain = source_chain_text(error).to_lowercase();

    if chain.contains("certificate")
        || chain.contains("tls")
        || chain.contains("ssl")
        || chain.contains("handshake")
    {
        return FetchError::Tls(detail);
    }

    if chain.contains("dns")
        || chain.contains("failed to lookup")
        || chain.contains("name or service not known")
        || chain.contains("no such host")
        || chain.contains("nodename nor servname")
    {
        return FetchError::Dns(detail);
    }

    if let Some(status) = error.status() {
        return FetchError::Status(status.as_u16());
    }

    if error.is_builder() {
        FetchError::InvalidUrl(detail)
    } else if error.is_connect() || error.is_request() || error.is_body() {
        FetchError::Connect(detail)
    } else {
        FetchError::Other(detail)
    }
}

/// Joins the messages of every cause below `error`.
fn source_chain_text(error: &(dyn StdError + 'static)) -> String {
    let mut parts = Vec::new();
    let mut source = error.source();
    while let Some(cause) = source {
        parts.push(cause.to_string());
        source = cause.source();
    }
    parts.join(": ")
}

/// The innermost cause's message, sanitized.
fn root_cause(error: &(dyn StdError + 'static)) -> String {
    let mut current = error;
    while let Some(next) = current.source() {
        current = next;
    }
    sanitize_error_message(&current.to_string())
}
