//! HTTP client initialization.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::ClientBuilder;

use crate::config::{Config, DEFAULT_REQUEST_HEADERS, MAX_REDIRECTS};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for every page fetch.
///
/// Creates a `reqwest::Client` configured with:
/// - Overall, connect and read timeouts from the config
/// - User-Agent and browser-like default headers
/// - Redirect following, up to `MAX_REDIRECTS` hops
/// - Certificate verification, unless `insecure` is set
///
/// # Errors
///
/// Returns `InitializationError::HeaderError` if a default header cannot be
/// encoded, or `InitializationError::HttpClientError` if the client fails to build.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .read_timeout(Duration::from_secs(config.read_timeout_seconds))
        .user_agent(config.user_agent.clone())
        .default_headers(default_headers()?)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .danger_accept_invalid_certs(config.insecure)
        .build()?;

    if config.insecure {
        log::warn!("TLS certificate verification is disabled");
    }
    Ok(client)
}

fn default_headers() -> Result<HeaderMap, InitializationError> {
    let mut headers = HeaderMap::with_capacity(DEFAULT_REQUEST_HEADERS.len());
    for (name, value) in DEFAULT_REQUEST_HEADERS {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| InitializationError::HeaderError(format!("{name}: {e}")))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| InitializationError::HeaderError(format!("{name}: {e}")))?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers_encode() {
        let headers = default_headers().expect("static headers should encode");
        assert_eq!(headers.len(), DEFAULT_REQUEST_HEADERS.len());
        assert!(headers.contains_key("accept-language"));
    }

    #[test]
    fn test_init_client_with_defaults() {
        assert!(init_client(&Config::default()).is_ok());
    }

    #[test]
    fn test_init_client_insecure() {
        let config = Config {
            insecure: true,
            ..Config::default()
        };
        assert!(init_client(&config).is_ok());
    }
}
