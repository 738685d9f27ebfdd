//! Page fetching with retry, backoff and concurrency ceilings.
//!
//! Key types:
//! - `PageFetcher` - The seam between site scraping and the network
//! - `Fetcher` - reqwest-backed implementation
//! - `FetchedPage` - Decoded body plus the post-redirect URL
//!
//! A request holds two permits while it is in flight: one from the global
//! semaphore shared by the whole batch and one from its host's semaphore.
//! Neither is held while sleeping between retries.

mod host_limit;

use std::future::Future;
use std::sync::Arc;

use reqwest::StatusCode;
use tokio::sync::Semaphore;
use tokio_retry::RetryIf;

use crate::config::{Config, StatusRetryPolicy};
use crate::error_handling::{
    categorize_reqwest_error, get_retry_strategy, FetchError, InitializationError,
};
use crate::initialization::{init_client, init_semaphore};

pub use host_limit::HostLimiter;

/// A successfully fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Response body, decoded as UTF-8 (invalid sequences replaced)
    pub body: String,
    /// URL after following redirects
    pub final_url: String,
}

/// Something that can fetch a page by URL.
///
/// Implementations own their retry policy; callers treat an `Err` as final.
pub trait PageFetcher: Send + Sync {
    /// Fetches `url`, failing with `FetchError::TooLarge` if the body exceeds
    /// `max_bytes`.
    fn fetch(
        &self,
        url: &str,
        max_bytes: u64,
    ) -> impl Future<Output = Result<FetchedPage, FetchError>> + Send;
}

/// Retry settings copied out of `Config`.
#[derive(Debug, Clone, Copy)]
struct RetrySettings {
    max_attempts: u32,
    base_delay_ms: u64,
    backoff_factor: u32,
    policy: StatusRetryPolicy,
}

/// reqwest-backed `PageFetcher`.
///
/// One `Fetcher` lives for one batch run; its connection pool and semaphores
/// are shared by every site task in that run.
#[derive(Debug)]
pub struct Fetcher {
    client: reqwest::Client,
    global: Arc<Semaphore>,
    hosts: HostLimiter,
    retry: RetrySettings,
}

impl Fetcher {
    /// Builds a fetcher with a fresh HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError` if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self::with_client(init_client(config)?, config))
    }

    /// Builds a fetcher around an existing client.
    pub fn with_client(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            global: init_semaphore(config.fetch_concurrency.max(1)),
            hosts: HostLimiter::new(config.per_host_connections),
            retry: RetrySettings {
                max_attempts: config.max_retries.max(1),
                base_delay_ms: config.retry_base_delay_ms,
                backoff_factor: config.retry_backoff_factor,
                policy: config.retry_statuses,
            },
        }
    }

    /// One request, no retries.
    async fn attempt(&self, url: &reqwest::Url, max_bytes: u64) -> Result<FetchedPage, FetchError> {
        let host = url.host_str().unwrap_or_default();
        // Host first, so a request queued behind a busy host holds no global slot
        let _host = self
            .hosts
            .acquire(host)
            .await
            .ok_or_else(|| FetchError::Other("fetcher shut down".to_string()))?;
        let _global = self
            .global
            .acquire()
            .await
            .map_err(|_| FetchError::Other("fetcher shut down".to_string()))?;

        let mut response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(&e))?;

        let status = response.status();
        if status != StatusCode::OK {
            log::debug!("{} returned {}", url, status);
            return Err(FetchError::Status(status.as_u16()));
        }

        if let Some(declared) = response.content_length() {
            if declared > max_bytes {
                return Err(FetchError::TooLarge {
                    size: declared,
                    limit: max_bytes,
                });
            }
        }

        let final_url = response.url().to_string();
        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| categorize_reqwest_error(&e))?
        {
            let size = (body.len() + chunk.len()) as u64;
            if size > max_bytes {
                return Err(FetchError::TooLarge {
                    size,
                    limit: max_bytes,
                });
            }
            body.extend_from_slice(&chunk);
        }

        Ok(FetchedPage {
            body: String::from_utf8_lossy(&body).into_owned(),
            final_url,
        })
    }
}

impl PageFetcher for Fetcher {
    async fn fetch(&self, url: &str, max_bytes: u64) -> Result<FetchedPage, FetchError> {
        let parsed =
            reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;
        let retry = self.retry;
        let strategy = get_retry_strategy(retry.base_delay_ms, retry.backoff_factor, retry.max_attempts);

        let result = RetryIf::start(
            strategy,
            || self.attempt(&parsed, max_bytes),
            |e: &FetchError| {
                let retriable = e.is_retriable(retry.policy);
                if retriable {
                    log::debug!("Retrying {}: {}", url, e);
                }
                retriable
            },
        )
        .await;

        if let Err(e) = &result {
            log::debug!("Giving up on {}: {}", url, e);
        }
        result
    }
}
