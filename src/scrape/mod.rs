//! Per-site scraping.
//!
//! A site moves through these steps, each of which can end it:
//!
//! 1. Normalize the website string (`SKIPPED_NO_WEBSITE`, `FAILED_INVALID_DOMAIN`)
//! 2. Fetch URL variants in order until one answers 200 (`FAILED_*` from the last error)
//! 3. Extract contacts from the page (`FAILED_SCRAPING` if extraction panics)
//! 4. If nothing was found, fetch up to two contact-looking sub-pages
//! 5. `SUCCESS` or `SUCCESS_NO_DATA`
//!
//! No step retries; retry policy lives in the fetcher.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use serde::Serialize;

use crate::config::{MAX_CONTACT_PAGE_SIZE, MAX_ERROR_DETAIL_LENGTH, MAX_PAGE_SIZE, NOT_AVAILABLE};
use crate::contacts::{scan_page, ContactRecord, PageScan};
use crate::domain::{Domain, DomainRejection};
use crate::error_handling::{FetchError, ScrapeStatus};
use crate::fetch::{FetchedPage, PageFetcher};
use crate::utils::{panic_message, sanitize_and_truncate_error_message};

/// Outcome of scraping one site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteResult {
    /// Caller-supplied identifier, usually the business name
    pub label: String,
    /// The website string exactly as it appeared in the input
    pub input_website: String,
    /// Post-redirect URL of the page that answered, if any did
    pub resolved_url: Option<String>,
    pub contacts: ContactRecord,
    pub status: ScrapeStatus,
    /// Short, sanitized diagnostic for failed or skipped sites
    pub error_detail: Option<String>,
}

impl SiteResult {
    /// A result that never reached a working page.
    pub fn unreachable(
        label: &str,
        input_website: &str,
        status: ScrapeStatus,
        detail: &str,
    ) -> Self {
        Self {
            label: label.to_string(),
            input_website: input_website.to_string(),
            resolved_url: None,
            contacts: ContactRecord::new(),
            status,
            error_detail: Some(sanitize_and_truncate_error_message(
                detail,
                MAX_ERROR_DETAIL_LENGTH,
            )),
        }
    }

    /// The `Working_URL` output cell.
    pub fn working_url_cell(&self) -> &str {
        self.resolved_url.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

/// Scrapes sites through a shared `PageFetcher`.
///
/// Cloning is cheap; clones share the fetcher.
#[derive(Debug)]
pub struct SiteScraper<F> {
    fetcher: Arc<F>,
}

impl<F> Clone for SiteScraper<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
        }
    }
}

impl<F: PageFetcher> SiteScraper<F> {
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    /// Scrapes one site. Never fails; every outcome is a `SiteResult`.
    pub async fn scrape(&self, label: &str, website: &str) -> SiteResult {
        let domain = match Domain::parse(website) {
            Ok(domain) => domain,
            Err(rejection) => {
                let status = match rejection {
                    DomainRejection::NoWebsite => ScrapeStatus::SkippedNoWebsite,
                    DomainRejection::Malformed | DomainRejection::Excluded => {
                        ScrapeStatus::FailedInvalidDomain
                    }
                };
                log::debug!("{}: {} ({:?})", label, rejection, website);
                return SiteResult::unreachable(label, website, status, &rejection.to_string());
            }
        };

        let page = match self.fetch_first_variant(&domain).await {
            Ok(page) => page,
            Err(e) => {
                log::info!("{}: all URL variants of {} failed: {}", label, domain, e);
                return SiteResult::unreachable(label, website, e.site_status(), &e.to_string());
            }
        };

        let mut result = SiteResult {
            label: label.to_string(),
            input_website: website.to_string(),
            resolved_url: Some(page.final_url.clone()),
            contacts: ContactRecord::new(),
            status: ScrapeStatus::SuccessNoData,
            error_detail: None,
        };

        let scan = match guarded_scan(&page) {
            Ok(scan) => scan,
            Err(detail) => {
                log::warn!("{}: extraction failed on {}: {}", label, page.final_url, detail);
                result.status = ScrapeStatus::FailedScraping;
                result.error_detail = Some(detail);
                return result;
            }
        };

        result.contacts = if scan.contacts.is_empty() {
            self.contact_page_fallback(label, &scan.contact_links).await
        } else {
            scan.contacts
        };

        if !result.contacts.is_empty() {
            result.status = ScrapeStatus::Success;
        }
        log::debug!(
            "{}: {} ({} emails, {} phones)",
            label,
            result.status.code(),
            result.contacts.emails().len(),
            result.contacts.phones().len()
        );
        result
    }

    /// Tries each URL variant in order; the first page wins.
    async fn fetch_first_variant(&self, domain: &Domain) -> Result<FetchedPage, FetchError> {
        let mut last_error = FetchError::Other(format!("no URL variants for {domain}"));
        for url in domain.variants() {
            match self.fetcher.fetch(&url, MAX_PAGE_SIZE).await {
                Ok(page) => return Ok(page),
                Err(e) => {
                    log::debug!("Variant {} failed: {}", url, e);
                    last_error = e;
                }
            }
        }
        Err(last_error)
    }

    /// Fetches candidate contact pages in order and keeps the first that
    /// yields anything. Sub-page failures are not site failures.
    async fn contact_page_fallback(&self, label: &str, links: &[String]) -> ContactRecord {
        for link in links {
            let page = match self.fetcher.fetch(link, MAX_CONTACT_PAGE_SIZE).await {
                Ok(page) => page,
                Err(e) => {
                    log::debug!("{}: contact page {} failed: {}", label, link, e);
                    continue;
                }
            };
            match guarded_scan(&page) {
                Ok(scan) if !scan.contacts.is_empty() => {
                    log::debug!("{}: contacts found on {}", label, link);
                    return scan.contacts;
                }
                Ok(_) => {}
                Err(detail) => log::debug!("{}: extraction failed on {}: {}", label, link, detail),
            }
        }
        ContactRecord::new()
    }
}

/// Runs extraction, turning a panic into a truncated diagnostic.
fn guarded_scan(page: &FetchedPage) -> Result<PageScan, String> {
    catch_unwind(AssertUnwindSafe(|| scan_page(&page.body, &page.final_url))).map_err(|payload| {
        sanitize_and_truncate_error_message(
            &panic_message(payload.as_ref()),
            MAX_ERROR_DETAIL_LENGTH,
        )
    })
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
