//! Website string normalization and URL variant generation.
//!
//! Business listings carry the website column in every shape imaginable:
//! bare hosts, full URLs with paths and ports, stray whitespace, non-ASCII
//! junk, or filler like "N/A". This module turns that into a canonical
//! lowercase host or a typed rejection.
//!
//! Key functions:
//! - `Domain::parse()` - Normalizes a raw website string, explaining rejections
//! - `normalize()` - Same, as an `Option`
//! - `variants_for()` - Expands a domain into the ordered URLs to probe

use std::fmt;

use thiserror::Error;

/// Values that mean "this row has no website" (compared case-insensitively).
pub const NO_WEBSITE_SENTINELS: &[&str] = &[
    "not available",
    "n/a",
    "na",
    "none",
    "no website",
    "unavailable",
    "missing",
    "null",
    "-",
];

/// Placeholder hosts that are never fetched.
pub const EXCLUDED_DOMAINS: &[&str] = &[
    "example.com",
    "example.org",
    "localhost",
    "test.com",
    "dummy.com",
    "placeholder.com",
];

const MIN_DOMAIN_LENGTH: usize = 4;

/// Why a raw website string did not yield a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainRejection {
    /// Empty or a "no website" filler value.
    #[error("No valid website provided")]
    NoWebsite,
    /// Something was supplied but it is not a plausible host.
    #[error("Invalid domain")]
    Malformed,
    /// A placeholder domain that is never scraped.
    #[error("Excluded placeholder domain")]
    Excluded,
}

/// A canonical lowercase host containing only `[a-z0-9.-]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain(String);

impl Domain {
    /// Normalizes a raw website string.
    ///
    /// Steps, in order:
    /// 1. Reject empty input and "no website" sentinels
    /// 2. Drop non-ASCII characters and all whitespace, lowercase
    /// 3. If a scheme is present, take the URL's host
    /// 4. Cut any path, query, fragment, or port
    /// 5. Keep only `[a-z0-9.-]`, trim outer dots
    /// 6. Require a dot, at least 4 characters, no empty labels
    /// 7. Reject placeholder domains, with or without a `www.` prefix
    ///
    /// # Errors
    ///
    /// Returns the `DomainRejection` describing the first failed step.
    pub fn parse(raw: &str) -> Result<Domain, DomainRejection> {
        if is_no_website(raw.trim()) {
            return Err(DomainRejection::NoWebsite);
        }

        let cleaned: String = raw
            .chars()
            .filter(|c| c.is_ascii() && !c.is_ascii_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        if is_no_website(&cleaned) {
            return Err(DomainRejection::NoWebsite);
        }

        let host_material = extract_host(&cleaned);
        let host = strip_path_and_port(&host_material);

        let filtered: String = host
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();
        let candidate = filtered.trim_matches('.');

        if !candidate.contains('.')
            || candidate.len() < MIN_DOMAIN_LENGTH
            || candidate.split('.').any(str::is_empty)
        {
            return Err(DomainRejection::Malformed);
        }

        let base = candidate.strip_prefix("www.").unwrap_or(candidate);
        if EXCLUDED_DOMAINS.contains(&candidate) || EXCLUDED_DOMAINS.contains(&base) {
            return Err(DomainRejection::Excluded);
        }

        Ok(Domain(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The domain without a leading `www.`.
    pub fn base(&self) -> &str {
        self.0.strip_prefix("www.").unwrap_or(&self.0)
    }

    /// The four URLs to probe for this domain, most preferred first.
    pub fn variants(&self) -> Vec<String> {
        variants_for(&self.0)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalizes a raw website string, discarding the rejection reason.
pub fn normalize(raw: &str) -> Option<Domain> {
    Domain::parse(raw).ok()
}

/// Expands a domain into its probe order.
///
/// Returns `https://www.<base>`, `https://<base>`, `http://www.<base>`,
/// `http://<base>`, where `<base>` is `domain` with a leading `www.` removed.
pub fn variants_for(domain: &str) -> Vec<String> {
    let base = domain.strip_prefix("www.").unwrap_or(domain);
    vec![
        format!("https://www.{base}"),
        format!("https://{base}"),
        format!("http://www.{base}"),
        format!("http://{base}"),
    ]
}

fn is_no_website(value: &str) -> bool {
    value.is_empty()
        || NO_WEBSITE_SENTINELS
            .iter()
            .any(|sentinel| value.eq_ignore_ascii_case(sentinel))
}

/// Returns the host of a scheme-prefixed value, or the value itself.
fn extract_host(value: &str) -> String {
    let Some(rest) = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
    else {
        return value.to_string();
    };

    match url::Url::parse(value) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.to_string(),
            None => rest.to_string(),
        },
        Err(_) => rest.to_string(),
    }
}

fn strip_path_and_port(value: &str) -> &str {
    let end = value.find(['/', '?', '#']).unwrap_or(value.len());
    let host = &value[..end];
    host.split(':').next().unwrap_or(host)
}
