//! Default request headers.
//!
//! Sent with every request so that fetches look like an ordinary browser
//! navigation. `User-Agent` is configured separately and `Accept-Encoding`
//! is managed by the HTTP client's decompression support.

/// Accept header of a top-level browser navigation
pub const HEADER_ACCEPT: (&str, &str) = (
    "Accept",
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
);
/// Preferred response language
pub const HEADER_ACCEPT_LANGUAGE: (&str, &str) = ("Accept-Language", "en-US,en;q=0.5");
pub const HEADER_UPGRADE_INSECURE_REQUESTS: (&str, &str) = ("Upgrade-Insecure-Requests", "1");
pub const HEADER_SEC_FETCH_DEST: (&str, &str) = ("Sec-Fetch-Dest", "document");
pub const HEADER_SEC_FETCH_MODE: (&str, &str) = ("Sec-Fetch-Mode", "navigate");
pub const HEADER_SEC_FETCH_SITE: (&str, &str) = ("Sec-Fetch-Site", "none");
pub const HEADER_CACHE_CONTROL: (&str, &str) = ("Cache-Control", "max-age=0");

/// Headers attached to every outgoing request.
/// To add/remove headers, modify this array.
pub const DEFAULT_REQUEST_HEADERS: &[(&str, &str)] = &[
    HEADER_ACCEPT,
    HEADER_ACCEPT_LANGUAGE,
    HEADER_UPGRADE_INSECURE_REQUESTS,
    HEADER_SEC_FETCH_DEST,
    HEADER_SEC_FETCH_MODE,
    HEADER_SEC_FETCH_SITE,
    HEADER_CACHE_CONTROL,
];
