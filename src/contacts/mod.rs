//! Contact discovery: patterns, validation, the per-site record, and HTML
//! extraction.
//!
//! Key entry points:
//! - `extract()` - Contacts found in one HTML document
//! - `scan_page()` - Contacts plus candidate contact-page links, one parse
//! - `ContactRecord` - Validated, deduplicated emails and phones

mod extractor;
mod patterns;
mod record;
mod validate;

pub use extractor::{extract, find_contact_links, scan_page, PageScan, CONTACT_KEYWORDS};
pub use patterns::{find_email_candidates, find_phone_candidates};
pub use record::ContactRecord;
pub use validate::{
    normalize_phone, validate_email, validate_phone, EMAIL_FILE_EXTENSIONS, EMAIL_NOISE_DOMAINS,
};
