//! Email and phone validation.
//!
//! Candidates that fail validation are dropped silently; these functions
//! return the normalized value to store, or `None`.

use super::patterns::{EMAIL_ADDRESS_RE, REPEATED_MOTIF_RE};

/// Longest email address accepted (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MIN_PHONE_LENGTH: usize = 10;
pub const MAX_PHONE_LENGTH: usize = 15;

/// Domains whose addresses are tracking, template or documentation noise.
/// Subdomains are excluded too (`o123.ingest.sentry.io`).
pub const EMAIL_NOISE_DOMAINS: &[&str] = &[
    "example.com",
    "sentry.io",
    "schema.org",
    "placeholder.com",
    "yourdomain.com",
    "yourcompany.com",
    "domain.com",
];

/// Asset file extensions that look like a TLD in names such as `logo@2x.png`.
pub const EMAIL_FILE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "svg", "webp", "bmp", "ico", "tif", "tiff", "avif", "css",
    "js", "json", "pdf", "mp4", "webm", "woff", "woff2",
];

/// Validates an email candidate and returns it lower-cased.
///
/// Rejects empty or over-long values, anything that is not a single
/// `local@domain.tld` address, addresses at a noise domain, and asset file
/// names whose final label is a file extension.
pub fn validate_email(raw: &str) -> Option<String> {
    let email = raw.trim().trim_matches(|c| c == '<' || c == '>').to_lowercase();
    if email.is_empty() || email.len() > MAX_EMAIL_LENGTH {
        return None;
    }

    let (local, domain) = email.split_once('@')?;
    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return None;
    }
    if is_noise_domain(domain) || is_file_name(domain) {
        return None;
    }
    if !EMAIL_ADDRESS_RE.is_match(&email) {
        return None;
    }
    Some(email)
}

fn is_noise_domain(domain: &str) -> bool {
    EMAIL_NOISE_DOMAINS.iter().any(|noise| {
        domain == *noise
            || domain
                .strip_suffix(noise)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

fn is_file_name(domain: &str) -> bool {
    domain
        .rsplit('.')
        .next()
        .is_some_and(|label| EMAIL_FILE_EXTENSIONS.contains(&label))
}

/// Strips a phone candidate to digits, keeping a leading `+`.
///
/// The `+` survives only if it precedes the first digit.
pub fn normalize_phone(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() {
            normalized.push(c);
        } else if c == '+' && normalized.is_empty() {
            normalized.push(c);
        }
    }
    normalized
}

/// Validates a phone candidate and returns its normalized form.
///
/// The normalized value must be 10-15 characters long and its digits must not
/// be filler: a single repeated digit, one of the motifs `123`, `111`, `000`,
/// `999` repeated, or a straight ascending/descending run like `1234567890`.
pub fn validate_phone(raw: &str) -> Option<String> {
    let normalized = normalize_phone(raw);
    if normalized.len() < MIN_PHONE_LENGTH || normalized.len() > MAX_PHONE_LENGTH {
        return None;
    }

    let digits = normalized.trim_start_matches('+');
    if digits.is_empty()
        || is_single_repeated_digit(digits)
        || REPEATED_MOTIF_RE.is_match(digits)
        || is_sequential_run(digits)
    {
        return None;
    }
    Some(normalized)
}

fn is_single_repeated_digit(digits: &str) -> bool {
    let mut bytes = digits.bytes();
    match bytes.next() {
        Some(first) => bytes.all(|b| b == first),
        None => false,
    }
}

/// True for runs where every digit is one more (or one less) than the last, mod 10.
fn is_sequential_run(digits: &str) -> bool {
    let values: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();
    if values.len() < 2 {
        return false;
    }
    let ascending = values.windows(2).all(|w| w[1] == (w[0] + 1) % 10);
    let descending = values.windows(2).all(|w| w[1] == (w[0] + 9) % 10);
    ascending || descending
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_lowercases() {
        assert_eq!(
            validate_email("  Info@Acme-Widgets.CO.UK "),
            Some("info@acme-widgets.co.uk".to_string())
        );
    }

    #[test]
    fn test_validate_email_rejects_noise_domains() {
        for raw in [
            "john@example.com",
            "abc123@o4505.ingest.sentry.io",
            "x@schema.org",
            "name@yourdomain.com",
            "you@domain.com",
        ] {
            assert_eq!(validate_email(raw), None, "{raw} should be noise");
        }
    }

    #[test]
    fn test_validate_email_allows_lookalike_domains() {
        assert!(validate_email("hello@mydomain.com").is_some());
        assert!(validate_email("team@sentry.io.example-biz.net").is_some());
    }

    #[test]
    fn test_validate_email_rejects_asset_file_names() {
        for raw in [
            "logo@2x.png",
            "banner-hero@3x.jpg",
            "icon@2x.JPEG",
            "sprite@1.5x.webp",
            "bundle@v2.min.js",
            "theme@4.0.css",
        ] {
            assert_eq!(validate_email(raw), None, "{raw} is a file name");
        }
        assert!(validate_email("studio@pngworks.com").is_some());
        assert!(validate_email("hello@acme.js.org").is_some());
    }

    #[test]
    fn test_validate_email_structure() {
        assert_eq!(validate_email(""), None);
        assert_eq!(validate_email("no-at-sign.com"), None);
        assert_eq!(validate_email("two@@acme.com"), None);
        assert_eq!(validate_email("a@b@acme.com"), None);
        assert_eq!(validate_email("@acme.com"), None);
        assert_eq!(validate_email("user@localhost"), None);
        assert_eq!(validate_email("user@acme.c"), None);
    }

    #[test]
    fn test_validate_email_length_limit() {
        let long = format!("{}@acme.com", "a".repeat(250));
        assert_eq!(validate_email(&long), None);
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("+1 (555) 234-5678"), "+15552345678");
        assert_eq!(normalize_phone("555.234.5678"), "5552345678");
        assert_eq!(normalize_phone("Tel 555-234-5678 +"), "5552345678");
    }

    #[test]
    fn test_validate_phone_length_bounds() {
        assert_eq!(validate_phone("555-2345"), None);
        assert_eq!(
            validate_phone("(555) 234-5678"),
            Some("5552345678".to_string())
        );
        assert_eq!(
            validate_phone("+44 20 7946 0958"),
            Some("+442079460958".to_string())
        );
        assert_eq!(validate_phone("1234 5678 9012 3456"), None);
    }

    #[test]
    fn test_validate_phone_rejects_degenerate_sequences() {
        for raw in [
            "0000000000",
            "1111111111",
            "7777777777",
            "1234567890",
            "0987654321",
            "123123123123",
            "999999999999",
            "111000999123",
            "+0000000000",
        ] {
            assert_eq!(validate_phone(raw), None, "{raw} should be rejected");
        }
    }

    #[test]
    fn test_validate_phone_keeps_unlisted_motifs() {
        // Only the listed motifs are treated as filler
        assert_eq!(
            validate_phone("121212121212"),
            Some("121212121212".to_string())
        );
    }
}
