//! Phone and email recognition patterns.
//!
//! The phone list is deliberately broad and overlapping: several patterns will
//! often match the same number in different shapes. Candidates are normalized
//! to digits before they reach a `ContactRecord`, so overlap collapses there.

use regex::Regex;
use std::sync::LazyLock;

/// Phone number shapes, most specific first.
const PHONE_PATTERNS: &[&str] = &[
    // International with optional bracketed area code: +49 (0)30 1234 5678
    r"\+\d{1,4}[\s.-]?\(?\d{1,5}\)?[\s.-]?\d{1,5}[\s.-]?\d{1,5}[\s.-]?\d{0,5}",
    // US/Canada: (555) 234-5678, 555.234.5678
    r"\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}",
    // UK: +44 20 7946 0958
    r"\+?44[\s.-]?\d{2,4}[\s.-]?\d{3,4}[\s.-]?\d{3,4}",
    // India: +91 9876543210
    r"\+?91[\s.-]?\d{10}",
    // India regional landline: 080 41234567
    r"\d{2,4}[\s.-]?\d{6,8}",
    // European grouped: +33 1 23 45 67 89
    r"\+?\d{2,4}[\s.-]?\d{1,3}[\s.-]?\d{2}[\s.-]?\d{2}[\s.-]?\d{2}[\s.-]?\d{2}",
    // Generic international: +4930123456
    r"\+\d{1,4}[\s.-]?\d{4,14}",
    // Parenthesized groups: (0261) 4567 890
    r"\(\d{2,5}\)[\s.-]?\d{3,5}[\s.-]?\d{3,5}",
    // Bare digit run
    r"\b\d{10,15}\b",
    // Dot separated: 555.234.5678
    r"\d{3,5}\.\d{3,5}\.\d{3,5}",
    // Toll free: 1-800-555-0199, 1 888 555 0199
    r"1[\s.-]?8(?:00|88|77|66|55|44|33)[\s.-]?\d{3}[\s.-]?\d{4}",
    // 5+5 grouping: 98765 43210
    r"\d{5}[\s.-]?\d{5}",
    // International with long subscriber part: +91-80-41234567
    r"\+\d{1,4}[-\s]?\d{2,5}[-\s]?\d{5,10}",
];

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

/// Whole-string shape a normalized email must have.
const EMAIL_ADDRESS_PATTERN: &str = r"^[a-z0-9._%+-]+@[a-z0-9-]+(?:\.[a-z0-9-]+)*\.[a-z]{2,}$";

/// Short motifs that, repeated to fill a number, mark it as filler.
const REPEATED_MOTIF_PATTERN: &str = r"^(?:123|111|000|999)+$";

/// Helper function to compile a static regex pattern, panicking with a detailed
/// error message if compilation fails.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

pub(crate) static PHONE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    PHONE_PATTERNS
        .iter()
        .map(|p| compile_regex_unsafe(p, "PHONE_RES"))
        .collect()
});
pub(crate) static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(EMAIL_PATTERN, "EMAIL_RE"));
pub(crate) static EMAIL_ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(EMAIL_ADDRESS_PATTERN, "EMAIL_ADDRESS_RE"));
pub(crate) static REPEATED_MOTIF_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(REPEATED_MOTIF_PATTERN, "REPEATED_MOTIF_RE"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"\s+", "WHITESPACE_RE"));

/// Collapses whitespace runs to single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text.trim(), " ").into_owned()
}

/// Every phone-shaped substring of `text`, unvalidated, across all patterns.
pub fn find_phone_candidates(text: &str) -> Vec<String> {
    let text = collapse_whitespace(text);
    let mut candidates = Vec::new();
    for re in PHONE_RES.iter() {
        candidates.extend(re.find_iter(&text).map(|m| m.as_str().to_string()));
    }
    candidates
}

/// Every email-shaped substring of `text`, unvalidated.
pub fn find_email_candidates(text: &str) -> Vec<&str> {
    EMAIL_RE.find_iter(text).map(|m| m.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(PHONE_RES.len(), PHONE_PATTERNS.len());
        LazyLock::force(&EMAIL_RE);
        LazyLock::force(&EMAIL_ADDRESS_RE);
        LazyLock::force(&REPEATED_MOTIF_RE);
    }

    #[test]
    fn test_find_phone_candidates_formats() {
        for text in [
            "Call (555) 234-5678 today",
            "Tel: +44 20 7946 0958",
            "Ph +91 9876543210",
            "Bengaluru office 080 41234567",
            "Paris +33 1 23 45 67 89",
            "Toll free 1-800-555-0199",
            "Mobile 98765 43210",
            "Fax 555.234.5678",
            "Hotline 4930123456789",
        ] {
            assert!(
                !find_phone_candidates(text).is_empty(),
                "no phone candidate found in {text:?}"
            );
        }
    }

    #[test]
    fn test_find_phone_candidates_ignores_plain_prose() {
        assert!(find_phone_candidates("Open Monday to Friday, since 1998").is_empty());
    }

    #[test]
    fn test_find_email_candidates() {
        let found = find_email_candidates("Write to Sales@Acme-Widgets.co.uk or ops@acme.io.");
        assert_eq!(found, vec!["Sales@Acme-Widgets.co.uk", "ops@acme.io"]);
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  +1\n 555\t234  5678 "), "+1 555 234 5678");
    }
}
