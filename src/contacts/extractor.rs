//! Contact extraction from HTML.
//!
//! Passes, in priority order:
//! 1. Footer region (text plus `mailto:`/`tel:` links inside it)
//! 2. Every `mailto:`/`tel:` link in the document
//! 3. `<meta>` tags named like contact/email/phone
//! 4. Lenient re-scan of every anchor (case, whitespace, multi-recipient)
//! 5. Full visible text, only when passes 1-4 found nothing
//!
//! Each pass produces its own `ContactRecord`; the results are merged by union.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;
use url::Url;

use super::patterns::{find_email_candidates, find_phone_candidates};
use super::record::ContactRecord;
use crate::config::MAX_CONTACT_PAGES;
use crate::utils::parse_selector_unsafe;

// CSS selector strings
const NON_CONTENT_SELECTOR_STR: &str = "script, style, noscript, iframe, svg";
const FOOTER_SELECTOR_STR: &str = "footer";
const SECTION_OR_DIV_SELECTOR_STR: &str = "section, div";
const ANCHOR_SELECTOR_STR: &str = "a[href]";
const META_SELECTOR_STR: &str = "meta[name]";
const BODY_SELECTOR_STR: &str = "body";

/// Class keywords of footer-like blocks that do not say "footer".
const FOOTER_CLASS_KEYWORDS: &[&str] = &[
    "colophon",
    "site-info",
    "copyright",
    "bottom-bar",
    "page-bottom",
];

/// Words in a link's href or text that suggest a contact page.
pub const CONTACT_KEYWORDS: &[&str] = &[
    "contact",
    "about",
    "reach-us",
    "get-in-touch",
    "connect",
    "support",
    "help",
    "contactus",
];

static NON_CONTENT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(NON_CONTENT_SELECTOR_STR, "NON_CONTENT_SELECTOR"));
static FOOTER_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(FOOTER_SELECTOR_STR, "FOOTER_SELECTOR"));
static SECTION_OR_DIV_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(SECTION_OR_DIV_SELECTOR_STR, "SECTION_OR_DIV_SELECTOR")
});
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(ANCHOR_SELECTOR_STR, "ANCHOR_SELECTOR"));
static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(META_SELECTOR_STR, "META_SELECTOR"));
static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(BODY_SELECTOR_STR, "BODY_SELECTOR"));

static META_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)contact|email|phone").unwrap_or_else(|e| {
        panic!("Failed to compile META_NAME_RE: {e}. This is a programming error.")
    })
});
static CONTACT_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!("(?i)(?:{})", CONTACT_KEYWORDS.join("|"));
    Regex::new(&pattern).unwrap_or_else(|e| {
        panic!("Failed to compile CONTACT_LINK_RE: {e}. This is a programming error.")
    })
});

/// Result of scanning one fetched page.
#[derive(Debug, Clone, Default)]
pub struct PageScan {
    /// Contacts found on the page
    pub contacts: ContactRecord,
    /// Absolute URLs of likely contact pages, at most two, in document order
    pub contact_links: Vec<String>,
}

/// Extracts contacts from an HTML document.
///
/// Pure function of the markup; no network access.
pub fn extract(html: &str) -> ContactRecord {
    let mut document = Html::parse_document(html);
    strip_non_content(&mut document);
    extract_from_document(&document)
}

/// Extracts contacts and candidate contact-page links in one parse.
///
/// # Arguments
///
/// * `html` - Page body
/// * `page_url` - URL the page was served from, used to resolve relative links
pub fn scan_page(html: &str, page_url: &str) -> PageScan {
    let mut document = Html::parse_document(html);
    strip_non_content(&mut document);
    let contacts = extract_from_document(&document);
    let contact_links = match Url::parse(page_url) {
        Ok(base) => find_contact_links(&document, &base),
        Err(e) => {
            log::debug!("Cannot resolve links against '{}': {}", page_url, e);
            Vec::new()
        }
    };
    PageScan {
        contacts,
        contact_links,
    }
}

/// Detaches script/style/embedded nodes so their text never reaches a pattern.
///
/// Detached nodes stay in the arena, so every later lookup walks down from
/// `root_element()` rather than using `Html::select`.
fn strip_non_content(document: &mut Html) {
    let ids: Vec<_> = document
        .root_element()
        .select(&NON_CONTENT_SELECTOR)
        .map(|element| element.id())
        .collect();
    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

fn extract_from_document(document: &Html) -> ContactRecord {
    let found = footer_contacts(document)
        .merge(link_contacts(document))
        .merge(meta_contacts(document))
        .merge(lenient_link_contacts(document));

    if !found.is_empty() {
        return found;
    }

    log::trace!("No structured contacts found, scanning full page text");
    let root = document
        .root_element()
        .select(&BODY_SELECTOR)
        .next()
        .unwrap_or_else(|| document.root_element());
    text_contacts(&visible_text(root))
}

/// Locates the footer: `<footer>`, else a section/div whose id or class names
/// a footer, else one whose class matches a footer-like keyword.
fn find_footer(document: &Html) -> Option<ElementRef<'_>> {
    if let Some(footer) = document.root_element().select(&FOOTER_SELECTOR).next() {
        return Some(footer);
    }

    let blocks: Vec<ElementRef<'_>> = document
        .root_element()
        .select(&SECTION_OR_DIV_SELECTOR)
        .collect();
    blocks
        .iter()
        .find(|e| attr_contains(e, "id", "footer"))
        .or_else(|| blocks.iter().find(|e| attr_contains(e, "class", "footer")))
        .or_else(|| {
            blocks.iter().find(|e| {
                FOOTER_CLASS_KEYWORDS
                    .iter()
                    .any(|keyword| attr_contains(e, "class", keyword))
            })
        })
        .copied()
}

fn attr_contains(element: &ElementRef<'_>, attr: &str, needle: &str) -> bool {
    element
        .value()
        .attr(attr)
        .is_some_and(|value| value.to_ascii_lowercase().contains(needle))
}

fn footer_contacts(document: &Html) -> ContactRecord {
    let Some(footer) = find_footer(document) else {
        return ContactRecord::new();
    };

    let mut record = text_contacts(&visible_text(footer));
    for anchor in footer.select(&ANCHOR_SELECTOR) {
        if let Some(href) = anchor.value().attr("href") {
            add_strict_link(&mut record, href);
        }
    }
    record
}

fn link_contacts(document: &Html) -> ContactRecord {
    let mut record = ContactRecord::new();
    for anchor in document.root_element().select(&ANCHOR_SELECTOR) {
        if let Some(href) = anchor.value().attr("href") {
            add_strict_link(&mut record, href);
        }
    }
    record
}

fn meta_contacts(document: &Html) -> ContactRecord {
    let mut record = ContactRecord::new();
    for meta in document.root_element().select(&META_SELECTOR) {
        let element = meta.value();
        let named_like_contact = element.attr("name").is_some_and(|n| META_NAME_RE.is_match(n));
        if !named_like_contact {
            continue;
        }
        if let Some(content) = element.attr("content") {
            record = record.merge(text_contacts(content));
        }
    }
    record
}

/// Second pass over anchors that tolerates `MAILTO:`, surrounding whitespace,
/// percent-encoded `@` and several recipients in one link.
fn lenient_link_contacts(document: &Html) -> ContactRecord {
    let mut record = ContactRecord::new();
    for anchor in document.root_element().select(&ANCHOR_SELECTOR) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let href = href.trim();
        if let Some(rest) = strip_prefix_ignore_case(href, "mailto:") {
            let address_list = rest.split('?').next().unwrap_or_default();
            for address in address_list.split([',', ';']) {
                record.add_email(&address.replace("%40", "@").replace("%20", ""));
            }
        } else if let Some(rest) = strip_prefix_ignore_case(href, "tel:") {
            record.add_phone(rest.split(';').next().unwrap_or_default());
        }
    }
    record
}

fn add_strict_link(record: &mut ContactRecord, href: &str) {
    if let Some(rest) = href.strip_prefix("mailto:") {
        record.add_email(rest.split('?').next().unwrap_or_default());
    } else if let Some(rest) = href.strip_prefix("tel:") {
        record.add_phone(rest);
    }
}

fn text_contacts(text: &str) -> ContactRecord {
    let mut record = ContactRecord::new();
    for candidate in find_phone_candidates(text) {
        record.add_phone(&candidate);
    }
    for candidate in find_email_candidates(text) {
        record.add_email(candidate);
    }
    record
}

fn visible_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let head = value.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &value[prefix.len()..])
}

/// Finds up to two links that look like contact pages.
///
/// A link qualifies when its href or its text mentions a contact keyword.
/// `mailto:`, `tel:`, `javascript:` and in-page anchors are skipped; relative
/// hrefs are resolved against `base`; only http(s) targets other than the page
/// itself are kept.
pub fn find_contact_links(document: &Html, base: &Url) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for anchor in document.root_element().select(&ANCHOR_SELECTOR) {
        let Some(href) = anchor.value().attr("href").map(str::trim) else {
            continue;
        };
        let lowered = href.to_ascii_lowercase();
        if href.is_empty()
            || href.starts_with('#')
            || ["mailto:", "tel:", "javascript:"]
                .iter()
                .any(|scheme| lowered.starts_with(scheme))
        {
            continue;
        }

        let text = visible_text(anchor);
        if !CONTACT_LINK_RE.is_match(href) && !CONTACT_LINK_RE.is_match(&text) {
            continue;
        }

        let Ok(mut resolved) = base.join(href) else {
            continue;
        };
        if !matches!(resolved.scheme(), "http" | "https") {
            continue;
        }
        resolved.set_fragment(None);
        if resolved.as_str() == base.as_str() {
            continue;
        }
        if seen.insert(resolved.to_string()) {
            links.push(resolved.to_string());
            if links.len() == MAX_CONTACT_PAGES {
                break;
            }
        }
    }
    links
}
