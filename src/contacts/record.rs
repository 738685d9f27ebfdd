//! The contact accumulator for one site.

use std::collections::BTreeSet;

use serde::Serialize;

use super::validate::{validate_email, validate_phone};
use crate::config::{MAX_OUTPUT_ENTRIES, NOT_AVAILABLE};

/// Validated, deduplicated emails and phone numbers found for one site.
///
/// Values can only enter through `add_email`/`add_phone`, which validate and
/// normalize, so the sets never hold raw text. Sorted sets keep output stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    emails: BTreeSet<String>,
    phones: BTreeSet<String>,
}

impl ContactRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an email candidate if it validates. Returns true if it was new.
    pub fn add_email(&mut self, raw: &str) -> bool {
        match validate_email(raw) {
            Some(email) => self.emails.insert(email),
            None => false,
        }
    }

    /// Adds a phone candidate if it validates. Returns true if it was new.
    pub fn add_phone(&mut self, raw: &str) -> bool {
        match validate_phone(raw) {
            Some(phone) => self.phones.insert(phone),
            None => false,
        }
    }

    /// Union of two records.
    pub fn merge(mut self, other: ContactRecord) -> ContactRecord {
        self.emails.extend(other.emails);
        self.phones.extend(other.phones);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty() && self.phones.is_empty()
    }

    pub fn emails(&self) -> &BTreeSet<String> {
        &self.emails
    }

    pub fn phones(&self) -> &BTreeSet<String> {
        &self.phones
    }

    /// Up to five sorted emails joined with ", ", or `N/A`.
    pub fn email_cell(&self) -> String {
        join_cell(&self.emails)
    }

    /// Up to five sorted phones joined with ", ", or `N/A`.
    pub fn phone_cell(&self) -> String {
        join_cell(&self.phones)
    }
}

fn join_cell(values: &BTreeSet<String>) -> String {
    if values.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    values
        .iter()
        .take(MAX_OUTPUT_ENTRIES)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
