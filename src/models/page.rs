//! Pagination request parsing and the paginated list response.

use super::Contact;
use serde::{Deserialize, Serialize};

/// Page number used when the query has none or an unusable one.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when the query has none or an unusable one.
pub const DEFAULT_LIMIT: u64 = 10;

/// Largest page size served unless configured otherwise.
pub const DEFAULT_MAX_LIMIT: u64 = 100;

/// Response body for the list operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactPage {
    /// Contacts on this page, newest first
    pub contacts: Vec<Contact>,

    /// The 1-based page that was requested
    pub current_page: u64,

    /// Number of pages at the effective page size; at least 1
    pub total_pages: u64,

    /// Number of stored contacts
    pub total_contacts: u64,
}

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Build a page request from raw query values.
    ///
    /// Values are parsed leniently: a leading run of digits is used, so
    /// `"3abc"` is page 3. Missing, non-numeric and non-positive values fall
    /// back to the defaults. `limit` is clamped to `max_limit`.
    pub fn from_query(page: Option<&str>, limit: Option<&str>, max_limit: u64) -> Self {
        let page = page.and_then(parse_positive_int).unwrap_or(DEFAULT_PAGE);
        let limit = limit
            .and_then(parse_positive_int)
            .unwrap_or(DEFAULT_LIMIT)
            .min(max_limit.max(1));
        Self { page, limit }
    }

    /// Number of records to skip before this page.
    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Pages needed to show `total` records `limit` at a time.
///
/// An empty collection is one page of zero items.
pub fn total_pages(total: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 1;
    }
    total.div_ceil(limit).max(1)
}

fn parse_positive_int(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let value: u64 = trimmed[..digits_end].parse().ok()?;
    (value > 0).then_some(value)
}
